//! A static interval tree over closed integer intervals.
//!
//! The tree is built once from a fixed collection of intervals and answers
//! "which stored intervals overlap this one" in time proportional to the
//! tree height plus the number of hits.
//!
//! ```
//! use stabbing::IntervalSet;
//!
//! let set = IntervalSet::<i64>::new(vec![(1, 5), (3, 8), (10, 12)]).unwrap();
//! assert_eq!(set.find_intersecting(4..=11).unwrap().len(), 3);
//! assert!(set.find_intersecting((13, 20)).unwrap().is_empty());
//! ```

pub mod collections;
pub use collections::{Entry, IntervalSet, IntervalTree, TreeNode};

mod error;
pub use error::{IntervalError, IntervalResult};

pub mod interval;
pub use interval::{Interval, IntoInterval};

pub mod sorter;
