mod entry;
pub use entry::Entry;

mod node;
pub use node::TreeNode;

mod tree;
pub use tree::IntervalTree;

pub mod set;
pub use set::IntervalSet;
