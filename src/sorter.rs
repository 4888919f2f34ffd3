//! Ordering helpers used while building an [`IntervalTree`](crate::IntervalTree).
//!
//! Both sorts are stable: intervals with equal keys keep their relative input
//! order, so the bucket contents of a tree built from the same sequence are
//! always the same.

use std::cmp::Ordering;

use crate::interval::Interval;

/// Sorts `items` in place by ascending left endpoint.
pub fn sort_by_left<N: Ord, T: AsRef<Interval<N>>>(items: &mut [T]) {
    items.sort_by(|l, r| l.as_ref().left().cmp(r.as_ref().left()));
}

/// Sorts `items` in place by ascending right endpoint.
pub fn sort_by_right<N: Ord, T: AsRef<Interval<N>>>(items: &mut [T]) {
    items.sort_by(|l, r| l.as_ref().right().cmp(r.as_ref().right()));
}

/// Returns every endpoint appearing in the input, strictly ascending.
///
/// `left_sorted` and `right_sorted` must hold the same intervals, ordered by
/// [`sort_by_left`] and [`sort_by_right`] respectively. The left endpoints of
/// the first and the right endpoints of the second are then two ascending
/// runs, which are merged while dropping repeats.
pub fn merged_unique_endpoints<N, T>(left_sorted: &[T], right_sorted: &[T]) -> Vec<N>
where
    N: Ord + Clone,
    T: AsRef<Interval<N>>,
{
    let mut lefts = left_sorted.iter().map(|i| i.as_ref().left()).peekable();
    let mut rights = right_sorted.iter().map(|i| i.as_ref().right()).peekable();
    let mut endpoints: Vec<N> = Vec::with_capacity(left_sorted.len() + right_sorted.len());

    loop {
        let next = match (lefts.peek(), rights.peek()) {
            (Some(l), Some(r)) => match l.cmp(r) {
                Ordering::Greater => rights.next(),
                _ => lefts.next(),
            },
            (Some(_), None) => lefts.next(),
            (None, Some(_)) => rights.next(),
            (None, None) => break,
        };

        if let Some(value) = next {
            if endpoints.last() != Some(value) {
                endpoints.push(value.clone());
            }
        }
    }

    endpoints
}
