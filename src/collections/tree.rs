use std::iter::FromIterator;

use num_traits::PrimInt;

use crate::error::IntervalResult;
use crate::interval::{Interval, IntoInterval};
use crate::sorter;

use super::entry::*;
use super::node::{Candidate, Pass, TreeNode};

/// A static interval tree over integer endpoints.
///
/// The tree is built once from a fixed collection of intervals, each carrying
/// a value of type `D`, and is read-only afterwards. Queries descend a
/// balanced tree over the distinct endpoints, so their cost is bounded by the
/// tree height plus the number of hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTree<N, D = ()> {
    entries: Vec<InternalEntry<N, D>>,
    root: Option<TreeNode<N>>,
}

impl<N, D> Default for IntervalTree<N, D> {
    fn default() -> Self {
        IntervalTree {
            entries: vec![],
            root: None,
        }
    }
}

impl<N, D> FromIterator<(Interval<N>, D)> for IntervalTree<N, D>
where
    N: PrimInt,
{
    fn from_iter<T: IntoIterator<Item = (Interval<N>, D)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(interval, data)| InternalEntry { interval, data })
            .collect();
        Self::build(entries)
    }
}

impl<N: PrimInt, D> IntervalTree<N, D> {
    /// Builds a tree from `(interval, value)` pairs.
    ///
    /// Fails with [`IntervalError::InvalidInterval`](crate::IntervalError)
    /// on the first interval whose left endpoint exceeds its right one. An
    /// empty input gives an empty tree.
    pub fn new<I, K>(items: I) -> IntervalResult<Self>
    where
        I: IntoIterator<Item = (K, D)>,
        K: IntoInterval<N>,
    {
        let entries = items
            .into_iter()
            .map(|(interval, data)| {
                Ok(InternalEntry {
                    interval: interval.into_interval()?,
                    data,
                })
            })
            .collect::<IntervalResult<Vec<_>>>()?;
        Ok(Self::build(entries))
    }

    fn build(entries: Vec<InternalEntry<N, D>>) -> Self {
        let (root, endpoint_count) = {
            let mut by_left = entries
                .iter()
                .enumerate()
                .map(|(index, e)| Candidate { index, interval: &e.interval })
                .collect::<Vec<_>>();
            let mut by_right = by_left.clone();

            sorter::sort_by_left(&mut by_left);
            sorter::sort_by_right(&mut by_right);

            let endpoints = sorter::merged_unique_endpoints(&by_left, &by_right);
            let mut root = TreeNode::build_skeleton(&endpoints);

            if let Some(root) = root.as_mut() {
                root.assign(by_left, Pass::ByLeft);
                root.assign(by_right, Pass::ByRight);
            }
            (root, endpoints.len())
        };

        log::debug!(
            "built interval tree: {} intervals, {} distinct endpoints, height {}",
            entries.len(),
            endpoint_count,
            root.as_ref().map_or(0, TreeNode::height),
        );

        IntervalTree { entries, root }
    }

    /// Every stored interval that shares at least one point with `query`.
    ///
    /// The order of the result is unspecified.
    pub fn find_intersecting<K: IntoInterval<N>>(
        &self,
        query: K,
    ) -> IntervalResult<Vec<Entry<N, D>>> {
        let mut buf = Vec::new();
        self.find_aux(query, &mut buf)?;
        Ok(buf)
    }

    /// Some stored interval overlapping `query`, if there is one.
    pub fn find<K: IntoInterval<N>>(&self, query: K) -> IntervalResult<Option<Entry<N, D>>> {
        let mut first = None;
        self.find_aux(query, &mut first)?;
        Ok(first)
    }

    pub fn overlaps<K: IntoInterval<N>>(&self, query: K) -> IntervalResult<bool> {
        let mut found = false;
        self.find_aux(query, &mut found)?;
        Ok(found)
    }

    pub fn find_point(&self, point: N) -> Option<Entry<N, D>> {
        let mut first = None;
        if let Some(root) = &self.root {
            Self::search(root, &self.entries, &Interval::point(point), &mut first);
        }
        first
    }

    pub fn contains_point(&self, point: N) -> bool {
        self.find_point(point).is_some()
    }

    fn find_aux<'a, K, C>(&'a self, query: K, results: &mut C) -> IntervalResult<()>
    where
        K: IntoInterval<N>,
        C: EntryContainer<'a, N, D>,
    {
        let query = query.into_interval()?;
        if let Some(root) = &self.root {
            Self::search(root, &self.entries, &query, results);
        }
        Ok(())
    }

    /// Collects the hits below `node`; returns `true` when `results` asked to stop.
    fn search<'a, C>(
        node: &TreeNode<N>,
        entries: &'a [InternalEntry<N, D>],
        query: &Interval<N>,
        results: &mut C,
    ) -> bool
    where
        C: EntryContainer<'a, N, D>,
    {
        let split = node.split_value();

        if query.contains_point(split) {
            // everything stored here contains the split, and so does the query
            for &i in node.left_bucket() {
                if results.push_entry(entries[i].entry(i)) {
                    return true;
                }
            }
            if let Some((left, right)) = node.children() {
                return Self::search(left, entries, query, results)
                    || Self::search(right, entries, query, results);
            }
        } else if split < query.left() {
            // bucket is ascending by right endpoint; stop at the first one short of the query
            for &i in node.right_bucket().iter().rev() {
                if !entries[i].interval.intersects(query) {
                    break;
                }
                if results.push_entry(entries[i].entry(i)) {
                    return true;
                }
            }
            if let Some(right) = node.right_child() {
                return Self::search(right, entries, query, results);
            }
        } else {
            // bucket is ascending by left endpoint; stop at the first one past the query
            for &i in node.left_bucket() {
                if !entries[i].interval.intersects(query) {
                    break;
                }
                if results.push_entry(entries[i].entry(i)) {
                    return true;
                }
            }
            if let Some(left) = node.left_child() {
                return Self::search(left, entries, query, results);
            }
        }

        false
    }
}

impl<N, D> IntervalTree<N, D> {
    /// Root of the endpoint tree; `None` when the tree holds no intervals.
    pub fn root(&self) -> Option<&TreeNode<N>> {
        self.root.as_ref()
    }

    /// Height of the endpoint tree, `0` for a single endpoint or an empty tree.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::height)
    }

    pub fn get(&self, index: usize) -> Option<Entry<N, D>> {
        self.entries.get(index).map(|e| e.entry(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Interval<N>, &D)> {
        self.entries.iter().map(|e| (&e.interval, &e.data))
    }

    pub fn into_iter(self) -> impl Iterator<Item = (Interval<N>, D)> {
        self.entries.into_iter().map(|e| (e.interval, e.data))
    }

    pub fn intervals(&self) -> impl Iterator<Item = &Interval<N>> {
        self.entries.iter().map(|e| &e.interval)
    }

    pub fn values(&self) -> impl Iterator<Item = &D> {
        self.entries.iter().map(|e| &e.data)
    }
}
