use std::iter::FromIterator;

use num_traits::PrimInt;

use crate::error::IntervalResult;
use crate::interval::{Interval, IntoInterval};

use super::{IntervalTree, TreeNode};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Entry<'a, N>(super::Entry<'a, N, ()>);

impl<'a, N: 'a> From<super::Entry<'a, N, ()>> for Entry<'a, N> {
    #[inline(always)]
    fn from(e: super::Entry<'a, N, ()>) -> Self {
        Self(e)
    }
}

impl<'a, N: 'a> Entry<'a, N> {
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0.index()
    }

    #[inline(always)]
    pub fn interval(&self) -> &'a Interval<N> {
        self.0.interval()
    }
}

/// An [`IntervalTree`] whose intervals carry no values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct IntervalSet<N>(IntervalTree<N, ()>);

impl<N> Default for IntervalSet<N> {
    #[inline(always)]
    fn default() -> Self {
        Self(IntervalTree::default())
    }
}

impl<N: PrimInt> FromIterator<Interval<N>> for IntervalSet<N> {
    fn from_iter<T: IntoIterator<Item = Interval<N>>>(iter: T) -> Self {
        Self(iter.into_iter().map(|interval| (interval, ())).collect())
    }
}

impl<N: PrimInt> IntervalSet<N> {
    #[inline(always)]
    pub fn new<I, K>(intervals: I) -> IntervalResult<Self>
    where K: IntoInterval<N>,
          I: IntoIterator<Item = K> {
        IntervalTree::new(intervals.into_iter().map(|k| (k, ()))).map(Self)
    }

    #[inline(always)]
    pub fn find_intersecting<K: IntoInterval<N>>(
        &self,
        interval: K,
    ) -> IntervalResult<Vec<Entry<N>>> {
        Ok(self.0.find_intersecting(interval)?.into_iter().map(Entry::from).collect())
    }

    #[inline(always)]
    pub fn find<K: IntoInterval<N>>(&self, interval: K) -> IntervalResult<Option<Entry<N>>> {
        Ok(self.0.find(interval)?.map(Entry::from))
    }

    #[inline(always)]
    pub fn overlaps<K: IntoInterval<N>>(&self, interval: K) -> IntervalResult<bool> {
        self.0.overlaps(interval)
    }

    #[inline(always)]
    pub fn find_point(&self, point: N) -> Option<Entry<N>> {
        self.0.find_point(point).map(Entry::from)
    }

    #[inline(always)]
    pub fn contains_point(&self, point: N) -> bool {
        self.0.contains_point(point)
    }
}

impl<N> IntervalSet<N> {
    #[inline(always)]
    pub fn root(&self) -> Option<&TreeNode<N>> {
        self.0.root()
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.0.height()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<Entry<N>> {
        self.0.get(index).map(Entry::from)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &Interval<N>> {
        self.0.intervals()
    }

    #[inline(always)]
    pub fn into_iter(self) -> impl Iterator<Item = Interval<N>> {
        self.0.into_iter().map(|(e, _)| e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_queries() {
        let set = IntervalSet::<i32>::new(vec![(1, 10), (2, 3), (4, 9)]).unwrap();
        assert_eq!(set.len(), 3);

        let mut found: Vec<(i32, i32)> = set
            .find_intersecting(5..=5)
            .unwrap()
            .into_iter()
            .map(|e| (*e.interval().left(), *e.interval().right()))
            .collect();
        found.sort();
        assert_eq!(found, vec![(1, 10), (4, 9)]);

        assert!(set.overlaps((3, 3)).unwrap());
        assert!(!set.overlaps((11, 40)).unwrap());
        let stabbed = set.find_point(2).unwrap().index();
        assert!(stabbed == 0 || stabbed == 1);
        assert!(!set.contains_point(0));
    }

    #[test]
    fn test_set_rejects_invalid() {
        assert!(IntervalSet::<i32>::new(vec![(3, 1)]).is_err());
        assert!(IntervalSet::<i32>::new(Vec::<(i32, i32)>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_set_collect() {
        let set: IntervalSet<i16> = vec![Interval::point(4), Interval::new(-2, 1).unwrap()]
            .into_iter()
            .collect();
        assert_eq!(set.iter().count(), 2);
        assert_eq!(set.get(1).unwrap().interval(), &Interval::new(-2, 1).unwrap());
        assert!(set.contains_point(4));
        assert!(set.contains_point(-1));
    }
}
