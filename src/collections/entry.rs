use crate::interval::Interval;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct InternalEntry<N, D> {
    pub(crate) data: D,
    pub(crate) interval: Interval<N>,
}

impl<N, D> InternalEntry<N, D> {
    #[inline(always)]
    pub(crate) fn entry(&self, index: usize) -> Entry<'_, N, D> {
        Entry {
            index,
            data: &self.data,
            interval: &self.interval,
        }
    }
}

/// A stored interval and its value, as returned by tree queries.
///
/// `index` is the position of the interval in the sequence the tree was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<'a, N, D> {
    pub(crate) index: usize,
    pub(crate) data: &'a D,
    pub(crate) interval: &'a Interval<N>,
}

impl<'a, N: 'a, D: 'a> Entry<'a, N, D> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &'a D {
        self.data
    }

    pub fn interval(&self) -> &'a Interval<N> {
        self.interval
    }
}

/// Sink for query hits. `push_entry` returns `true` once the container has
/// seen enough and the traversal should stop.
pub(crate) trait EntryContainer<'a, N, D> {
    fn push_entry(&mut self, entry: Entry<'a, N, D>) -> bool;
}

impl<'a, N, D> EntryContainer<'a, N, D> for bool {
    fn push_entry(&mut self, _entry: Entry<'a, N, D>) -> bool {
        *self = true;
        true
    }
}

impl<'a, N, D> EntryContainer<'a, N, D> for Option<Entry<'a, N, D>> {
    fn push_entry(&mut self, entry: Entry<'a, N, D>) -> bool {
        *self = Some(entry);
        true
    }
}

impl<'a, N, D> EntryContainer<'a, N, D> for Vec<Entry<'a, N, D>> {
    fn push_entry(&mut self, entry: Entry<'a, N, D>) -> bool {
        self.push(entry);
        false
    }
}
