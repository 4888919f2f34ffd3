use std::collections::VecDeque;

use num_traits::PrimInt;

use crate::interval::Interval;

/// An interval waiting to be placed in a bucket, paired with its position in
/// the tree's entry list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a, N> {
    pub(crate) index: usize,
    pub(crate) interval: &'a Interval<N>,
}

impl<'a, N> AsRef<Interval<N>> for Candidate<'a, N> {
    fn as_ref(&self) -> &Interval<N> {
        self.interval
    }
}

/// Which global ordering a mapping pass distributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    ByLeft,
    ByRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Branch<N> {
    Leaf,
    Internal {
        left: Box<TreeNode<N>>,
        right: Box<TreeNode<N>>,
    },
}

/// A node of the endpoint tree.
///
/// Both buckets hold the same intervals (those containing the split value),
/// as indices into the owning tree's entries. The left bucket is ordered by
/// ascending left endpoint and the right bucket by ascending right endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<N> {
    split: N,
    min: N,
    max: N,
    branch: Branch<N>,
    left_bucket: Vec<usize>,
    right_bucket: Vec<usize>,
}

/// Floor of `(a + b) / 2` without overflowing `N`.
#[inline(always)]
fn midpoint<N: PrimInt>(a: N, b: N) -> N {
    (a & b) + ((a ^ b) >> 1)
}

impl<N: PrimInt> TreeNode<N> {
    fn leaf(endpoint: N) -> Self {
        TreeNode {
            split: endpoint,
            min: endpoint,
            max: endpoint,
            branch: Branch::Leaf,
            left_bucket: Vec::new(),
            right_bucket: Vec::new(),
        }
    }

    fn join(left: TreeNode<N>, right: TreeNode<N>) -> Self {
        TreeNode {
            split: midpoint(left.max, right.min),
            min: left.min,
            max: right.max,
            branch: Branch::Internal {
                left: Box::new(left),
                right: Box::new(right),
            },
            left_bucket: Vec::new(),
            right_bucket: Vec::new(),
        }
    }

    /// Builds the balanced skeleton over strictly ascending `endpoints`.
    ///
    /// Nodes are paired off in queue order, one round at a time; an odd node
    /// left at the end of a round moves to the back of the queue untouched.
    /// Returns `None` when there are no endpoints.
    pub(crate) fn build_skeleton(endpoints: &[N]) -> Option<Self> {
        let mut queue: VecDeque<TreeNode<N>> = endpoints.iter().map(|&e| Self::leaf(e)).collect();

        while queue.len() > 1 {
            let mut pending = queue.len();
            while pending > 1 {
                if let (Some(t1), Some(t2)) = (queue.pop_front(), queue.pop_front()) {
                    queue.push_back(Self::join(t1, t2));
                }
                pending -= 2;
            }
            if pending == 1 {
                if let Some(odd) = queue.pop_front() {
                    queue.push_back(odd);
                }
            }
        }

        queue.pop_front()
    }

    /// Distributes `candidates` (already in the pass's global order) into
    /// this subtree's buckets for `pass`.
    pub(crate) fn assign(&mut self, candidates: Vec<Candidate<'_, N>>, pass: Pass) {
        let mut lower = Vec::new();
        let mut upper = Vec::new();

        for candidate in candidates {
            if candidate.interval.contains_point(&self.split) {
                match pass {
                    Pass::ByLeft => self.left_bucket.push(candidate.index),
                    Pass::ByRight => self.right_bucket.push(candidate.index),
                }
            } else if *candidate.interval.right() < self.split {
                lower.push(candidate);
            } else {
                upper.push(candidate);
            }
        }

        match &mut self.branch {
            Branch::Internal { left, right } => {
                if !lower.is_empty() {
                    left.assign(lower, pass);
                }
                if !upper.is_empty() {
                    right.assign(upper, pass);
                }
            }
            // every endpoint of an interval reaching a leaf equals the leaf's split value
            Branch::Leaf => debug_assert!(lower.is_empty() && upper.is_empty()),
        }
    }
}

impl<N> TreeNode<N> {
    pub fn split_value(&self) -> &N {
        &self.split
    }

    pub fn min_endpoint(&self) -> &N {
        &self.min
    }

    pub fn max_endpoint(&self) -> &N {
        &self.max
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.branch, Branch::Leaf)
    }

    pub fn left_child(&self) -> Option<&TreeNode<N>> {
        self.children().map(|(left, _)| left)
    }

    pub fn right_child(&self) -> Option<&TreeNode<N>> {
        self.children().map(|(_, right)| right)
    }

    pub fn children(&self) -> Option<(&TreeNode<N>, &TreeNode<N>)> {
        match &self.branch {
            Branch::Leaf => None,
            Branch::Internal { left, right } => Some((left, right)),
        }
    }

    /// Indices of the intervals stored here, by ascending left endpoint.
    pub fn left_bucket(&self) -> &[usize] {
        &self.left_bucket
    }

    /// Indices of the intervals stored here, by ascending right endpoint.
    pub fn right_bucket(&self) -> &[usize] {
        &self.right_bucket
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.height().max(right.height()),
        }
    }
}
