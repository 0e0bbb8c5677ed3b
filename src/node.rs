//! Child references and branch nodes.
//!
//! Every slot that can hold a child, the root slot included, stores a [`Child`]. The variant is
//! the tag that tells a branch node apart from a leaf record, so a leaf can never be mistaken for
//! a branch whatever the alignment of the caller's buffer.

use std::fmt;

use crate::{point::Point, record::Record};

/// Handle of a branch node inside the tree's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BranchId(u32);

impl BranchId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The content of a child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Child<'a> {
    Leaf(Record<'a>),
    Branch(BranchId),
}

/// An internal node deciding on one critical bit.
///
/// Records whose critical bit is clear live under `children[0]`, the others under `children[1]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Branch<'a> {
    pub children: [Child<'a>; 2],
    pub point: Point,
}

impl<'a> Branch<'a> {
    /// Creates a branch holding `leaf` on one side and `sibling` on the side `sibling_dir`.
    pub(crate) fn split(
        point: Point,
        sibling_dir: usize,
        sibling: Child<'a>,
        leaf: Record<'a>,
    ) -> Self {
        let mut children = [Child::Leaf(leaf); 2];
        children[sibling_dir] = sibling;
        Self { children, point }
    }
}
