//! Node - the tree's storage unit.
//!
//! A [`Node`] is an ordered run of keys plus the arena handles of its
//! children. It carries no balancing logic of its own; splits are driven
//! by the tree, which owns the arena the handles point into.

use crate::common::NodeId;

/// A single node of the tree.
///
/// # Invariants (maintained by the tree)
/// - `keys` is sorted ascending (duplicates allowed, kept adjacent)
/// - `children` is empty (leaf) or holds exactly `keys.len() + 1` handles
/// - between operations `keys.len() <= max_degree - 1`; a node briefly
///   holds one extra key inside the split routine
#[derive(Debug)]
pub(super) struct Node<T> {
    /// Keys, sorted ascending at all times.
    pub(super) keys: Vec<T>,

    /// Child handles, left to right. Empty for a leaf.
    pub(super) children: Vec<NodeId>,

    /// True iff this node has no children.
    pub(super) is_leaf: bool,

    /// True for exactly one node in the tree.
    pub(super) is_root: bool,
}

impl<T: Ord> Node<T> {
    /// Create an empty leaf root - the state of a fresh tree.
    pub(super) fn new_root() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf: true,
            is_root: true,
        }
    }

    /// Create a node from pre-partitioned keys and children.
    ///
    /// Used by the split routine, which builds replacement nodes wholesale
    /// rather than mutating the overfull node in place.
    pub(super) fn from_parts(
        is_leaf: bool,
        is_root: bool,
        keys: Vec<T>,
        children: Vec<NodeId>,
    ) -> Self {
        Self {
            keys,
            children,
            is_leaf,
            is_root,
        }
    }

    /// Placeholder stored in a recycled arena slot.
    pub(super) fn detached() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf: true,
            is_root: false,
        }
    }

    /// Insert `key` keeping `keys` sorted ascending.
    ///
    /// A duplicate lands immediately after its equals, so equal keys stay
    /// adjacent. Children are untouched.
    pub(super) fn add_key(&mut self, key: T) {
        let pos = self.keys.partition_point(|k| *k <= key);
        self.keys.insert(pos, key);
    }

    /// True iff this node has no children.
    pub(super) fn is_leaf(&self) -> bool {
        self.is_leaf
    }
}
