//! Tree operation statistics tracking.

use std::fmt;

/// Counters tracked by the tree across its lifetime.
///
/// All operations on the tree take `&mut self`, so plain integers are
/// enough; the struct is `Copy` and can be snapshotted by value at any
/// point via [`BTree::stats`](crate::BTree::stats).
///
/// # Example
/// ```
/// use memtree::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// for i in 0..10 {
///     tree.insert(i);
/// }
///
/// let stats = tree.stats();
/// assert_eq!(stats.keys_inserted, 10);
/// assert!(stats.node_splits > 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of keys inserted (duplicates included).
    pub keys_inserted: u64,

    /// Number of node splits, cascades included.
    pub node_splits: u64,

    /// Number of times a split reached the root and grew the tree.
    pub root_splits: u64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Average number of splits per inserted key.
    pub fn splits_per_insert(&self) -> f64 {
        if self.keys_inserted == 0 {
            0.0
        } else {
            self.node_splits as f64 / self.keys_inserted as f64
        }
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserted: {}, splits: {}, root splits: {}, splits/insert: {:.3} }}",
            self.keys_inserted,
            self.node_splits,
            self.root_splits,
            self.splits_per_insert()
        )
    }
}
