//! BTree - the balanced multiway search tree.
//!
//! The [`BTree`] owns an arena of nodes and drives all balancing logic:
//! descent, leaf insertion, and split propagation up the ancestor chain.
//!
//! # Ownership
//! Ownership is strictly hierarchical: a node is referenced by exactly one
//! parent (or by the tree's root handle), and nodes never point back up.
//! The insert path therefore carries an explicit stack of ancestor handles
//! and branch indices instead of parent pointers, which keeps the arena
//! free of cycles and tells a split exactly which child gap it came from.
//!
//! # Splits replace, never mutate
//! An overfull node is not rebalanced in place. Its keys and children are
//! partitioned around the median into two freshly allocated nodes, the
//! parent's child list is spliced, and the old slot goes on the free list.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::btree::node::Node;
use crate::btree::stats::TreeStats;
use crate::common::config::MIN_DEGREE;
use crate::common::{Error, NodeId, Result};

/// An in-memory B-tree over a totally ordered key type.
///
/// Every node holds at most `max_degree` children and `max_degree - 1`
/// keys, which bounds the depth at O(log N). Duplicate keys are permitted
/// and kept adjacent.
///
/// # Thread Safety
/// All operations run to completion on the calling thread; the tree holds
/// no internal locks. Wrap it in a lock if it must be shared.
///
/// # Example
/// ```
/// use memtree::BTree;
///
/// let mut tree = BTree::new(5)?;
/// tree.insert(3);
/// tree.insert(1);
/// tree.insert(2);
///
/// assert!(tree.search(&2));
/// assert!(!tree.search(&4));
/// # Ok::<(), memtree::Error>(())
/// ```
#[derive(Debug)]
pub struct BTree<T> {
    /// Arena holding every node, live or recycled.
    nodes: Vec<Node<T>>,

    /// Handle of the current root; replaced wholesale when the root splits.
    root: NodeId,

    /// Recycled arena slots (LIFO for locality).
    free_list: Vec<NodeId>,

    /// Maximum number of children per node (immutable after construction).
    max_degree: usize,

    /// Maximum number of keys per node: `max_degree - 1`.
    max_keys: usize,

    /// Operation counters.
    stats: TreeStats,
}

impl<T: Ord> BTree<T> {
    /// Create an empty tree with the given maximum branching factor.
    ///
    /// The fresh tree is a single node that is both root and leaf.
    ///
    /// # Errors
    /// - [`Error::DegreeTooSmall`] if `max_degree` is below [`MIN_DEGREE`]
    pub fn new(max_degree: usize) -> Result<Self> {
        if max_degree < MIN_DEGREE {
            return Err(Error::DegreeTooSmall(max_degree));
        }

        Ok(Self {
            nodes: vec![Node::new_root()],
            root: NodeId::new(0),
            free_list: Vec::new(),
            max_degree,
            max_keys: max_degree - 1,
            stats: TreeStats::new(),
        })
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// True iff a key equal to `value` exists anywhere in the tree.
    ///
    /// Standard descent: at each node, equality anywhere in the key run is
    /// a hit; otherwise the count of keys strictly less than `value` picks
    /// the child to continue in. Never mutates the tree.
    pub fn search(&self, value: &T) -> bool {
        let mut current = self.root;

        loop {
            let node = self.node(current);

            let mut branch = 0;
            for key in &node.keys {
                match value.cmp(key) {
                    Ordering::Equal => return true,
                    Ordering::Greater => branch += 1,
                    Ordering::Less => break,
                }
            }

            if node.children.is_empty() {
                return false;
            }

            current = node.children[branch];
        }
    }

    /// Maximum number of children per node.
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Maximum number of keys per node (`max_degree - 1`).
    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    /// Number of levels in the tree; 1 for a fresh tree.
    ///
    /// Every leaf sits at the same depth, so the leftmost descent measures
    /// the whole tree.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;

        while let Some(&child) = self.node(current).children.first() {
            height += 1;
            current = child;
        }

        height
    }

    /// Get tree statistics.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    // ========================================================================
    // Public API: Insertion
    // ========================================================================

    /// Insert `value`, keeping the tree balanced.
    ///
    /// Descends to the leaf the value belongs in, recording each ancestor
    /// and the branch taken on the way down. The key is added in sorted
    /// position; if that overfills the leaf, the split procedure promotes
    /// the median upward, cascading as far as the root if every ancestor
    /// is full.
    ///
    /// Duplicates are accepted; always succeeds.
    pub fn insert(&mut self, value: T) {
        let mut path: Vec<(NodeId, usize)> = Vec::new();
        let mut current = self.root;

        // Find the leaf this value belongs in. Nodes hold no parent
        // links, so the path is the only way back up during a split.
        loop {
            let node = self.node(current);
            if node.is_leaf() {
                break;
            }

            // Branch index = count of keys strictly less than the value;
            // the scan stops at the first equal-or-greater key.
            let branch = node.keys.iter().take_while(|k| value > **k).count();

            path.push((current, branch));
            current = node.children[branch];
        }

        self.nodes[current.0].add_key(value);
        self.stats.keys_inserted += 1;

        // One over budget means the leaf must split.
        if self.nodes[current.0].keys.len() > self.max_keys {
            self.split(current, path);
        }
    }

    // ========================================================================
    // Internal: Split propagation
    // ========================================================================

    /// Split an overfull node and propagate its median up the ancestor
    /// chain, consuming `path` (ancestor handle, branch taken) bottom-up.
    ///
    /// On entry the node holds exactly `max_keys + 1` keys. Each round
    /// replaces the node with two fresh halves; the loop continues while
    /// promoting the median overfills the next ancestor. An empty path
    /// means the node is the root, which ends the cascade by growing the
    /// tree one level.
    fn split(&mut self, mut node_id: NodeId, mut path: Vec<(NodeId, usize)>) {
        loop {
            self.stats.node_splits += 1;

            let node = &mut self.nodes[node_id.0];
            let was_leaf = node.is_leaf();
            let mut keys = mem::take(&mut node.keys);
            let mut children = mem::take(&mut node.children);

            // Excise the median; it moves up, the halves keep the rest.
            let median_idx = keys.len() / 2;
            let median = keys.remove(median_idx);
            let right_keys = keys.split_off(median_idx);
            let left_keys = keys;

            // An internal node's children split at the same boundary: the
            // left half takes one more child than it has keys.
            let (left_children, right_children) = if children.is_empty() {
                (Vec::new(), Vec::new())
            } else {
                let right_children = children.split_off(median_idx + 1);
                (children, right_children)
            };

            let left = self.alloc(Node::from_parts(was_leaf, false, left_keys, left_children));
            let right = self.alloc(Node::from_parts(was_leaf, false, right_keys, right_children));

            match path.pop() {
                // Only the root has an empty ancestor path: grow the tree
                // by one level with a fresh root holding just the median.
                // A fresh root can never be overfull, so the cascade ends.
                None => {
                    let new_root =
                        self.alloc(Node::from_parts(false, true, vec![median], vec![left, right]));
                    self.root = new_root;
                    self.free(node_id);
                    self.stats.root_splits += 1;
                    return;
                }

                Some((parent_id, slot)) => {
                    let parent = &mut self.nodes[parent_id.0];

                    // The split child occupies `slot`, the key gap its
                    // median came from: the median enters the parent's key
                    // run there and the two halves take the child's place.
                    // Reusing the descent slot keeps the median on the same
                    // side of an equal separator that the descent chose.
                    parent.keys.insert(slot, median);
                    parent.children[slot] = left;
                    parent.children.insert(slot + 1, right);

                    let overfull = parent.keys.len() > self.max_keys;
                    self.free(node_id);

                    if !overfull {
                        return;
                    }

                    // The promotion overfilled the parent; split it next.
                    node_id = parent_id;
                }
            }
        }
    }

    // ========================================================================
    // Internal: Arena management
    // ========================================================================

    /// Shorthand for arena access.
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    /// Place a node in the arena, reusing a recycled slot when one exists.
    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                let id = NodeId::new(self.nodes.len());
                self.nodes.push(node);
                id
            }
        }
    }

    /// Recycle an arena slot whose node has been replaced.
    ///
    /// The split routine has already moved the keys and children out; the
    /// placeholder just clears the stale flags.
    fn free(&mut self, id: NodeId) {
        self.nodes[id.0] = Node::detached();
        self.free_list.push(id);
    }

    // ========================================================================
    // Public API: Diagnostics
    // ========================================================================

    /// Verify the structural invariants of the whole tree.
    ///
    /// Checks, for every reachable node:
    /// - keys are sorted ascending (duplicates allowed)
    /// - `keys.len() <= max_keys` and `children.len() <= max_degree`
    /// - a non-leaf has exactly `keys.len() + 1` children
    /// - the leaf flag matches the child count, and only the root carries
    ///   the root flag
    /// - every key under child `i` lies within the bounds set by the
    ///   surrounding separator keys (weak inequalities, since duplicates
    ///   may equal a separator)
    ///
    /// Purely diagnostic; a tree only ever mutated through [`insert`](Self::insert)
    /// always passes.
    pub fn is_valid(&self) -> bool {
        self.node(self.root).is_root && self.subtree_valid(self.root, None, None)
    }

    fn subtree_valid(&self, id: NodeId, lower: Option<&T>, upper: Option<&T>) -> bool {
        let node = self.node(id);

        if node.keys.len() > self.max_keys || node.children.len() > self.max_degree {
            return false;
        }
        if !node.keys.windows(2).all(|pair| pair[0] <= pair[1]) {
            return false;
        }
        if node.is_leaf() != node.children.is_empty() {
            return false;
        }

        // Sorted keys only need their extremes checked against the bounds.
        if let Some(lo) = lower {
            if node.keys.first().is_some_and(|k| k < lo) {
                return false;
            }
        }
        if let Some(hi) = upper {
            if node.keys.last().is_some_and(|k| k > hi) {
                return false;
            }
        }

        if node.children.is_empty() {
            return true;
        }
        if node.children.len() != node.keys.len() + 1 {
            return false;
        }

        node.children.iter().enumerate().all(|(i, &child)| {
            if self.node(child).is_root {
                return false;
            }
            let lo = if i == 0 { lower } else { Some(&node.keys[i - 1]) };
            let hi = if i == node.keys.len() {
                upper
            } else {
                Some(&node.keys[i])
            };
            self.subtree_valid(child, lo, hi)
        })
    }

    /// Produce a multi-line dump of the tree.
    ///
    /// Pre-order, children left to right, two spaces of indentation per
    /// level, one `Keys: [ .. ]` line per node. Diagnostic only.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for BTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Depth-first pre-order via an explicit stack; children are pushed
        // in reverse so the leftmost pops first.
        let mut pending = vec![(self.root, 0usize)];

        while let Some((id, depth)) = pending.pop() {
            let node = self.node(id);

            write!(f, "{}Keys: [ ", "  ".repeat(depth))?;
            for key in &node.keys {
                write!(f, "{} ", key)?;
            }
            writeln!(f, "]")?;

            for &child in node.children.iter().rev() {
                pending.push((child, depth + 1));
            }
        }

        Ok(())
    }
}
