//! memtree - an in-memory B-tree with a configurable branching factor.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        BTree<T>                           │
//! │  ┌──────────────┐  ┌───────────────────────────────────┐  │
//! │  │ root: NodeId │─▶│       nodes: Vec<Node<T>>         │  │
//! │  └──────────────┘  │  [Node0] [Node1] [Node2] ...      │  │
//! │  ┌──────────────┐  └───────────────────────────────────┘  │
//! │  │  free_list   │  ┌──────────────┐  ┌────────────────┐   │
//! │  │ Vec<NodeId>  │  │  TreeStats   │  │  max_degree    │   │
//! │  └──────────────┘  └──────────────┘  └────────────────┘   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Nodes live in an arena (`Vec<Node<T>>`) and refer to their children by
//! index. There are no parent pointers: insertion tracks the ancestor
//! chain on an explicit stack, and a node split replaces the split node
//! wholesale with two fresh nodes, recycling the old slot through a
//! free list.
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`btree`] - The tree, its nodes, and operation statistics
//!
//! # Quick Start
//! ```
//! use memtree::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! for i in 0..100 {
//!     tree.insert(i);
//! }
//!
//! assert!(tree.search(&42));
//! assert!(!tree.search(&100));
//! ```

pub mod btree;
pub mod common;

// Re-export commonly used items at crate root for convenience
pub use btree::{BTree, TreeStats};
pub use common::config::MIN_DEGREE;
pub use common::{Error, Result};
