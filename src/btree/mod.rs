//! B-tree implementation.
//!
//! - [`BTree`] - the tree: construction, insertion, search, rendering
//! - [`TreeStats`] - operation counters for diagnostics
//!
//! Node storage and the split machinery live in the private submodules.

mod node;
mod stats;
mod tree;

pub use stats::TreeStats;
pub use tree::BTree;
