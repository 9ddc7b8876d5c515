//! Arena handle for tree nodes.

use std::fmt;

/// Index of a node in the tree's backing `Vec`.
///
/// Plain `usize` under the hood, so arena access is a direct index with
/// no casting: `nodes[id.0]`. A handle is only meaningful inside the
/// tree that issued it — split replacement recycles slots, so a handle
/// held across mutations may name a different node. Nothing in the
/// public API hands one out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
