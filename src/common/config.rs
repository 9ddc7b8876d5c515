//! Configuration constants for memtree.

/// Smallest branching factor a tree may be constructed with.
///
/// A node of degree `d` holds at most `d` children and `d - 1` keys.
/// Degree 2 would leave a splitting node with a single key and no median
/// to promote, so construction rejects anything below 3.
pub const MIN_DEGREE: usize = 3;
