//! Error types for memtree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in memtree.
///
/// The tree itself is a pure in-memory structure: once constructed,
/// `insert` and `search` are total and cannot fail. The only fallible
/// point is construction with an unusable branching factor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested maximum degree is below
    /// [`MIN_DEGREE`](crate::common::config::MIN_DEGREE).
    #[error("max degree must be 3 or greater, got {0}")]
    DegreeTooSmall(usize),
}
