//! Common error types for the Trivium workspace.

use thiserror::Error;

/// Top-level error type for Trivium operations.
///
/// The cipher core is a pure transform and has exactly one failure mode:
/// a caller-supplied argument that is out of range. Everything else
/// (short keys, long IVs, empty inputs) is normalized, not rejected.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
