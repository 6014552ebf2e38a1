//! Error type for list operations.

use thiserror::Error;

use crate::NodeKey;

/// Failure of a list or pool operation.
///
/// Every failing operation leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// Position past the end of the list.
    ///
    /// `get` and `remove` require `index < len`; `insert` allows
    /// `index == len`.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The rejected position.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// No node holds the searched value.
    #[error("value {key} not found")]
    NotFound {
        /// The value that was searched for.
        key: i32,
    },
    /// The pool could not obtain memory for a new node.
    #[error("node allocation failed")]
    AllocFailed,
    /// The key refers to a node that has been released.
    #[error("node {key} has been released")]
    StaleNode {
        /// The key that no longer resolves.
        key: NodeKey,
    },
}
