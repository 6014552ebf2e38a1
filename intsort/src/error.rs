//! Error type for sorting.

use std::collections::TryReserveError;

use thiserror::Error;

/// Failure of a sort or of algorithm selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Merge sort could not allocate a temporary half-buffer.
    ///
    /// The buffer being sorted still holds a permutation of its input.
    #[error("failed to allocate {len} element merge buffer")]
    Alloc {
        /// Element count of the buffer that could not be allocated.
        len: usize,
        /// Underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
    /// No sorting algorithm goes by this name.
    #[error("unknown sort algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
