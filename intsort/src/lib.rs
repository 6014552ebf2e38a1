//! Six classic comparison sorts over integer buffers.
//!
//! Every sort takes `&mut [i32]` and sorts it ascending in place. The
//! exclusive borrow is the whole contract: the caller hands over write access
//! for the duration of the call and gets the sorted buffer back.
//!
//! | Algorithm | Entry point | Time | Extra space | Stable |
//! |-----------|-------------|------|-------------|--------|
//! | Selection | [`selection_sort`] | O(n²) | O(1) | no |
//! | Insertion | [`insertion_sort`] | O(n²), O(n) sorted | O(1) | yes |
//! | Bubble | [`bubble_sort`] | O(n²), O(n) sorted | O(1) | yes |
//! | Quick | [`quick_sort`] | O(n log n) avg, O(n²) worst | O(n) stack worst | no |
//! | Merge | [`merge_sort`] | O(n log n) | O(n) | yes |
//! | Heap | [`heap_sort`] | O(n log n) | O(1) | no |
//!
//! The building blocks are public too: [`swap`], [`partition`], [`merge`]
//! and [`heapify`].
//!
//! # Example
//!
//! ```
//! use intsort::{SortAlgorithm, heap_sort, merge_sort};
//!
//! let mut buf = [5, 3, 8, 1, 9, 2];
//! heap_sort(&mut buf);
//! assert_eq!(buf, [1, 2, 3, 5, 8, 9]);
//!
//! // Merge sort allocates, so it reports allocation failure
//! let mut buf = vec![2, 2, 1, 1];
//! merge_sort(&mut buf).unwrap();
//! assert_eq!(buf, [1, 1, 2, 2]);
//!
//! // Or pick one at runtime
//! for algorithm in SortAlgorithm::ALL {
//!     let mut buf = [3, -1, 2];
//!     algorithm.sort(&mut buf).unwrap();
//!     assert_eq!(buf, [-1, 2, 3]);
//! }
//! ```

#![warn(missing_docs)]

mod algorithm;
mod bubble;
mod error;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use algorithm::SortAlgorithm;
pub use bubble::bubble_sort;
pub use error::SortError;
pub use heap::{heap_sort, heapify};
pub use insertion::insertion_sort;
pub use merge::{merge, merge_sort};
pub use quick::{partition, quick_sort, quick_sort_range};
pub use selection::selection_sort;

/// Exchanges `buf[a]` and `buf[b]`.
///
/// # Panics
///
/// Panics if either index is out of bounds.
#[inline]
pub fn swap(buf: &mut [i32], a: usize, b: usize) {
    buf.swap(a, b);
}
