//! Runtime selection of a sorting algorithm.

use core::fmt;
use core::str::FromStr;

use tracing::trace;

use crate::{
    SortError, bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};

/// One of the six sorting algorithms.
///
/// # Example
///
/// ```
/// use intsort::SortAlgorithm;
///
/// let algorithm: SortAlgorithm = "heap".parse().unwrap();
/// let mut buf = [3, 1, 2];
/// algorithm.sort(&mut buf).unwrap();
/// assert_eq!(buf, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// [`selection_sort`]
    Selection,
    /// [`insertion_sort`]
    Insertion,
    /// [`bubble_sort`]
    Bubble,
    /// [`quick_sort`]
    Quick,
    /// [`merge_sort`]
    Merge,
    /// [`heap_sort`]
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [SortAlgorithm; 6] = [
        Self::Selection,
        Self::Insertion,
        Self::Bubble,
        Self::Quick,
        Self::Merge,
        Self::Heap,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Heap => "heap",
        }
    }

    /// Returns `true` if equal elements keep their relative order.
    ///
    /// Only observable for elements with identity beyond their value; for
    /// plain integers all six produce the same output.
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Insertion | Self::Bubble | Self::Merge)
    }

    /// Returns `true` if sorting allocates temporary buffers.
    pub const fn allocates(self) -> bool {
        matches!(self, Self::Merge)
    }

    /// Sorts `buf` ascending in place with this algorithm.
    ///
    /// # Errors
    ///
    /// Only [`SortAlgorithm::Merge`] can fail, with [`SortError::Alloc`].
    pub fn sort(self, buf: &mut [i32]) -> Result<(), SortError> {
        trace!(algorithm = self.name(), len = buf.len(), "sorting");
        match self {
            Self::Selection => selection_sort(buf),
            Self::Insertion => insertion_sort(buf),
            Self::Bubble => bubble_sort(buf),
            Self::Quick => quick_sort(buf),
            Self::Merge => return merge_sort(buf),
            Self::Heap => heap_sort(buf),
        }
        Ok(())
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    /// Parses a name such as `"quick"`, `"Quick"`, `"quick_sort"` or
    /// `"quicksort"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower
            .strip_suffix("_sort")
            .or_else(|| lower.strip_suffix("sort"))
            .unwrap_or(&lower);

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<SortAlgorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
    }

    #[test]
    fn parse_accepts_suffixes_and_case() {
        assert_eq!("quick_sort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Quick));
        assert_eq!("Quicksort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Quick));
        assert_eq!(" HEAP ".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Heap));
        assert_eq!("merge_sort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Merge));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "bogo".parse::<SortAlgorithm>(),
            Err(SortError::UnknownAlgorithm("bogo".into()))
        );
        assert_eq!(
            "sort".parse::<SortAlgorithm>(),
            Err(SortError::UnknownAlgorithm("sort".into()))
        );
    }

    #[test]
    fn descriptors() {
        let allocating: Vec<_> = SortAlgorithm::ALL
            .into_iter()
            .filter(|a| a.allocates())
            .collect();
        assert_eq!(allocating, [SortAlgorithm::Merge]);
        assert!(SortAlgorithm::Merge.is_stable());
        assert!(!SortAlgorithm::Quick.is_stable());
        assert!(!SortAlgorithm::Heap.is_stable());
    }

    #[test]
    fn dispatch_sorts() {
        for algorithm in SortAlgorithm::ALL {
            let mut buf = [5, 3, 8, 1, 9, 2];
            algorithm.sort(&mut buf).unwrap();
            assert_eq!(buf, [1, 2, 3, 5, 8, 9], "{algorithm}");
        }
    }
}
