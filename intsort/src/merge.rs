//! Top-down merge sort over temporary half-buffers.
//!
//! This is the only sort here that allocates. Each level copies its two
//! halves into fresh buffers, sorts them, and merges them back. The
//! temporaries are dropped before the level returns. Recursion depth is
//! O(log n).

use tracing::warn;

use crate::SortError;

/// Sorts `buf` ascending. Stable.
///
/// # Errors
///
/// [`SortError::Alloc`] if a temporary half-buffer cannot be allocated. The
/// buffer is then left holding a permutation of its input, not necessarily
/// sorted.
pub fn merge_sort(buf: &mut [i32]) -> Result<(), SortError> {
    if buf.len() <= 1 {
        return Ok(());
    }
    let mid = buf.len() / 2;

    let mut left = scratch_copy(&buf[..mid])?;
    merge_sort(&mut left)?;

    let mut right = scratch_copy(&buf[mid..])?;
    merge_sort(&mut right)?;

    merge(&left, &right, buf);
    Ok(())
}

/// Merges two ascending runs into `out`.
///
/// Repeatedly takes the smaller front element; on ties the element from
/// `left` goes first, which keeps the merge stable. Whatever remains of the
/// run that did not run out is copied after.
///
/// # Panics
///
/// Panics if `out.len() != left.len() + right.len()`.
pub fn merge(left: &[i32], right: &[i32], out: &mut [i32]) {
    assert_eq!(
        out.len(),
        left.len() + right.len(),
        "merge output length mismatch"
    );

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    // At most one of these is non-empty
    out[k..k + left.len() - i].copy_from_slice(&left[i..]);
    k += left.len() - i;
    out[k..].copy_from_slice(&right[j..]);
}

fn scratch_copy(src: &[i32]) -> Result<Vec<i32>, SortError> {
    let mut scratch = Vec::new();
    scratch.try_reserve_exact(src.len()).map_err(|source| {
        warn!(len = src.len(), %source, "merge buffer allocation failed");
        SortError::Alloc {
            len: src.len(),
            source,
        }
    })?;
    scratch.extend_from_slice(src);
    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_interleaved() {
        let mut out = [0; 6];
        merge(&[1, 4, 6], &[2, 3, 5], &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merge_one_side_exhausted_first() {
        let mut out = [0; 5];
        merge(&[1, 2], &[3, 4, 5], &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5]);

        merge(&[3, 4, 5], &[1, 2], &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn merge_empty_runs() {
        let mut out = [0; 3];
        merge(&[], &[7, 8, 9], &mut out);
        assert_eq!(out, [7, 8, 9]);

        merge(&[7, 8, 9], &[], &mut out);
        assert_eq!(out, [7, 8, 9]);

        let mut none: [i32; 0] = [];
        merge(&[], &[], &mut none);
    }

    #[test]
    #[should_panic(expected = "merge output length mismatch")]
    fn merge_length_mismatch_panics() {
        let mut out = [0; 2];
        merge(&[1], &[2, 3], &mut out);
    }

    #[test]
    fn odd_and_even_lengths() {
        let mut buf = [3, 1, 2];
        merge_sort(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);

        let mut buf = [4, 3, 1, 2];
        merge_sort(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn scratch_copy_matches_source() {
        let copy = scratch_copy(&[5, -1, 3]).unwrap();
        assert_eq!(copy, [5, -1, 3]);
        assert!(copy.capacity() >= 3);
    }
}
