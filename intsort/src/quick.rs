//! Quicksort with a leftmost pivot and Hoare partitioning.
//!
//! The pivot is always the first element of the active range. On already
//! sorted or reverse-sorted input this degrades to O(n²) time and O(n)
//! recursion depth.

use crate::swap;

/// Sorts `buf` ascending in place.
pub fn quick_sort(buf: &mut [i32]) {
    if let Some(last) = buf.len().checked_sub(1) {
        quick_sort_range(buf, 0, last);
    }
}

/// Sorts the inclusive range `buf[l..=r]` in place.
///
/// Does nothing when `l >= r`.
///
/// # Panics
///
/// Panics if `r >= buf.len()` and `l < r`.
pub fn quick_sort_range(buf: &mut [i32], l: usize, r: usize) {
    if l >= r {
        return;
    }
    let pivot = buf[l];
    let split = partition(buf, l, r, pivot);

    // split > l: the pivot's own slot is always swapped and stepped over
    quick_sort_range(buf, l, split - 1);
    quick_sort_range(buf, split, r);
}

/// Partitions `buf[l..=r]` around `pivot` and returns the split index.
///
/// Left and right cursors move inwards, skipping elements already on the
/// correct side, and swap each pair found on the wrong side. On return every
/// element before the split is `<= pivot` and every element from the split
/// through `r` is `>= pivot`. The pivot value itself may end up on either
/// side.
///
/// `pivot` must be a value present in `buf[l..=r]`; it stops the cursors
/// from running off the range. Quicksort passes `buf[l]`, which also
/// guarantees `l < split <= r`.
pub fn partition(buf: &mut [i32], mut l: usize, mut r: usize, pivot: i32) -> usize {
    debug_assert!(
        buf[l..=r].contains(&pivot),
        "pivot {pivot} not in range {l}..={r}"
    );

    while l <= r {
        while buf[l] < pivot {
            l += 1;
        }
        while buf[r] > pivot {
            r -= 1;
        }
        if l <= r {
            swap(buf, l, r);
            l += 1;
            if r == 0 {
                break;
            }
            r -= 1;
        }
    }
    l
}
