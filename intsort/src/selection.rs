//! Selection sort.

use crate::swap;

/// Sorts `buf` ascending by repeated minimum selection.
///
/// For each position, scans the unsorted remainder for its minimum and swaps
/// it into place. Swaps only when the minimum sits elsewhere, so at most
/// `len - 1` swaps happen. O(n²) comparisons.
pub fn selection_sort(buf: &mut [i32]) {
    let len = buf.len();
    for i in 0..len {
        let mut min = i;
        for j in i + 1..len {
            if buf[j] < buf[min] {
                min = j;
            }
        }
        if min != i {
            swap(buf, i, min);
        }
    }
}
