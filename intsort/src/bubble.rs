//! Bubble sort with a shrinking frontier.

use crate::swap;

/// Sorts `buf` ascending by adjacent swaps.
///
/// Each pass compares the pairs `(i, i + 1)` below the current bound and
/// remembers where the last swap happened. Everything from that point on is
/// already in its final position, so the next pass stops there. A pass
/// without swaps leaves a bound of zero and ends the sort.
///
/// The bound starts at `len`, and the last compared pair of any pass is
/// `(bound - 2, bound - 1)`, so no comparison reads past the buffer.
pub fn bubble_sort(buf: &mut [i32]) {
    let mut bound = buf.len();
    while bound > 1 {
        let mut last_swap = 0;
        for i in 0..bound - 1 {
            if buf[i] > buf[i + 1] {
                swap(buf, i, i + 1);
                last_swap = i + 1;
            }
        }
        bound = last_swap;
    }
}
