//! Heapsort over an implicit max-heap.
//!
//! The heap lives in the buffer itself: the children of index `i` are
//! `2i + 1` and `2i + 2`, and only the first `heap_len` elements belong to
//! the heap. Sorted elements accumulate after the heap boundary.

use crate::swap;

/// Sorts `buf` ascending in place. O(n log n), no allocation.
pub fn heap_sort(buf: &mut [i32]) {
    let len = buf.len();

    // Build: sift every internal node, last to first
    for root in (0..len / 2).rev() {
        heapify(buf, len, root);
    }

    // Extract: move the max behind the shrinking boundary
    for end in (1..len).rev() {
        swap(buf, 0, end);
        heapify(buf, end, 0);
    }
}

/// Sifts `buf[root]` down within the heap `buf[..heap_len]`.
///
/// While a child is larger than the node, the larger child is promoted and
/// the sift continues at the position the node moved into. Assumes both
/// subtrees of `root` are already max-heaps.
///
/// # Panics
///
/// Panics if `heap_len > buf.len()` and a child index falls outside `buf`.
pub fn heapify(buf: &mut [i32], heap_len: usize, root: usize) {
    let mut largest = root;

    let left = 2 * root + 1;
    if left < heap_len && buf[largest] < buf[left] {
        largest = left;
    }

    let right = left + 1;
    if right < heap_len && buf[largest] < buf[right] {
        largest = right;
    }

    if largest != root {
        swap(buf, largest, root);
        heapify(buf, heap_len, largest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_max_heap(buf: &[i32]) -> bool {
        (1..buf.len()).all(|i| buf[(i - 1) / 2] >= buf[i])
    }

    #[test]
    fn heapify_promotes_larger_child() {
        let mut buf = [1, 5, 9];
        heapify(&mut buf, 3, 0);
        assert_eq!(buf, [9, 5, 1]);
    }

    #[test]
    fn heapify_sifts_to_leaf() {
        // Both subtrees of the root are heaps; root must travel two levels
        let mut buf = [0, 8, 7, 6, 5, 4, 3];
        heapify(&mut buf, 7, 0);
        assert!(is_max_heap(&buf));
        assert_eq!(buf[0], 8);
    }

    #[test]
    fn heapify_respects_boundary() {
        let mut buf = [1, 2, 100];
        heapify(&mut buf, 2, 0);
        assert_eq!(buf, [2, 1, 100]);
    }

    #[test]
    fn heapify_leaf_is_noop() {
        let mut buf = [3, 2, 1];
        heapify(&mut buf, 3, 2);
        assert_eq!(buf, [3, 2, 1]);
    }

    #[test]
    fn sorts_mixed() {
        let mut buf = [5, 3, 8, 1, 9, 2];
        heap_sort(&mut buf);
        assert_eq!(buf, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn stress_scrambled() {
        let mut buf: Vec<i32> = (0..1000).map(|i| (i * 7 + 13) % 1000).collect();
        heap_sort(&mut buf);
        assert_eq!(buf, (0..1000).collect::<Vec<_>>());
    }
}
