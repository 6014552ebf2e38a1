//! Insertion sort.

use crate::swap;

/// Sorts `buf` ascending by swapping each element left into place.
///
/// An element moves left while it is strictly less than its left neighbour,
/// so equal values never pass each other. O(n²) worst case, O(n) on sorted
/// input.
pub fn insertion_sort(buf: &mut [i32]) {
    for i in 1..buf.len() {
        let mut j = i;
        while j > 0 && buf[j] < buf[j - 1] {
            swap(buf, j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reversed() {
        let mut buf: Vec<i32> = (0..20).rev().collect();
        insertion_sort(&mut buf);
        assert_eq!(buf, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn smaller_element_reaches_front() {
        let mut buf = [2, 3, 4, 5, 1];
        insertion_sort(&mut buf);
        assert_eq!(buf, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn duplicates() {
        let mut buf = [2, 2, 1, 1];
        insertion_sort(&mut buf);
        assert_eq!(buf, [1, 1, 2, 2]);
    }
}
