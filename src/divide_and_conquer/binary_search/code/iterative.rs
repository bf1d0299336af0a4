//! Iterative bisection with inclusive bounds.

use std::cmp::Ordering;

use super::first_of_run;

/// Find the first index of `query` in a sorted slice.
///
/// Bounds are inclusive and signed: an empty slice starts with
/// `high = -1 < low = 0` and never enters the loop. The midpoint is
/// `low + (high - low) / 2` so it cannot overflow.
///
/// # Example
/// ```
/// use algo_toolbox::divide_and_conquer::binary_search::binary_search_iterative;
///
/// let keys = [2, 4, 6, 8, 10];
/// assert_eq!(binary_search_iterative(&keys, 6), Some(2));
/// assert_eq!(binary_search_iterative(&keys, 11), None);
/// ```
pub fn binary_search_iterative(keys: &[i64], query: i64) -> Option<usize> {
    // Slice lengths never exceed isize::MAX
    let mut low: isize = 0;
    let mut high: isize = keys.len() as isize - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        match keys[mid as usize].cmp(&query) {
            Ordering::Equal => return Some(first_of_run(keys, mid as usize)),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }

    None
}
