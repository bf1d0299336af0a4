//! Recursive bisection.

use std::cmp::Ordering;

use super::first_of_run;

/// Find the first index of `query`, recursing on `[low, high]`.
///
/// Recursion depth is bounded by `log2(len) + 1`.
pub fn binary_search_recursive(keys: &[i64], query: i64) -> Option<usize> {
    search_range(keys, query, 0, keys.len() as isize - 1)
}

fn search_range(keys: &[i64], query: i64, low: isize, high: isize) -> Option<usize> {
    if high < low {
        return None;
    }

    let mid = low + (high - low) / 2;
    match keys[mid as usize].cmp(&query) {
        Ordering::Equal => Some(first_of_run(keys, mid as usize)),
        Ordering::Less => search_range(keys, query, mid + 1, high),
        Ordering::Greater => search_range(keys, query, low, mid - 1),
    }
}
