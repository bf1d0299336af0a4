//! Lower-bound bisection.
//!
//! Converges on the first key not less than the query, so a long run of
//! duplicates costs nothing extra.

/// Find the first index of `query` in O(log n) regardless of duplicates.
pub fn binary_search_lower_bound(keys: &[i64], query: i64) -> Option<usize> {
    let index = keys.partition_point(|&key| key < query);
    (keys.get(index) == Some(&query)).then_some(index)
}
