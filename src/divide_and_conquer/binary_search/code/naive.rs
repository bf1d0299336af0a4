//! Reference implementation: linear scan.

/// Index of the first key equal to `query`.
///
/// # Example
/// ```
/// use algo_toolbox::divide_and_conquer::binary_search::linear_search;
///
/// assert_eq!(linear_search(&[1, 3, 3, 5], 3), Some(1));
/// assert_eq!(linear_search(&[1, 3, 3, 5], 4), None);
/// ```
pub fn linear_search(keys: &[i64], query: i64) -> Option<usize> {
    keys.iter().position(|&key| key == query)
}
