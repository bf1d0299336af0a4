/// Largest product over all pairs of distinct positions.
///
/// Returns 0 for fewer than two numbers.
///
/// # Example
/// ```
/// use algo_toolbox::warmup::max_pairwise_product::max_pairwise_product_naive;
///
/// assert_eq!(max_pairwise_product_naive(&[1, 2, 3]), 6);
/// ```
pub fn max_pairwise_product_naive(numbers: &[u64]) -> u64 {
    let mut best = 0;
    for (i, &first) in numbers.iter().enumerate() {
        for &second in &numbers[i + 1..] {
            best = best.max(first * second);
        }
    }
    best
}
