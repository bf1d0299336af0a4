/// `F(n)` in `n` additions.
///
/// # Panics
/// Overflows `u64` (and panics in debug builds) for `n > 92`.
///
/// # Example
/// ```
/// use algo_toolbox::warmup::fibonacci::fibonacci_fast;
///
/// assert_eq!(fibonacci_fast(10), 55);
/// ```
pub fn fibonacci_fast(n: u32) -> u64 {
    let (mut previous, mut current) = (0u64, 1u64);
    for _ in 0..n {
        (previous, current) = (current, previous + current);
    }
    previous
}
