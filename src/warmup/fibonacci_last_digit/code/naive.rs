/// Largest `n` the exact computation handles without overflowing `u128`.
pub const NAIVE_MAX_N: u64 = 185;

/// Compute `F(n)` exactly and keep its last digit.
///
/// # Panics
/// Panics if `n > NAIVE_MAX_N`.
pub fn fibonacci_last_digit_naive(n: u64) -> u8 {
    assert!(n <= NAIVE_MAX_N, "F({}) does not fit in u128", n);

    let (mut previous, mut current) = (0u128, 1u128);
    for _ in 0..n {
        (previous, current) = (current, previous + current);
    }
    (previous % 10) as u8
}
