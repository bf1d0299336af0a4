//! Digit-only iteration.
//!
//! Last digits of Fibonacci numbers repeat every 60 terms (the Pisano
//! period for 10), which turns the linear loop into a constant-time one.

/// Period of `F(n) mod 10`.
pub const PISANO_PERIOD: u64 = 60;

/// `F(n) mod 10`, carrying only last digits.
pub fn fibonacci_last_digit_fast(n: u64) -> u8 {
    let (mut previous, mut current) = (0u8, 1u8);
    for _ in 0..n {
        (previous, current) = (current, (previous + current) % 10);
    }
    previous
}

/// `F(n) mod 10` in at most 59 steps.
///
/// # Example
/// ```
/// use algo_toolbox::warmup::fibonacci_last_digit::fibonacci_last_digit_pisano;
///
/// assert_eq!(fibonacci_last_digit_pisano(331), 9);
/// assert_eq!(fibonacci_last_digit_pisano(327_305), 5);
/// ```
pub fn fibonacci_last_digit_pisano(n: u64) -> u8 {
    fibonacci_last_digit_fast(n % PISANO_PERIOD)
}
