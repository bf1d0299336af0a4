/// `F(n)` straight from the recurrence. Exponential; keep `n` small.
pub fn fibonacci_naive(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        n => fibonacci_naive(n - 1) + fibonacci_naive(n - 2),
    }
}
