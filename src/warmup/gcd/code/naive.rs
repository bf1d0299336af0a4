/// Largest `d` dividing both `a` and `b`, found by trying every candidate.
///
/// `gcd(a, 0) = a`.
pub fn gcd_naive(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a.max(b);
    }

    (1..=a.min(b))
        .rev()
        .find(|d| a % d == 0 && b % d == 0)
        .unwrap_or(1)
}
