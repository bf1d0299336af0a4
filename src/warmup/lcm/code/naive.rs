/// First multiple of `max(a, b)` that the other operand divides.
///
/// Returns 0 when either operand is 0.
pub fn lcm_naive(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }

    let (small, large) = if a < b { (a, b) } else { (b, a) };
    let mut multiple = large;
    while multiple % small != 0 {
        multiple += large;
    }
    multiple
}
