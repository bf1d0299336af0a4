use crate::warmup::gcd::gcd_euclid;

/// `lcm(a, b) = a / gcd(a, b) * b`, dividing first so the intermediate
/// never exceeds the result.
///
/// # Example
/// ```
/// use algo_toolbox::warmup::lcm::lcm_fast;
///
/// assert_eq!(lcm_fast(761_457, 614_573), 467_970_912_861);
/// ```
pub fn lcm_fast(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd_euclid(a, b) * b
}
