//! Fast gcd variants.

/// Euclid's algorithm: `gcd(a, b) = gcd(b, a mod b)`.
///
/// # Example
/// ```
/// use algo_toolbox::warmup::gcd::gcd_euclid;
///
/// assert_eq!(gcd_euclid(28_851_538, 1_183_019), 17_657);
/// ```
pub fn gcd_euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Stein's algorithm: strips common factors of two, then subtracts.
pub fn gcd_binary(mut a: u64, mut b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a | b;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();
    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }
    a << shift
}
