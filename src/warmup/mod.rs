//! Warm-up exercises: small arithmetic problems where the naive solution is
//! correct but far too slow.

pub mod fibonacci;
pub mod fibonacci_last_digit;
pub mod gcd;
pub mod lcm;
pub mod max_pairwise_product;
