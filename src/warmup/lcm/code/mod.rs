//! Least common multiple implementations.

mod fast;
mod naive;

pub use fast::lcm_fast;
pub use naive::lcm_naive;

use crate::utils::VariantInfo;

/// Type alias for lcm function signature
pub type LcmFn = fn(u64, u64) -> u64;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<LcmFn>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Step through multiples of the larger operand",
            function: lcm_naive,
        },
        VariantInfo {
            name: "fast",
            description: "a / gcd(a, b) * b",
            function: lcm_fast,
        },
    ]
}
