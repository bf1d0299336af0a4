//! Fibonacci number implementations.

mod fast;
mod naive;

pub use fast::fibonacci_fast;
pub use naive::fibonacci_naive;

use crate::utils::VariantInfo;

/// Type alias for Fibonacci function signature
pub type FibonacciFn = fn(u32) -> u64;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<FibonacciFn>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Plain recursion, exponential time",
            function: fibonacci_naive,
        },
        VariantInfo {
            name: "fast",
            description: "Iterative with two accumulators, linear time",
            function: fibonacci_fast,
        },
    ]
}
