//! Car fueling implementations.
//!
//! Both variants expect `stops` strictly increasing and strictly between
//! the start and the destination.

mod fast;
mod naive;

pub use fast::refills_fast;
pub use naive::refills_naive;

use crate::utils::VariantInfo;

/// Type alias for refill function signature: distance, tank range, stops.
pub type RefillFn = fn(u64, u64, &[u64]) -> Option<u32>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<RefillFn>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Fewest refills to reach every stop, O(n^2)",
            function: refills_naive,
        },
        VariantInfo {
            name: "fast",
            description: "Greedy, drive to the farthest reachable stop",
            function: refills_fast,
        },
    ]
}
