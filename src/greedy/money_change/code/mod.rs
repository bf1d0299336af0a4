//! Money change implementations.

mod fast;
mod naive;

pub use fast::change_fast;
pub use naive::change_naive;

use crate::utils::VariantInfo;

/// Coin denominations, ascending.
pub const COINS: [u64; 3] = [1, 5, 10];

/// Type alias for change function signature
pub type ChangeFn = fn(u64) -> u64;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<ChangeFn>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Dynamic programming over every amount up to m",
            function: change_naive,
        },
        VariantInfo {
            name: "fast",
            description: "Greedy closed form, largest coin first",
            function: change_fast,
        },
    ]
}
