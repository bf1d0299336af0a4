//! Maximum pairwise product implementations.

mod fast;
mod naive;

pub use fast::{max_pairwise_product_fast, max_pairwise_product_single_pass};
pub use naive::max_pairwise_product_naive;

use crate::utils::VariantInfo;

/// Type alias for product function signature
pub type ProductFn = fn(&[u64]) -> u64;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<ProductFn>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Every pair, O(n^2)",
            function: max_pairwise_product_naive,
        },
        VariantInfo {
            name: "fast",
            description: "Two scans for the two largest positions, O(n)",
            function: max_pairwise_product_fast,
        },
        VariantInfo {
            name: "single_pass",
            description: "Track the top two values in one scan",
            function: max_pairwise_product_single_pass,
        },
    ]
}
