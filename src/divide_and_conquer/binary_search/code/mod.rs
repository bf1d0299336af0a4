//! First-occurrence search implementations.
//!
//! Every variant returns the smallest index holding the query, so they all
//! agree on sequences with duplicates too.

pub mod c_impl;
mod iterative;
mod lower_bound;
mod naive;
mod recursive;

pub use c_impl::{binary_search_c_iterative, C_IMPL_AVAILABLE};
pub use iterative::binary_search_iterative;
pub use lower_bound::binary_search_lower_bound;
pub use naive::linear_search;
pub use recursive::binary_search_recursive;

use crate::utils::VariantInfo;

/// Type alias for search function signature
pub type SearchFn = fn(&[i64], i64) -> Option<usize>;

/// Walk back from a matching index to the first index of its run.
///
/// Never reads before index 0.
pub(crate) fn first_of_run(keys: &[i64], mut index: usize) -> usize {
    while index > 0 && keys[index - 1] == keys[index] {
        index -= 1;
    }
    index
}

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<SearchFn>> {
    let mut variants: Vec<VariantInfo<SearchFn>> = vec![
        VariantInfo {
            name: "naive",
            description: "Linear scan, first matching index",
            function: linear_search,
        },
        VariantInfo {
            name: "iterative",
            description: "Inclusive-bounds bisection with guarded backward scan",
            function: binary_search_iterative,
        },
        VariantInfo {
            name: "recursive",
            description: "Recursive bisection over (low, high)",
            function: binary_search_recursive,
        },
        VariantInfo {
            name: "lower_bound",
            description: "Half-open bisection to the first key >= query",
            function: binary_search_lower_bound,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-iterative",
            description: "C port of the iterative bisection",
            function: binary_search_c_iterative,
        });
    }

    variants
}
