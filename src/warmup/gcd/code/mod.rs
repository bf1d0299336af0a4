//! Greatest common divisor implementations.

pub mod c_impl;
mod euclid;
mod naive;

pub use c_impl::{gcd_c_euclid, C_IMPL_AVAILABLE};
pub use euclid::{gcd_binary, gcd_euclid};
pub use naive::gcd_naive;

use crate::utils::VariantInfo;

/// Type alias for gcd function signature
pub type GcdFn = fn(u64, u64) -> u64;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<GcdFn>> {
    let mut variants: Vec<VariantInfo<GcdFn>> = vec![
        VariantInfo {
            name: "naive",
            description: "Trial division from min(a, b) down",
            function: gcd_naive,
        },
        VariantInfo {
            name: "euclid",
            description: "Euclid's algorithm, repeated remainders",
            function: gcd_euclid,
        },
        VariantInfo {
            name: "binary",
            description: "Stein's binary gcd, shifts and subtractions",
            function: gcd_binary,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-euclid",
            description: "C port of Euclid's algorithm",
            function: gcd_c_euclid,
        });
    }

    variants
}
