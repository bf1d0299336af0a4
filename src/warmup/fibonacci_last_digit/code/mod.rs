//! Last digit of a Fibonacci number.

mod fast;
mod naive;

pub use fast::{fibonacci_last_digit_fast, fibonacci_last_digit_pisano, PISANO_PERIOD};
pub use naive::{fibonacci_last_digit_naive, NAIVE_MAX_N};

use crate::utils::VariantInfo;

/// Type alias for last-digit function signature
pub type LastDigitFn = fn(u64) -> u8;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<LastDigitFn>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Exact F(n) in u128, then mod 10",
            function: fibonacci_last_digit_naive,
        },
        VariantInfo {
            name: "fast",
            description: "Iterate keeping only the last digit",
            function: fibonacci_last_digit_fast,
        },
        VariantInfo {
            name: "pisano",
            description: "Reduce n modulo the Pisano period 60 first",
            function: fibonacci_last_digit_pisano,
        },
    ]
}
