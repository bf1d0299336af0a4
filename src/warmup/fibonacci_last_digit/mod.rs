//! # Last Digit of a Fibonacci Number
//!
//! `F(n) mod 10` for `n` far beyond where `F(n)` itself fits in any
//! machine integer.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use rand::Rng;

use crate::error::Result;
use crate::input::Tokens;
use crate::registry::{Exercise, SolveOptions};
use crate::utils::stress::{stress_variants, StressConfig};
use crate::utils::timer::Variant;
use crate::utils::variant_names;

/// Largest accepted `n`.
pub const MAX_N: u64 = 100_000_000_000_000;

pub struct FibonacciLastDigitExercise;

impl Exercise for FibonacciLastDigitExercise {
    fn name(&self) -> &'static str {
        "fibonacci_last_digit"
    }

    fn description(&self) -> &'static str {
        "Last digit of the n-th Fibonacci number"
    }

    fn category(&self) -> &'static str {
        "warmup"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        variant_names(&code::available_variants())
    }

    fn solve(&self, input: &mut Tokens, _options: &SolveOptions) -> Result<String> {
        let n = input.next_bounded("n", 0, MAX_N)?;
        input.finish()?;
        Ok(fibonacci_last_digit_pisano(n).to_string())
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| rng.random_range(0..=NAIVE_MAX_N),
            |last_digit, &n| last_digit(n),
            |expected, actual| expected == actual,
        )
    }

    fn variant_closures(&self, size: usize, _seed: u64) -> Vec<Variant<'_>> {
        let n = (size as u64).min(NAIVE_MAX_N);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, digit) = crate::measure!(func(n));
                        (elapsed, Some(digit as f64))
                    }),
                }
            })
            .collect()
    }
}
