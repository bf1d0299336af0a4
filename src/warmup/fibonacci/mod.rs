//! # Fibonacci Number
//!
//! `F(0) = 0`, `F(1) = 1`, `F(n) = F(n - 1) + F(n - 2)`.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::error::Result;
use crate::input::Tokens;
use crate::registry::{Exercise, SolveOptions};
use crate::utils::stress::{stress_variants, StressConfig};
use crate::utils::timer::Variant;
use crate::utils::variant_names;

/// Largest accepted `n`.
pub const MAX_N: u32 = 90;

/// Largest `n` handed to the naive recursion when benchmarking.
const BENCH_MAX_N: u32 = 24;

pub struct FibonacciExercise;

impl Exercise for FibonacciExercise {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn description(&self) -> &'static str {
        "The n-th Fibonacci number"
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
        Ok(fibonacci_fast(n).to_string())
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        use rand::Rng;

        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| rng.random_range(0..=20u32),
            |fibonacci, &n| fibonacci(n),
            |expected, actual| expected == actual,
        )
    }

    fn variant_closures(&self, size: usize, _seed: u64) -> Vec<Variant<'_>> {
        // Input size maps to n logarithmically; the recursion is exponential
        let n = (size.max(1).ilog2() * 2).min(BENCH_MAX_N);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let func = v.function;
                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, value) = crate::measure!(func(n));
                        (elapsed, Some(value as f64))
                    }),
                }
            })
            .collect()
    }
}
