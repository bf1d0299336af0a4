//! # Least Common Multiple
//!
//! Smallest positive integer divisible by both inputs. With operands up to
//! 2·10^9 the answer still fits in a u64.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::input::Tokens;
use crate::registry::{Exercise, SolveOptions};
use crate::utils::stress::{stress_variants, StressConfig};
use crate::utils::timer::Variant;
use crate::utils::variant_names;

/// Largest accepted operand.
pub const MAX_VALUE: u64 = 2_000_000_000;

const BENCH_PAIRS: usize = 64;

pub struct LcmExercise;

impl Exercise for LcmExercise {
    fn name(&self) -> &'static str {
        "lcm"
    }

    fn description(&self) -> &'static str {
        "Least common multiple of two positive integers"
    }

    fn category(&self) -> &'static str {
        "warmup"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        variant_names(&code::available_variants())
    }

    fn solve(&self, input: &mut Tokens, _options: &SolveOptions) -> Result<String> {
        let a: u64 = input.next_bounded("a", 1, MAX_VALUE)?;
        let b: u64 = input.next_bounded("b", 1, MAX_VALUE)?;
        input.finish()?;

        Ok(lcm_fast(a, b).to_string())
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| {
                let a: u64 = rng.random_range(1..=1000);
                let b: u64 = rng.random_range(1..=1000);
                (a, b)
            },
            |lcm, &(a, b)| lcm(a, b),
            |expected, actual| expected == actual,
        )
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let mut rng = StdRng::seed_from_u64(seed);
        // The naive walk is O(min(a, b)) steps, so size bounds the operands
        let max = (size.max(1) as u64).min(MAX_VALUE);
        let pairs: Arc<Vec<(u64, u64)>> = Arc::new(
            (0..BENCH_PAIRS)
                .map(|_| (rng.random_range(1..=max), rng.random_range(1..=max)))
                .collect(),
        );

        code::available_variants()
            .into_iter()
            .map(|v| {
                let pairs = Arc::clone(&pairs);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, total) = crate::measure!(pairs
                            .iter()
                            .map(|&(a, b)| func(a, b))
                            .fold(0u64, u64::wrapping_add));
                        (elapsed, Some(total as f64))
                    }),
                }
            })
            .collect()
    }
}
