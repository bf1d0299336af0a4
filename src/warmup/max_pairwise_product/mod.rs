//! # Maximum Pairwise Product
//!
//! The largest product of two numbers taken from different positions of a
//! sequence of non-negative integers.

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

/// Largest accepted input value; keeps every product within u64.
pub const MAX_VALUE: u64 = 1_000_000_000;

/// Largest accepted sequence length.
pub const MAX_LEN: u64 = 200_000;

pub struct MaxPairwiseProductExercise;

impl Exercise for MaxPairwiseProductExercise {
    fn name(&self) -> &'static str {
        "max_pairwise_product"
    }

    fn description(&self) -> &'static str {
        "Largest product of two elements at distinct positions"
    }

    fn category(&self) -> &'static str {
        "warmup"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        variant_names(&code::available_variants())
    }

    fn solve(&self, input: &mut Tokens, _options: &SolveOptions) -> Result<String> {
        let n = input.next_count("n", 2, MAX_LEN)?;
        let numbers = (0..n)
            .map(|_| input.next_bounded("numbers", 0, MAX_VALUE))
            .collect::<Result<Vec<u64>>>()?;
        input.finish()?;

        Ok(max_pairwise_product_fast(&numbers).to_string())
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| {
                // Tiny values make repeated maxima likely
                let max = if rng.random_bool(0.5) { 10 } else { 100_000 };
                let len = rng.random_range(2..=12);
                (0..len)
                    .map(|_| rng.random_range(0..=max))
                    .collect::<Vec<u64>>()
            },
            |product, numbers| product(numbers),
            |expected, actual| expected == actual,
        )
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let numbers: Arc<Vec<u64>> = Arc::new(
            (0..size.max(2))
                .map(|_| rng.random_range(0..100_000))
                .collect(),
        );

        code::available_variants()
            .into_iter()
            .map(|v| {
                let numbers = Arc::clone(&numbers);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, product) = crate::measure!(func(&numbers));
                        (elapsed, Some(product as f64))
                    }),
                }
            })
            .collect()
    }
}
