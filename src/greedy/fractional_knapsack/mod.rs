//! # Fractional Knapsack
//!
//! Maximum value of (fractions of) items that fit in a knapsack of
//! capacity `W`. Answers are printed with four decimals; variants are
//! compared with a tolerance since their summation orders can differ.

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

pub const MAX_ITEMS: u64 = 1_000;
pub const MAX_CAPACITY: u64 = 2_000_000;
pub const MAX_VALUE: u64 = 2_000_000;
pub const MAX_WEIGHT: u64 = 2_000_000;

/// Absolute difference under which two answers agree.
pub const TOLERANCE: f64 = 1e-3;

/// Render an answer the way the course checker expects.
pub fn format_value(value: f64) -> String {
    format!("{value:.4}")
}

pub struct FractionalKnapsackExercise;

impl Exercise for FractionalKnapsackExercise {
    fn name(&self) -> &'static str {
        "fractional_knapsack"
    }

    fn description(&self) -> &'static str {
        "Most value from item fractions under a weight limit"
    }

    fn category(&self) -> &'static str {
        "greedy"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        variant_names(&code::available_variants())
    }

    fn solve(&self, input: &mut Tokens, _options: &SolveOptions) -> Result<String> {
        let n = input.next_count("n", 1, MAX_ITEMS)?;
        let capacity: u64 = input.next_bounded("W", 0, MAX_CAPACITY)?;
        let items = (0..n)
            .map(|_| {
                let value = input.next_bounded("value", 0, MAX_VALUE)?;
                let weight = input.next_bounded("weight", 1, MAX_WEIGHT)?;
                Ok(Item::new(value, weight))
            })
            .collect::<Result<Vec<Item>>>()?;
        input.finish()?;

        Ok(format_value(knapsack_fast(capacity, &items)))
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| {
                let len: usize = rng.random_range(1..=8);
                let capacity: u64 = rng.random_range(0..=50);
                let items: Vec<Item> = (0..len)
                    .map(|_| Item::new(rng.random_range(0..=50), rng.random_range(1..=20)))
                    .collect();
                (capacity, items)
            },
            |knapsack, (capacity, items)| knapsack(*capacity, items.as_slice()),
            |expected: &f64, actual: &f64| (expected - actual).abs() < TOLERANCE,
        )
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let items: Vec<Item> = (0..size.max(1))
            .map(|_| Item::new(rng.random_range(0..=1_000), rng.random_range(1..=1_000)))
            .collect();
        // Half the total weight, so roughly half the items get taken
        let capacity = items.iter().map(|i| i.weight).sum::<u64>() / 2;
        let items = Arc::new(items);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let items = Arc::clone(&items);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, value) = crate::measure!(func(capacity, &items));
                        (elapsed, Some(value))
                    }),
                }
            })
            .collect()
    }
}
