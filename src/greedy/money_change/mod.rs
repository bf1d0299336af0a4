//! # Money Change
//!
//! Minimum number of coins with denominations 1, 5 and 10 that change `m`.

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

/// Largest accepted amount.
pub const MAX_MONEY: u64 = 1_000;

pub struct MoneyChangeExercise;

impl Exercise for MoneyChangeExercise {
    fn name(&self) -> &'static str {
        "money_change"
    }

    fn description(&self) -> &'static str {
        "Fewest coins of 1, 5 and 10 changing an amount"
    }

    fn category(&self) -> &'static str {
        "greedy"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        variant_names(&code::available_variants())
    }

    fn solve(&self, input: &mut Tokens, _options: &SolveOptions) -> Result<String> {
        let money: u64 = input.next_bounded("m", 1, MAX_MONEY)?;
        input.finish()?;

        Ok(change_fast(money).to_string())
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| rng.random_range(0..=MAX_MONEY),
            |change, &money| change(money),
            |expected, actual| expected == actual,
        )
    }

    fn variant_closures(&self, size: usize, _seed: u64) -> Vec<Variant<'_>> {
        let money = (size as u64).min(MAX_MONEY * 1_000);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, coins) = crate::measure!(func(money));
                        (elapsed, Some(coins as f64))
                    }),
                }
            })
            .collect()
    }
}
