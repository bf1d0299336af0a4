//! # Car Fueling
//!
//! Fewest refills for a trip of `d` miles with a tank good for `m` miles,
//! starting full. Unreachable destinations print `-1`.

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::input::{ensure_range, ensure_strictly_increasing, Tokens};
use crate::registry::{Exercise, SolveOptions};
use crate::utils::stress::{stress_variants, StressConfig};
use crate::utils::timer::Variant;
use crate::utils::variant_names;

pub const MAX_DISTANCE: u64 = 100_000;
pub const MAX_TANK: u64 = 400;
pub const MAX_STOPS: u64 = 300;

/// Render a refill count, `-1` when the trip is impossible.
pub fn format_refills(refills: Option<u32>) -> String {
    match refills {
        Some(count) => count.to_string(),
        None => "-1".to_string(),
    }
}

/// Sorted distinct stops drawn from `1..distance`.
fn random_stops(rng: &mut StdRng, distance: u64, count: usize) -> Vec<u64> {
    let candidates = distance.saturating_sub(1) as usize;
    let mut stops: Vec<u64> = sample(rng, candidates, count.min(candidates))
        .into_iter()
        .map(|i| i as u64 + 1)
        .collect();
    stops.sort_unstable();
    stops
}

pub struct CarFuelingExercise;

impl Exercise for CarFuelingExercise {
    fn name(&self) -> &'static str {
        "car_fueling"
    }

    fn description(&self) -> &'static str {
        "Fewest refills to reach a destination along fixed stops"
    }

    fn category(&self) -> &'static str {
        "greedy"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        variant_names(&code::available_variants())
    }

    fn solve(&self, input: &mut Tokens, _options: &SolveOptions) -> Result<String> {
        let distance: u64 = input.next_bounded("d", 1, MAX_DISTANCE)?;
        let tank: u64 = input.next_bounded("m", 1, MAX_TANK)?;
        let n = input.next_count("n", 0, MAX_STOPS)?;
        let stops: Vec<u64> = input.next_vec(n, "stops")?;
        input.finish()?;

        for &stop in &stops {
            ensure_range("stops", stop, 1, distance - 1)?;
        }
        ensure_strictly_increasing("stops", &stops)?;

        Ok(format_refills(refills_fast(distance, tank, &stops)))
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| {
                let distance: u64 = rng.random_range(1..=60);
                let tank: u64 = rng.random_range(1..=20);
                let count: usize = rng.random_range(0..=8);
                (distance, tank, random_stops(rng, distance, count))
            },
            |refills, (distance, tank, stops)| refills(*distance, *tank, stops.as_slice()),
            |expected, actual| expected == actual,
        )
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let mut rng = StdRng::seed_from_u64(seed);
        // One stop every ~10 miles, always reachable with a 25 mile tank
        let count = size.max(1);
        let distance = count as u64 * 10;
        let stops: Vec<u64> = (1..count as u64)
            .map(|i| i * 10 + rng.random_range(0..5))
            .collect();
        let stops = Arc::new(stops);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let stops = Arc::clone(&stops);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, refills) = crate::measure!(func(distance, 25, &stops));
                        (elapsed, refills.map(f64::from))
                    }),
                }
            })
            .collect()
    }
}
