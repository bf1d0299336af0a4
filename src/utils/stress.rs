//! Stress testing: random inputs, every variant against the naive reference.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::VariantInfo;
use crate::error::{Error, Result};

/// Name every exercise gives its reference variant.
pub const REFERENCE_VARIANT: &str = "naive";

/// Configuration for a stress run
#[derive(Clone, Debug)]
pub struct StressConfig {
    /// Random cases per exercise (default: 500)
    pub rounds: usize,
    /// Seed for the case generator; `None` derives one from the clock
    pub seed: Option<u64>,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            rounds: 500,
            seed: None,
        }
    }
}

impl StressConfig {
    /// Config with a fixed seed, for reproducible runs.
    pub fn seeded(rounds: usize, seed: u64) -> Self {
        Self {
            rounds,
            seed: Some(seed),
        }
    }

    /// The seed this run uses.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Compare every variant against the `naive` one on random inputs.
///
/// `generate` draws one input, `call` runs a variant on it and `agree`
/// decides whether a variant's output matches the reference output.
/// The first disagreement is returned as [`Error::VariantMismatch`].
pub fn stress_variants<F, I, O>(
    exercise: &'static str,
    variants: &[VariantInfo<F>],
    config: &StressConfig,
    mut generate: impl FnMut(&mut StdRng) -> I,
    mut call: impl FnMut(&F, &I) -> O,
    agree: impl Fn(&O, &O) -> bool,
) -> Result<()>
where
    I: Debug,
    O: Debug,
{
    let reference = variants
        .iter()
        .find(|v| v.name == REFERENCE_VARIANT)
        .ok_or(Error::MissingReference { exercise })?;

    let seed = config.resolve_seed();
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(exercise, seed, rounds = config.rounds, "stress run started");

    for round in 0..config.rounds {
        let input = generate(&mut rng);
        let expected = call(&reference.function, &input);
        trace!(exercise, round, ?input, ?expected, "stress case");

        for variant in variants.iter().filter(|v| v.name != REFERENCE_VARIANT) {
            let actual = call(&variant.function, &input);
            if !agree(&expected, &actual) {
                return Err(Error::VariantMismatch {
                    exercise,
                    variant: variant.name,
                    round,
                    seed,
                    input: format!("{:?}", input),
                    expected: format!("{:?}", expected),
                    actual: format!("{:?}", actual),
                });
            }
        }
    }

    info!(exercise, seed, rounds = config.rounds, variants = variants.len(), "stress run passed");
    Ok(())
}
