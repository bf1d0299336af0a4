//! Timing harness for comparing exercise variants.
//!
//! - Warms every variant up before measuring
//! - Randomizes the (variant, sample) schedule to avoid ordering bias
//! - Keeps every raw sample so statistics are computed once at the end

use std::hint::black_box;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Time an expression, returning `(elapsed, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = ::std::time::Instant::now();
        let value = ::std::hint::black_box($e);
        (start.elapsed(), value)
    }};
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup runs before measurement (default: 10)
    pub warmup_iterations: usize,
    /// Seed for the schedule shuffle
    pub seed: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            seed: 0x5EED,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs the variant once. Returns the elapsed time and the result as f64
    /// when the result is meaningful to compare across variants.
    pub run: Box<dyn FnMut() -> (Duration, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of measured samples
    pub runs: usize,
    /// Result of the last run, for a quick cross-variant sanity check
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    tasks.shuffle(&mut StdRng::seed_from_u64(config.seed));

    let mut measurements: Vec<Vec<Duration>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    for variant_idx in tasks {
        let (elapsed, result) = (variants[variant_idx].run)();
        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            let result = compute_variant_result(variant.name, variant.description, &times, result_sample);
            debug!(variant = variant.name, avg = ?result.avg_time, "measured");
            result
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: &[Duration],
    result_sample: Option<f64>,
) -> VariantResult {
    let mut sorted = times.to_vec();
    sorted.sort();

    let (min_time, max_time) = match (sorted.first(), sorted.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => (Duration::ZERO, Duration::ZERO),
    };

    let nanos: Vec<f64> = times.iter().map(|t| t.as_nanos() as f64).collect();
    let avg_nanos = if nanos.is_empty() {
        0.0
    } else {
        nanos.iter().sum::<f64>() / nanos.len() as f64
    };
    let variance = nanos
        .iter()
        .map(|&n| (n - avg_nanos) * (n - avg_nanos))
        .sum::<f64>()
        / (nanos.len().saturating_sub(1)).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos as u64),
        median_time: calculate_median(times),
        min_time,
        max_time,
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        runs: times.len(),
        result_sample,
    }
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}
