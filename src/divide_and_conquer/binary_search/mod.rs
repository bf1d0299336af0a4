//! # First-Occurrence Binary Search
//!
//! Given a sorted sequence of keys and a batch of queries, report for each
//! query the index of its first occurrence, or `-1` when it is absent:
//!
//! `search([2, 4, 6, 8, 10], 6) = 2`, `search([2, 4, 6, 8, 10], 7) = -1`
//!
//! ## Contract
//!
//! - Keys are strictly increasing by default. [`SortedKeys::with_duplicates`]
//!   relaxes this to non-decreasing, in which case the smallest matching
//!   index is returned.
//! - Absence is a normal outcome (`None`, rendered as [`NOT_FOUND`]), never
//!   an error.
//! - Searching never mutates the keys; repeated queries give the same answer.
//!
//! ## Variants
//!
//! - **naive**: linear scan, the stress-test reference
//! - **iterative** / **recursive**: inclusive-bounds bisection followed by a
//!   backward scan over the matched run, guarded at index 0
//! - **lower_bound**: half-open bisection, O(log n) even over long runs
//! - **c-iterative**: C port of the iterative variant

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::input::{ensure_non_decreasing, ensure_strictly_increasing, Tokens};
use crate::registry::{Exercise, SolveOptions};
use crate::report::format_line;
use crate::utils::stress::{stress_variants, StressConfig};
use crate::utils::timer::Variant;
use crate::utils::variant_names;

/// Sentinel printed for a query that is not present.
pub const NOT_FOUND: i64 = -1;

/// Largest key or query count accepted by the solver.
pub const MAX_LEN: u64 = 10_000_000;

/// Queries per benchmark run
const BENCH_QUERIES: usize = 1024;

/// Find the first index of `query` in `keys`.
///
/// This is the iterative bisection; see [`code`] for the other variants.
pub fn search(keys: &[i64], query: i64) -> Option<usize> {
    binary_search_iterative(keys, query)
}

/// Render a search result with the [`NOT_FOUND`] sentinel.
pub fn to_sentinel(result: Option<usize>) -> i64 {
    result.map_or(NOT_FOUND, |index| index as i64)
}

/// A validated, immutable sequence of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedKeys(Vec<i64>);

impl SortedKeys {
    /// Accept strictly increasing keys only.
    pub fn new(keys: Vec<i64>) -> Result<Self> {
        ensure_strictly_increasing("keys", &keys)?;
        Ok(Self(keys))
    }

    /// Accept non-decreasing keys, duplicates included.
    pub fn with_duplicates(keys: Vec<i64>) -> Result<Self> {
        ensure_non_decreasing("keys", &keys)?;
        Ok(Self(keys))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First index of `query`, if present.
    pub fn search(&self, query: i64) -> Option<usize> {
        search(&self.0, query)
    }

    /// Answer a batch of queries in order, absent ones as [`NOT_FOUND`].
    pub fn search_all(&self, queries: &[i64]) -> Vec<i64> {
        queries
            .iter()
            .map(|&query| to_sentinel(self.search(query)))
            .collect()
    }
}

impl AsRef<[i64]> for SortedKeys {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

/// Strictly increasing random keys with gaps of 1 to 4.
fn generate_keys(rng: &mut StdRng, len: usize) -> Vec<i64> {
    let mut next = 0i64;
    (0..len)
        .map(|_| {
            next += rng.random_range(1..=4);
            next
        })
        .collect()
}

pub struct BinarySearchExercise;

impl Exercise for BinarySearchExercise {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn description(&self) -> &'static str {
        "First occurrence of each query in a sorted sequence, or -1"
    }

    fn category(&self) -> &'static str {
        "divide_and_conquer"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        variant_names(&code::available_variants())
    }

    fn solve(&self, input: &mut Tokens, options: &SolveOptions) -> Result<String> {
        let n = input.next_count("n", 0, MAX_LEN)?;
        let keys: Vec<i64> = input.next_vec(n, "keys")?;
        let keys = if options.allow_duplicates {
            SortedKeys::with_duplicates(keys)?
        } else {
            SortedKeys::new(keys)?
        };

        let k = input.next_count("k", 0, MAX_LEN)?;
        let queries: Vec<i64> = input.next_vec(k, "queries")?;
        input.finish()?;

        debug!(keys = keys.len(), queries = queries.len(), "searching");
        Ok(format_line(&keys.search_all(&queries)))
    }

    fn verify(&self, config: &StressConfig) -> Result<()> {
        stress_variants(
            self.name(),
            &code::available_variants(),
            config,
            |rng| {
                // Small value range so duplicates and misses are both common
                let len: usize = rng.random_range(0..=20);
                let mut keys: Vec<i64> = (0..len).map(|_| rng.random_range(1..=20)).collect();
                keys.sort_unstable();
                let query: i64 = rng.random_range(0..=22);
                (keys, query)
            },
            |search, (keys, query)| search(keys.as_slice(), *query),
            |expected, actual| expected == actual,
        )
    }

    fn variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let keys: Arc<Vec<i64>> = Arc::new(generate_keys(&mut rng, size));
        let upper = keys.last().copied().unwrap_or(0) + 1;
        let queries: Arc<Vec<i64>> = Arc::new(
            (0..BENCH_QUERIES)
                .map(|_| rng.random_range(0..=upper))
                .collect(),
        );

        code::available_variants()
            .into_iter()
            .map(|v| {
                let keys = Arc::clone(&keys);
                let queries = Arc::clone(&queries);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, hits) = crate::measure!(queries
                            .iter()
                            .filter(|&&query| func(&keys, query).is_some())
                            .count());
                        (elapsed, Some(hits as f64))
                    }),
                }
            })
            .collect()
    }
}
