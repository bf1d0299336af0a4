//! Fractional knapsack implementations.

mod fast;
mod naive;

pub use fast::knapsack_fast;
pub use naive::knapsack_naive;

use std::cmp::Ordering;

use crate::utils::VariantInfo;

/// An item that may be taken whole or in part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub value: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(value: u64, weight: u64) -> Self {
        Self { value, weight }
    }

    /// Compare value per unit of weight without going through floats.
    pub fn cmp_density(&self, other: &Item) -> Ordering {
        let lhs = u128::from(self.value) * u128::from(other.weight);
        let rhs = u128::from(other.value) * u128::from(self.weight);
        lhs.cmp(&rhs)
    }

    /// Value of `amount` units of this item.
    pub(crate) fn value_of(&self, amount: u64) -> f64 {
        if amount == self.weight {
            self.value as f64
        } else {
            amount as f64 * self.value as f64 / self.weight as f64
        }
    }
}

/// Type alias for knapsack function signature
pub type KnapsackFn = fn(u64, &[Item]) -> f64;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<KnapsackFn>> {
    vec![
        VariantInfo {
            name: "naive",
            description: "Pick the densest remaining item each step, O(n^2)",
            function: knapsack_naive,
        },
        VariantInfo {
            name: "fast",
            description: "Sort once by value density, then fill, O(n log n)",
            function: knapsack_fast,
        },
    ]
}
