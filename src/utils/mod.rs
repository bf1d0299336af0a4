//! Utility modules for stress testing and benchmarking.

pub mod stress;
pub mod timer;

// Re-export commonly used items
pub use stress::{stress_variants, time_seed, StressConfig, REFERENCE_VARIANT};
pub use timer::{calculate_median, measure_variants, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an exercise implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "naive", "c-euclid")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

impl<F: Copy> Clone for VariantInfo<F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            description: self.description,
            function: self.function,
        }
    }
}

/// Names of a list of variants, in registration order.
pub fn variant_names<F>(variants: &[VariantInfo<F>]) -> Vec<&'static str> {
    variants.iter().map(|v| v.name).collect()
}
