//! Exercise registry for dynamic exercise discovery and execution.
//!
//! Every exercise is reachable through one object-safe trait so that the
//! binaries can list, solve, stress and benchmark them by name.

use crate::error::{Error, Result};
use crate::input::Tokens;
use crate::utils::stress::StressConfig;
use crate::utils::timer::Variant;

/// Options that change how a solver validates its input
#[derive(Clone, Debug, Default)]
pub struct SolveOptions {
    /// Accept non-decreasing sequences where strictly increasing ones are
    /// expected (first-occurrence search over duplicates)
    pub allow_duplicates: bool,
}

/// Trait that all exercises must implement
pub trait Exercise: Send + Sync {
    /// Name of the exercise (e.g., "binary_search")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "warmup", "greedy")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Read one problem instance in the course format and return the
    /// answer line.
    fn solve(&self, input: &mut Tokens, options: &SolveOptions) -> Result<String>;

    /// Stress every variant against the naive reference
    fn verify(&self, config: &StressConfig) -> Result<()>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure does ONE execution on an input of the given size.
    fn variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>>;
}

/// Registry of all exercises
pub struct ExerciseRegistry {
    exercises: Vec<Box<dyn Exercise>>,
}

impl ExerciseRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            exercises: Vec::new(),
        }
    }

    /// Register an exercise
    pub fn register<E: Exercise + 'static>(&mut self, exercise: E) {
        self.exercises.push(Box::new(exercise));
    }

    /// Get all registered exercises
    pub fn all(&self) -> &[Box<dyn Exercise>] {
        &self.exercises
    }

    /// Find exercise by name
    pub fn find(&self, name: &str) -> Option<&dyn Exercise> {
        self.exercises
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }

    /// Find exercise by name, or fail with [`Error::UnknownExercise`]
    pub fn get(&self, name: &str) -> Result<&dyn Exercise> {
        self.find(name)
            .ok_or_else(|| Error::UnknownExercise(name.to_string()))
    }

    /// List exercise names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.exercises.iter().map(|e| e.name()).collect()
    }

    /// List exercises by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.category() == category)
            .map(|e| e.as_ref())
            .collect()
    }
}

impl Default for ExerciseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all exercises
pub fn build_registry() -> ExerciseRegistry {
    let mut registry = ExerciseRegistry::new();

    registry.register(crate::warmup::max_pairwise_product::MaxPairwiseProductExercise);
    registry.register(crate::warmup::fibonacci::FibonacciExercise);
    registry.register(crate::warmup::fibonacci_last_digit::FibonacciLastDigitExercise);
    registry.register(crate::warmup::gcd::GcdExercise);
    registry.register(crate::warmup::lcm::LcmExercise);
    registry.register(crate::greedy::money_change::MoneyChangeExercise);
    registry.register(crate::greedy::fractional_knapsack::FractionalKnapsackExercise);
    registry.register(crate::greedy::car_fueling::CarFuelingExercise);
    registry.register(crate::divide_and_conquer::binary_search::BinarySearchExercise);

    registry
}
