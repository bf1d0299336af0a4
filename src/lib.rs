//! # Algo-Toolbox
//!
//! Algorithmic-toolbox exercises, each with a naive reference and one or
//! more faster variants (some in C) that are stress-tested against it and
//! benchmarked side by side.
//!
//! The centrepiece is [`divide_and_conquer::binary_search`]: the index of
//! the first occurrence of a value in a sorted sequence.

pub mod divide_and_conquer;
pub mod error;
pub mod greedy;
pub mod input;
pub mod logging;
pub mod registry;
pub mod report;
pub mod utils;
pub mod warmup;

pub use error::{Error, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::divide_and_conquer::binary_search::{search, SortedKeys, NOT_FOUND};
    pub use crate::error::{Error, Result};
    pub use crate::input::Tokens;
    pub use crate::registry::{build_registry, Exercise, ExerciseRegistry, SolveOptions};
    pub use crate::utils::StressConfig;
}
