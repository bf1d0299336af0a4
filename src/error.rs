//! Error types for the toolbox
//!
//! A value missing from a searched sequence is a normal outcome and never
//! shows up here. These are input-validation failures, I/O failures, and
//! stress-test disagreements between variants.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the toolbox
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Invalid integer '{token}' for {field}")]
    InvalidInteger { field: &'static str, token: String },

    #[error("{field} must be in {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i128,
        min: i128,
        max: i128,
    },

    #[error("{field} must be strictly increasing: index {index} holds {value} after {previous}")]
    NotIncreasing {
        field: &'static str,
        index: usize,
        previous: i128,
        value: i128,
    },

    #[error("{field} must be sorted: index {index} holds {value} after {previous}")]
    NotSorted {
        field: &'static str,
        index: usize,
        previous: i128,
        value: i128,
    },

    #[error("Unexpected trailing input '{token}'")]
    TrailingInput { token: String },

    // === Registry Errors ===
    #[error("Exercise '{0}' not found. Use 'toolbox list' to see available exercises")]
    UnknownExercise(String),

    #[error("Exercise '{exercise}' has no 'naive' reference variant")]
    MissingReference { exercise: &'static str },

    // === Stress Test Errors ===
    #[error(
        "Variant '{variant}' of '{exercise}' disagrees with 'naive' in round {round} (seed {seed}): \
         input {input}, expected {expected}, got {actual}"
    )]
    VariantMismatch {
        exercise: &'static str,
        variant: &'static str,
        round: usize,
        seed: u64,
        input: String,
        expected: String,
        actual: String,
    },
}
