//! Error types for Z-function evaluation and sign scanning.
//!
//! Precision loss at small `t` is not an error: the asymptotic series simply
//! becomes less accurate there. Everything that is reported lives here.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ZetaResult<T> = Result<T, ZetaError>;

/// Errors raised while configuring or running a scan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZetaError {
    /// A parameter failed validation before any numeric work started.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The lookup tables do not reach the main-sum length needed at some `t`.
    #[error("Lookup table too small: need {required} entries, built {available}")]
    TableTooSmall {
        /// Minimum table size required by the evaluation.
        required: usize,
        /// Size the tables were built with.
        available: usize,
    },

    /// The worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl ZetaError {
    /// Create an input validation error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
