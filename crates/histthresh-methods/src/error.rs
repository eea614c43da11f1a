//! Error types for histthresh-methods
//!
//! A degenerate histogram is not an error: every criterion answers with
//! the single occupied bin and flags it in the diagnostics.

use thiserror::Error;

/// Errors that can occur during threshold selection
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdError {
    /// Core library error (empty input, bad bin index, bad samples)
    #[error("core error: {0}")]
    Core(#[from] histthresh_core::Error),

    /// Intermodes smoothing hit its cap without reaching two modes
    #[error("histogram not bimodal after {iterations} smoothing passes")]
    NonConvergent {
        /// Smoothing passes performed
        iterations: usize,
    },

    /// No candidate bin satisfies the criterion's positivity constraints
    #[error("{method}: no bin gives a valid two-class split")]
    NoValidSplit {
        /// Name of the criterion
        method: &'static str,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
