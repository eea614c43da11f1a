//! Error types for histthresh-core
//!
//! Provides a unified error type for histogram construction and
//! bin/value mapping. Each variant captures enough context for
//! diagnostics without exposing internal implementation details.

use thiserror::Error;

/// histthresh-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No samples were available to build a histogram
    #[error("empty input: no samples to process")]
    EmptyInput,

    /// Bin index outside `[0, len)`
    #[error("bin index out of range: {index} >= {len}")]
    OutOfRange { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A sample that cannot be binned (NaN or infinite)
    #[error("non-finite sample at position {index}")]
    NonFiniteSample { index: usize },
}

/// Result type alias for histthresh-core operations
pub type Result<T> = std::result::Result<T, Error>;
