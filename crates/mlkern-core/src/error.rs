//! Error types for kernel and metric evaluation
//!
//! Provides a unified error type for all mlkern crates.

use thiserror::Error;

/// Core error type for kernel and metric operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The two operands of a distance or kernel evaluation differ in length
    #[error("Dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Errors raised by externally implemented kernels
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for operands of different length
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an error for an L_p power outside the supported range
    pub fn invalid_power(power: u32) -> Self {
        Self::InvalidParameter(format!(
            "Metric power {power} must be in [1, {}]",
            i32::MAX
        ))
    }

    /// Create an error for a non-positive or non-finite hyper-parameter
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive and finite, got {value}"))
    }
}
