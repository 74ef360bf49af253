//! Error types for descriptive statistics
//!
//! Provides a unified error type for all statslab crates. Every operation
//! validates its inputs up front and reports failures through [`Error`]
//! instead of terminating the process.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation requiring at least one data point received none
    #[error("{operation} requires at least one data point")]
    EmptySample { operation: &'static str },

    /// Not enough data points for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A value or weight that must be non-negative was negative
    #[error("Negative value: {0}")]
    NegativeValue(String),

    /// A weight vector whose length differs from the sample's
    #[error("Length mismatch: expected {expected} weights, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A value outside the mathematical domain of the operation
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// A structural parameter out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A probability outside the open interval (0, 1)
    #[error("Domain error: {0}")]
    DomainError(String),

    /// An operation undefined for a point-mass distribution
    #[error("{0} is undefined when sigma is zero")]
    DegenerateDistribution(&'static str),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptySample { operation }
    }

    /// Create an error for a sample below the required size
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for an out-of-range probability
    pub fn invalid_probability(p: f64) -> Self {
        Self::DomainError(format!("probability {p} must be in the open interval (0, 1)"))
    }

    /// Fail with [`Error::EmptySample`] when `data` is empty
    pub fn check_non_empty(data: &[f64], operation: &'static str) -> Result<()> {
        if data.is_empty() {
            return Err(Self::empty(operation));
        }
        Ok(())
    }

    /// Fail when `data` holds fewer than `min_len` points.
    ///
    /// Empty input is always reported as [`Error::EmptySample`] so callers can
    /// tell "no data" apart from "not enough data".
    pub fn check_min_len(data: &[f64], min_len: usize, operation: &'static str) -> Result<()> {
        Self::check_non_empty(data, operation)?;
        if data.len() < min_len {
            return Err(Self::insufficient(min_len, data.len()));
        }
        Ok(())
    }

    /// Fail with [`Error::LengthMismatch`] unless `weights` is empty or matches `n`
    pub fn check_weights(weights: &[f64], n: usize) -> Result<()> {
        if !weights.is_empty() && weights.len() != n {
            return Err(Self::LengthMismatch {
                expected: n,
                actual: weights.len(),
            });
        }
        Ok(())
    }
}
