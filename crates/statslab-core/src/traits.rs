//! Core traits for statistical estimation
//!
//! Algorithm-specific traits (like `SpreadEstimator`) are defined in their
//! respective crates.

use crate::{utils, Result};

/// Base trait for all central tendency estimators
///
/// Estimators measure the "center" or "typical value" of a sample.
/// Implementations include the arithmetic, geometric and harmonic means and
/// the median family.
///
/// # API Convention
///
/// - [`estimate`](Self::estimate) accepts data in any order and never
///   reorders the caller's slice
/// - [`estimate_sorted`](Self::estimate_sorted) requires pre-sorted data
///
/// # Example
///
/// ```rust
/// use statslab_core::{CentralTendencyEstimator, Error, Result};
///
/// #[derive(Clone)]
/// struct Midrange;
///
/// impl CentralTendencyEstimator for Midrange {
///     fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
///         match (sorted_data.first(), sorted_data.last()) {
///             (Some(lo), Some(hi)) => Ok((lo + hi) / 2.0),
///             _ => Err(Error::empty("midrange")),
///         }
///     }
///
///     fn name(&self) -> &str { "Midrange" }
///     fn is_robust(&self) -> bool { false }
///     fn breakdown_point(&self) -> f64 { 0.0 }
/// }
///
/// assert_eq!(Midrange.estimate(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// ```
pub trait CentralTendencyEstimator: Send + Sync {
    /// Estimate the central tendency from a sample in arbitrary order
    ///
    /// The default sorts a copy and delegates to `estimate_sorted`.
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        self.estimate_sorted(&utils::sorted(data))
    }

    /// Estimate the central tendency from pre-sorted data
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}
