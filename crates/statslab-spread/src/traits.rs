//! Core traits for spread estimation

use statslab_core::Result;

/// Trait for scale/spread estimators
///
/// Implementors measure the variability of a sample around its center.
pub trait SpreadEstimator: Send + Sync {
    /// Estimate spread from a sample in arbitrary order
    fn estimate(&self, data: &[f64]) -> Result<f64>;

    /// Get the name of this spread estimator
    fn name(&self) -> &str;

    /// Whether the estimator treats the data as the whole population
    /// (divides by `N`) rather than a sample of it (divides by `N - 1`)
    fn is_population(&self) -> bool;

    /// Standardize a value using this scale estimate
    fn standardize(&self, data: &[f64], value: f64) -> Result<f64> {
        let scale = self.estimate(data)?;
        if scale == 0.0 {
            return Err(statslab_core::Error::InvalidArgument(
                "Scale estimate is zero".to_string(),
            ));
        }
        Ok(value / scale)
    }
}
