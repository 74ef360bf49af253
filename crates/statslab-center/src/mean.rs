//! Arithmetic, geometric and harmonic means

use statslab_core::{CentralTendencyEstimator, Error, Result};
use tracing::trace;

/// Arithmetic mean: the sum divided by the number of points
///
/// # Example
///
/// ```rust
/// use statslab_center::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "mean")?;
    let n = data.len() as f64;
    let sum = data.iter().sum::<f64>();
    if sum.is_infinite() && data.iter().all(|x| x.is_finite()) {
        // The running sum overflowed; scale each term first
        trace!("mean: sum overflowed, rescaling {} values", data.len());
        return Ok(data.iter().map(|x| x / n).sum());
    }
    Ok(sum / n)
}

/// Floating-point mean with optional weights
///
/// An empty `weights` slice means every point has weight 1.
///
/// # Errors
///
/// - [`Error::EmptySample`] on empty data
/// - [`Error::LengthMismatch`] if `weights` is non-empty and of another length
/// - [`Error::InvalidArgument`] if the weights sum to zero
pub fn fmean(data: &[f64], weights: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "fmean")?;
    Error::check_weights(weights, data.len())?;
    if weights.is_empty() {
        return mean(data);
    }

    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(Error::InvalidArgument(
            "fmean: sum of weights must be non-zero".to_string(),
        ));
    }
    let weighted: f64 = data.iter().zip(weights).map(|(x, w)| x * w).sum();
    Ok(weighted / total)
}

/// Geometric mean: `exp(mean(ln x))`
///
/// # Errors
///
/// - [`Error::EmptySample`] on empty data
/// - [`Error::InvalidDomain`] if any value is zero, negative, or NaN
///
/// # Example
///
/// ```rust
/// use statslab_center::geometric_mean;
///
/// let g = geometric_mean(&[54.0, 24.0, 36.0]).unwrap();
/// assert!((g - 36.0).abs() < 1e-9);
/// ```
pub fn geometric_mean(data: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "geometric_mean")?;
    if let Some(bad) = data.iter().find(|&&x| !(x > 0.0)) {
        return Err(Error::InvalidDomain(format!(
            "geometric_mean requires positive values, got {bad}"
        )));
    }
    let log_sum: f64 = data.iter().map(|x| x.ln()).sum();
    Ok((log_sum / data.len() as f64).exp())
}

/// Weighted harmonic mean: `Σw / Σ(w/x)`
///
/// An empty `weights` slice means every point has weight 1. If any value is
/// zero the result is 0: a zero dominates the reciprocal sum. A single point
/// with a positive (or default) weight is returned as is.
///
/// # Errors
///
/// - [`Error::EmptySample`] on empty data
/// - [`Error::LengthMismatch`] if `weights` is non-empty and of another length
/// - [`Error::NegativeValue`] if any value or weight is negative
/// - [`Error::InvalidArgument`] if every weight is zero
///
/// # Example
///
/// ```rust
/// use statslab_center::harmonic_mean;
///
/// assert_eq!(harmonic_mean(&[1.0, 4.0], &[]).unwrap(), 1.6);
/// assert_eq!(harmonic_mean(&[40.0, 60.0], &[5.0, 30.0]).unwrap(), 56.0);
/// ```
pub fn harmonic_mean(data: &[f64], weights: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "harmonic_mean")?;
    Error::check_weights(weights, data.len())?;

    if let Some(x) = data.iter().find(|&&x| x < 0.0) {
        return Err(Error::NegativeValue(format!(
            "harmonic_mean does not support negative values, got {x}"
        )));
    }
    if let Some(w) = weights.iter().find(|&&w| w < 0.0) {
        return Err(Error::NegativeValue(format!(
            "harmonic_mean weights must be non-negative, got {w}"
        )));
    }

    // A single point with any positive weight is its own harmonic mean
    if data.len() == 1 && weights.first().map_or(true, |&w| w > 0.0) {
        return Ok(data[0]);
    }
    if data.iter().any(|&x| x == 0.0) {
        trace!("harmonic_mean: zero value present, result is 0");
        return Ok(0.0);
    }

    let (weight_sum, reciprocal_sum) = if weights.is_empty() {
        (
            data.len() as f64,
            data.iter().map(|x| x.recip()).sum::<f64>(),
        )
    } else {
        weights
            .iter()
            .zip(data)
            .fold((0.0, 0.0), |(ws, rs), (w, x)| (ws + w, rs + w / x))
    };

    if weight_sum == 0.0 {
        return Err(Error::InvalidArgument(
            "harmonic_mean: weights must not all be zero".to_string(),
        ));
    }
    Ok(weight_sum / reciprocal_sum)
}

/// Arithmetic mean as a [`CentralTendencyEstimator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl CentralTendencyEstimator for Mean {
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        mean(data)
    }

    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        mean(sorted_data)
    }

    fn name(&self) -> &str {
        "Mean"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}

/// Geometric mean as a [`CentralTendencyEstimator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricMean;

impl CentralTendencyEstimator for GeometricMean {
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        geometric_mean(data)
    }

    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        geometric_mean(sorted_data)
    }

    fn name(&self) -> &str {
        "Geometric Mean"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}

/// Weighted harmonic mean as a [`CentralTendencyEstimator`]
///
/// The weights are owned by the estimator and must match the length of every
/// sample it is applied to. Weights follow the order of the original data,
/// so `estimate_sorted` is only meaningful for uniform weights.
#[derive(Debug, Clone, Default)]
pub struct HarmonicMean {
    weights: Vec<f64>,
}

impl HarmonicMean {
    /// Uniformly weighted harmonic mean
    pub fn new() -> Self {
        Self::default()
    }

    /// Harmonic mean with one weight per data point
    pub fn with_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl CentralTendencyEstimator for HarmonicMean {
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        harmonic_mean(data, &self.weights)
    }

    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        if !self.weights.is_empty() {
            return Err(Error::InvalidArgument(
                "weighted harmonic mean cannot be computed from reordered data".to_string(),
            ));
        }
        harmonic_mean(sorted_data, &[])
    }

    fn name(&self) -> &str {
        "Harmonic Mean"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}
