//! Higher-order moments: skewness and kurtosis
//!
//! Both are population moments of the standardized data. Constant data has
//! no defined shape and reports 0.

use statslab_center::mean;
use statslab_core::{Error, Result};

/// Mean and population variance in one place for the moment functions
fn center_and_scale(sample: &[f64]) -> Result<(f64, f64)> {
    let m = mean(sample)?;
    let n = sample.len() as f64;
    let variance = sample.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / n;
    Ok((m, variance))
}

/// Whether `variance` is indistinguishable from the rounding noise of the mean
///
/// The cutoff scales with the magnitude of the data, so tightly clustered
/// but genuinely varying samples keep their shape.
fn is_flat(sample: &[f64], variance: f64) -> bool {
    let max_abs = sample.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    let noise = sample.len() as f64 * f64::EPSILON * max_abs;
    variance <= noise * noise
}

/// Calculate traditional (non-robust) skewness
///
/// Requires at least three observations.
pub fn classical_skewness(sample: &[f64]) -> Result<f64> {
    Error::check_min_len(sample, 3, "skewness")?;

    let (m, variance) = center_and_scale(sample)?;
    if is_flat(sample, variance) {
        return Ok(0.0);
    }

    let std_dev = variance.sqrt();
    let n = sample.len() as f64;
    let skewness = sample
        .iter()
        .map(|&x| {
            let z = (x - m) / std_dev;
            z * z * z
        })
        .sum::<f64>()
        / n;

    Ok(skewness)
}

/// Calculate traditional (non-robust) excess kurtosis
///
/// Requires at least four observations. A normal population scores 0.
pub fn classical_kurtosis(sample: &[f64]) -> Result<f64> {
    Error::check_min_len(sample, 4, "kurtosis")?;

    let (m, variance) = center_and_scale(sample)?;
    if is_flat(sample, variance) {
        return Ok(0.0);
    }

    let std_dev = variance.sqrt();
    let n = sample.len() as f64;
    let kurtosis = sample
        .iter()
        .map(|&x| {
            let z = (x - m) / std_dev;
            let squared = z * z;
            squared * squared
        })
        .sum::<f64>()
        / n
        - 3.0; // Excess kurtosis

    Ok(kurtosis)
}
