//! Variance and standard deviation
//!
//! Population statistics divide by `N`; sample statistics apply Bessel's
//! correction and divide by `N - 1`.

use crate::traits::SpreadEstimator;
use statslab_center::mean;
use statslab_core::{Error, Result};
use tracing::trace;

/// Sum of squared deviations from `center`
///
/// When the center was computed from the data itself, the rounding error of
/// that mean is folded back in (corrected two-pass algorithm). A
/// caller-supplied center is used as is.
fn sum_of_squares(data: &[f64], center: Option<f64>) -> Result<f64> {
    let (c, corrected) = match center {
        Some(c) => (c, false),
        None => (mean(data)?, true),
    };

    let (ss, drift) = data.iter().fold((0.0, 0.0), |(ss, drift), &x| {
        let d = x - c;
        (ss + d * d, drift + d)
    });

    let ss = if corrected {
        ss - drift * drift / data.len() as f64
    } else {
        ss
    };
    trace!("sum of squares about {}: {}", c, ss);
    // Rounding must never produce a negative spread; NaN passes through
    Ok(if ss < 0.0 { 0.0 } else { ss })
}

/// Population variance: the mean squared deviation from `mu`
///
/// `mu` defaults to the mean of `data`. Pass it when already known to avoid a
/// second pass.
///
/// # Example
///
/// ```rust
/// use statslab_spread::pvariance;
///
/// assert_eq!(pvariance(&[1.0, 2.0, 3.0, 4.0], None).unwrap(), 1.25);
/// ```
pub fn pvariance(data: &[f64], mu: Option<f64>) -> Result<f64> {
    Error::check_non_empty(data, "pvariance")?;
    Ok(sum_of_squares(data, mu)? / data.len() as f64)
}

/// Sample variance with Bessel's correction
///
/// `xbar` defaults to the mean of `data`.
///
/// # Errors
///
/// - [`Error::EmptySample`] on empty data
/// - [`Error::InsufficientData`] with a single data point
///
/// # Example
///
/// ```rust
/// use statslab_spread::variance;
///
/// let v = variance(&[1.0, 2.0, 3.0, 4.0], None).unwrap();
/// assert!((v - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64], xbar: Option<f64>) -> Result<f64> {
    Error::check_min_len(data, 2, "variance")?;
    Ok(sum_of_squares(data, xbar)? / (data.len() - 1) as f64)
}

/// Population standard deviation, the square root of [`pvariance`]
pub fn pstdev(data: &[f64], mu: Option<f64>) -> Result<f64> {
    pvariance(data, mu).map(f64::sqrt)
}

/// Sample standard deviation, the square root of [`variance`]
pub fn stdev(data: &[f64], xbar: Option<f64>) -> Result<f64> {
    variance(data, xbar).map(f64::sqrt)
}

/// Population standard deviation as a [`SpreadEstimator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationStdDev;

impl SpreadEstimator for PopulationStdDev {
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        pstdev(data, None)
    }

    fn name(&self) -> &str {
        "Population Std Dev"
    }

    fn is_population(&self) -> bool {
        true
    }
}

/// Sample standard deviation as a [`SpreadEstimator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStdDev;

impl SpreadEstimator for SampleStdDev {
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        stdev(data, None)
    }

    fn name(&self) -> &str {
        "Sample Std Dev"
    }

    fn is_population(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(pvariance(&data, None).unwrap(), 1.25);
        assert_relative_eq!(variance(&data, None).unwrap(), 1.6666666666666667, epsilon = 1e-12);
        assert_relative_eq!(pstdev(&data, None).unwrap(), 1.118033988749895, epsilon = 1e-12);
        assert_relative_eq!(stdev(&data, None).unwrap(), 1.2909944487358056, epsilon = 1e-12);
    }

    #[test]
    fn test_textbook_sample() {
        let data = [2.75, 1.75, 1.25, 0.25, 0.5, 1.25, 3.5];
        assert_relative_eq!(variance(&data, None).unwrap(), 1.3720238095238095, epsilon = 1e-12);
        let pdata = [0.0, 0.25, 0.25, 1.25, 1.5, 1.75, 2.75, 3.25];
        assert_relative_eq!(pvariance(&pdata, None).unwrap(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_supplied_center() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(pvariance(&data, Some(2.5)).unwrap(), 1.25);
        // Deviations about another center are larger
        assert_eq!(pvariance(&data, Some(0.0)).unwrap(), 7.5);
        assert_eq!(variance(&data, Some(0.0)).unwrap(), 10.0);
    }

    #[test]
    fn test_constant_data_is_exactly_zero() {
        let data = [0.5; 17];
        assert_eq!(pvariance(&data, None).unwrap(), 0.0);
        assert_eq!(stdev(&data, None).unwrap(), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(pvariance(&[1.0, f64::NAN], None).unwrap().is_nan());
    }

    #[test]
    fn test_single_point() {
        assert_eq!(pvariance(&[3.0], None).unwrap(), 0.0);
        assert_eq!(pstdev(&[3.0], None).unwrap(), 0.0);
        assert_eq!(
            variance(&[3.0], None),
            Err(Error::InsufficientData {
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(stdev(&[3.0], None), Err(Error::InsufficientData { .. })));
    }

    #[test]
    fn test_empty() {
        assert!(matches!(pvariance(&[], None), Err(Error::EmptySample { .. })));
        assert!(matches!(pstdev(&[], None), Err(Error::EmptySample { .. })));
        assert!(matches!(variance(&[], None), Err(Error::EmptySample { .. })));
        assert!(matches!(stdev(&[], None), Err(Error::EmptySample { .. })));
    }

    #[test]
    fn test_estimators() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(PopulationStdDev.estimate(&data).unwrap(), 2.0);
        assert!(PopulationStdDev.is_population());
        assert!(!SampleStdDev.is_population());
        assert_relative_eq!(
            SampleStdDev.estimate(&data).unwrap(),
            (32.0f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(PopulationStdDev.standardize(&data, 6.0).unwrap(), 3.0);
        assert!(PopulationStdDev.standardize(&[1.0, 1.0], 6.0).is_err());
    }
}
