//! Interpolated n-quantiles
//!
//! Cut points are linear interpolations between adjacent order statistics.
//! The two methods differ only in how a probability maps to a fractional
//! rank:
//!
//! | Method      | Rank of cut `i` | Endpoints                         |
//! |-------------|-----------------|-----------------------------------|
//! | `Exclusive` | `i·(N+1)/n`     | may extrapolate past min/max      |
//! | `Inclusive` | `i·(N−1)/n`     | min and max are the 0th/100th pct |
//!
//! All rank arithmetic is done in integers so that cut points of small
//! samples are exact wherever the interpolation weights allow.

use statslab_core::{utils, Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Number of intervals used when no count is given (quartiles)
pub const DEFAULT_QUANTILE_COUNT: usize = 4;

/// Interpolation convention used by [`quantiles`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum QuantileMethod {
    /// Treat the data as a sample from a larger population; `N + 1` denominator
    #[default]
    Exclusive,
    /// Treat the data as the whole population; `N − 1` denominator
    Inclusive,
}

impl QuantileMethod {
    /// Smallest sample this method can interpolate over
    pub fn min_len(self) -> usize {
        match self {
            Self::Exclusive => 2,
            Self::Inclusive => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::Inclusive => "inclusive",
        }
    }
}

impl fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantileMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exclusive" => Ok(Self::Exclusive),
            "inclusive" => Ok(Self::Inclusive),
            other => Err(Error::InvalidArgument(format!(
                "unknown quantile method {other:?}"
            ))),
        }
    }
}

/// Divide `data` into `n` continuous intervals with equal probability
///
/// Returns the `n - 1` cut points separating the intervals. The input is
/// copied and sorted; it is never reordered in place.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `n < 1`
/// - [`Error::EmptySample`] if `data` is empty
/// - [`Error::InsufficientData`] if `data` has a single point and `method`
///   is [`QuantileMethod::Exclusive`]
///
/// # Example
///
/// ```rust
/// use statslab_quantile::{quantiles, QuantileMethod};
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantiles(&data, 4, QuantileMethod::Exclusive).unwrap(), vec![1.25, 2.5, 3.75]);
/// assert_eq!(quantiles(&data, 4, QuantileMethod::Inclusive).unwrap(), vec![1.75, 2.5, 3.25]);
/// ```
pub fn quantiles(data: &[f64], n: usize, method: QuantileMethod) -> Result<Vec<f64>> {
    validate(data, n, method)?;
    Ok(cut_points(&utils::sorted(data), n, method))
}

/// As [`quantiles`], for data already in non-decreasing order
pub fn quantiles_sorted(sorted_data: &[f64], n: usize, method: QuantileMethod) -> Result<Vec<f64>> {
    validate(sorted_data, n, method)?;
    debug_assert!(utils::is_sorted(sorted_data), "quantiles_sorted requires sorted input");
    Ok(cut_points(sorted_data, n, method))
}

/// The three quartile cut points using the default exclusive method
pub fn quartiles(data: &[f64]) -> Result<[f64; 3]> {
    let cuts = quantiles(data, DEFAULT_QUANTILE_COUNT, QuantileMethod::Exclusive)?;
    Ok([cuts[0], cuts[1], cuts[2]])
}

fn validate(data: &[f64], n: usize, method: QuantileMethod) -> Result<()> {
    if n < 1 {
        return Err(Error::InvalidArgument(
            "quantiles: n must be at least 1".to_string(),
        ));
    }
    Error::check_min_len(data, method.min_len(), "quantiles")
}

fn cut_points(sorted: &[f64], n: usize, method: QuantileMethod) -> Vec<f64> {
    let len = sorted.len();
    let nf = n as f64;
    trace!("Computing {} {} cut points over {} values", n - 1, method, len);

    match method {
        QuantileMethod::Inclusive if len == 1 => vec![sorted[0]; n - 1],
        QuantileMethod::Inclusive => {
            let m = len - 1;
            (1..n)
                .map(|i| {
                    let j = i * m / n;
                    let delta = (i * m - j * n) as f64;
                    (sorted[j] * (nf - delta) + sorted[j + 1] * delta) / nf
                })
                .collect()
        }
        QuantileMethod::Exclusive => {
            let m = len + 1;
            (1..n)
                .map(|i| {
                    let j = (i * m / n).clamp(1, len - 1);
                    // Negative or > n once j is clamped: the cut extrapolates
                    let delta = (i * m) as f64 - (j * n) as f64;
                    (sorted[j - 1] * (nf - delta) + sorted[j] * delta) / nf
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EXAM_SCORES: [f64; 50] = [
        105.0, 129.0, 87.0, 86.0, 111.0, 111.0, 89.0, 81.0, 108.0, 92.0, 110.0, 100.0, 75.0,
        105.0, 103.0, 109.0, 76.0, 119.0, 99.0, 91.0, 103.0, 129.0, 106.0, 101.0, 84.0, 111.0,
        74.0, 87.0, 86.0, 103.0, 103.0, 106.0, 86.0, 111.0, 75.0, 87.0, 102.0, 121.0, 111.0, 88.0,
        89.0, 101.0, 106.0, 95.0, 103.0, 107.0, 101.0, 81.0, 109.0, 104.0,
    ];

    #[test]
    fn test_deciles_exclusive() {
        let cuts = quantiles(&EXAM_SCORES, 10, QuantileMethod::Exclusive).unwrap();
        let expected = [81.0, 86.2, 89.0, 99.4, 102.5, 103.6, 106.0, 109.8, 111.0];
        assert_eq!(cuts.len(), expected.len());
        for (got, want) in cuts.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quartiles_small() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            quantiles(&data, 4, QuantileMethod::Exclusive).unwrap(),
            vec![1.25, 2.5, 3.75]
        );
        assert_eq!(
            quantiles(&data, 4, QuantileMethod::Inclusive).unwrap(),
            vec![1.75, 2.5, 3.25]
        );
        assert_eq!(quartiles(&data).unwrap(), [1.25, 2.5, 3.75]);
    }

    #[test]
    fn test_exclusive_extrapolates_small_sample() {
        let cuts = quantiles(&[1.0, 2.0], 4, QuantileMethod::Exclusive).unwrap();
        assert_eq!(cuts, vec![0.75, 1.5, 2.25]);
    }

    #[test]
    fn test_inclusive_stays_within_range() {
        let cuts = quantiles(&[10.0, 20.0], 4, QuantileMethod::Inclusive).unwrap();
        assert_eq!(cuts, vec![12.5, 15.0, 17.5]);
    }

    #[test]
    fn test_unsorted_input_is_not_modified() {
        let data = vec![4.0, 1.0, 3.0, 2.0];
        let cuts = quantiles(&data, 2, QuantileMethod::Exclusive).unwrap();
        assert_eq!(cuts, vec![2.5]);
        assert_eq!(data, vec![4.0, 1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(
            quantiles(&[7.0], 4, QuantileMethod::Inclusive).unwrap(),
            vec![7.0, 7.0, 7.0]
        );
        assert_eq!(
            quantiles(&[7.0], 4, QuantileMethod::Exclusive),
            Err(Error::InsufficientData {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_n_equal_one_yields_no_cuts() {
        assert!(quantiles(&[1.0, 2.0, 3.0], 1, QuantileMethod::Exclusive)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            quantiles(&[1.0, 2.0], 0, QuantileMethod::Exclusive),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            quantiles(&[], 4, QuantileMethod::Inclusive),
            Err(Error::EmptySample { .. })
        ));
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("exclusive".parse::<QuantileMethod>().unwrap(), QuantileMethod::Exclusive);
        assert_eq!("inclusive".parse::<QuantileMethod>().unwrap(), QuantileMethod::Inclusive);
        assert!(matches!(
            "nearest".parse::<QuantileMethod>(),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(QuantileMethod::default(), QuantileMethod::Exclusive);
        assert_eq!(QuantileMethod::Inclusive.to_string(), "inclusive");
    }

    #[test]
    fn test_sorted_variant_matches() {
        let sorted = utils::sorted(&EXAM_SCORES);
        assert_eq!(
            quantiles_sorted(&sorted, 5, QuantileMethod::Inclusive).unwrap(),
            quantiles(&EXAM_SCORES, 5, QuantileMethod::Inclusive).unwrap()
        );
    }
}
