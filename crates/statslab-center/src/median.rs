//! The median family
//!
//! Every function sorts a private copy of the data; the caller's slice is
//! never reordered. The `*_sorted` variants skip the copy for callers that
//! already hold sorted data.

use statslab_core::{utils, CentralTendencyEstimator, Error, Result};
use statslab_quantile::{bisect_left, bisect_right};
use tracing::debug;

/// Class width assumed by [`median_grouped`] when none is given
pub const DEFAULT_INTERVAL: f64 = 1.0;

/// Median: the middle value, or the mean of the two middle values
///
/// # Example
///
/// ```rust
/// use statslab_center::median;
///
/// assert_eq!(median(&[3.0, 1.0, 5.0]).unwrap(), 3.0);
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "median")?;
    median_sorted(&utils::sorted(data))
}

/// Low median: the smaller of the two middle values for even-sized data
pub fn median_low(data: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "median_low")?;
    median_low_sorted(&utils::sorted(data))
}

/// High median: the larger of the two middle values for even-sized data
pub fn median_high(data: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "median_high")?;
    median_high_sorted(&utils::sorted(data))
}

/// Median of pre-sorted data
pub fn median_sorted(sorted: &[f64]) -> Result<f64> {
    Error::check_non_empty(sorted, "median")?;
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Low median of pre-sorted data
pub fn median_low_sorted(sorted: &[f64]) -> Result<f64> {
    Error::check_non_empty(sorted, "median_low")?;
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok(sorted[n / 2 - 1])
    }
}

/// High median of pre-sorted data
pub fn median_high_sorted(sorted: &[f64]) -> Result<f64> {
    Error::check_non_empty(sorted, "median_high")?;
    Ok(sorted[sorted.len() / 2])
}

/// Median of grouped continuous data, interpolated within the median class
///
/// Each value is taken as the midpoint of a class of width `interval`. With
/// `item` the value at index `N/2` of the sorted data:
///
/// ```text
/// L  = item - interval / 2          lower class boundary
/// CF = #{x < item}                  cumulative frequency below the class
/// F  = #{x == item}                 frequency of the class
/// median = L + interval * (N/2 - CF) / F
/// ```
///
/// # Errors
///
/// - [`Error::EmptySample`] on empty data
/// - [`Error::InvalidArgument`] if `interval` is not a positive finite number
///
/// # Example
///
/// ```rust
/// use statslab_center::median_grouped;
///
/// let data = [1.0, 2.0, 2.0, 3.0, 4.0, 4.0, 4.0, 4.0, 4.0, 5.0];
/// let m = median_grouped(&data, 1.0).unwrap();
/// assert!((m - 3.7).abs() < 1e-12);
/// ```
pub fn median_grouped(data: &[f64], interval: f64) -> Result<f64> {
    check_interval(interval)?;
    Error::check_non_empty(data, "median_grouped")?;
    median_grouped_sorted(&utils::sorted(data), interval)
}

/// Grouped median of pre-sorted data
pub fn median_grouped_sorted(sorted: &[f64], interval: f64) -> Result<f64> {
    check_interval(interval)?;
    Error::check_non_empty(sorted, "median_grouped")?;

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let item = sorted[n / 2];
    let lower = item - interval / 2.0;
    let cf = bisect_left(sorted, item);
    let f = bisect_right(sorted, item) - cf;
    if f == 0 {
        // Only reachable when item is NaN
        return Ok(f64::NAN);
    }
    debug!(
        "median_grouped: class at {} spans [{}, {}), cf={}, f={}",
        item,
        lower,
        lower + interval,
        cf,
        f
    );

    Ok(lower + interval * (n as f64 / 2.0 - cf as f64) / f as f64)
}

fn check_interval(interval: f64) -> Result<()> {
    if !(interval.is_finite() && interval > 0.0) {
        return Err(Error::InvalidArgument(format!(
            "median_grouped interval must be positive, got {interval}"
        )));
    }
    Ok(())
}

/// Median as a [`CentralTendencyEstimator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl CentralTendencyEstimator for Median {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        median_sorted(sorted_data)
    }

    fn name(&self) -> &str {
        "Median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

/// Low median as a [`CentralTendencyEstimator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianLow;

impl CentralTendencyEstimator for MedianLow {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        median_low_sorted(sorted_data)
    }

    fn name(&self) -> &str {
        "Median (low)"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

/// High median as a [`CentralTendencyEstimator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianHigh;

impl CentralTendencyEstimator for MedianHigh {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        median_high_sorted(sorted_data)
    }

    fn name(&self) -> &str {
        "Median (high)"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

/// Grouped median as a [`CentralTendencyEstimator`]
#[derive(Debug, Clone, Copy)]
pub struct MedianGrouped {
    interval: f64,
}

impl MedianGrouped {
    /// Grouped median over classes of width `interval`
    pub fn new(interval: f64) -> Result<Self> {
        check_interval(interval)?;
        Ok(Self { interval })
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }
}

impl Default for MedianGrouped {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl CentralTendencyEstimator for MedianGrouped {
    fn estimate_sorted(&self, sorted_data: &[f64]) -> Result<f64> {
        median_grouped_sorted(sorted_data, self.interval)
    }

    fn name(&self) -> &str {
        "Grouped Median"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}
