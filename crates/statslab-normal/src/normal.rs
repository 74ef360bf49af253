//! The two-parameter Normal distribution
//!
//! A [`NormalDist`] is immutable data: every query is a pure function of
//! `(mu, sigma)` and its arguments. `sigma == 0` models a point mass at `mu`;
//! queries that need a density or a scale report
//! [`Error::DegenerateDistribution`] for it instead of dividing by zero.

use statslab_center::mean;
use statslab_core::math::distributions::normal;
use statslab_core::{Error, Result};
use statslab_spread::stdev;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;
use std::fmt;
use tracing::debug;

/// Normal distribution of a random variable
///
/// # Example
///
/// ```rust
/// use statslab_normal::NormalDist;
///
/// let iq = NormalDist::new(100.0, 15.0).unwrap();
/// let p = iq.cdf(130.0) - iq.cdf(115.0);
/// assert!((p - 0.1359).abs() < 1e-4);
///
/// let fitted = NormalDist::from_samples(&[2.5, 3.1, 2.1, 2.4, 2.7, 3.5]).unwrap();
/// assert!((fitted.mean() - 2.716666666666667).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawNormalDist")
)]
pub struct NormalDist {
    mu: f64,
    sigma: f64,
}

impl NormalDist {
    /// The standard normal distribution `N(0, 1)`
    pub const STANDARD: NormalDist = NormalDist { mu: 0.0, sigma: 1.0 };

    /// Normal distribution with mean `mu` and standard deviation `sigma`
    ///
    /// # Errors
    ///
    /// - [`Error::NegativeValue`] if `sigma < 0`
    /// - [`Error::InvalidArgument`] if either parameter is NaN
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if mu.is_nan() || sigma.is_nan() {
            return Err(Error::InvalidArgument(format!(
                "NormalDist parameters must be numbers, got mu={mu}, sigma={sigma}"
            )));
        }
        if sigma < 0.0 {
            return Err(Error::NegativeValue(format!(
                "sigma must be non-negative, got {sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    /// Fit a distribution to `data` using its mean and sample standard deviation
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySample`] on empty data
    /// - [`Error::InsufficientData`] with a single data point
    pub fn from_samples(data: &[f64]) -> Result<Self> {
        Error::check_min_len(data, 2, "NormalDist::from_samples")?;
        let mu = mean(data)?;
        let sigma = stdev(data, None)?;
        debug!("Fitted N({}, {}) to {} samples", mu, sigma, data.len());
        Self::new(mu, sigma)
    }

    /// Arithmetic mean of the distribution
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mu
    }

    /// Median of the distribution (equal to the mean)
    #[inline]
    pub fn median(&self) -> f64 {
        self.mu
    }

    /// Mode of the distribution (equal to the mean)
    #[inline]
    pub fn mode(&self) -> f64 {
        self.mu
    }

    /// Standard deviation of the distribution
    #[inline]
    pub fn stdev(&self) -> f64 {
        self.sigma
    }

    /// Variance of the distribution
    #[inline]
    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// Whether this is a point mass at `mu`
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.sigma == 0.0
    }

    /// Probability density at `x`
    pub fn pdf(&self, x: f64) -> Result<f64> {
        if self.is_degenerate() {
            return Err(Error::DegenerateDistribution("pdf"));
        }
        Ok(normal::pdf((x - self.mu) / self.sigma) / self.sigma)
    }

    /// Probability that a draw is less than or equal to `x`
    ///
    /// A point mass steps from 0 to 1 at `mu`.
    pub fn cdf(&self, x: f64) -> f64 {
        if self.is_degenerate() {
            return if x < self.mu { 0.0 } else { 1.0 };
        }
        // 0.5 * (1 + erf((x - mu) / (sigma * √2))) without lower-tail cancellation
        0.5 * erfc((self.mu - x) / (self.sigma * SQRT_2))
    }

    /// Inverse of [`cdf`](Self::cdf): the `x` with `cdf(x) == p`
    ///
    /// # Errors
    ///
    /// [`Error::DomainError`] unless `0 < p < 1`
    pub fn inv_cdf(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::invalid_probability(p));
        }
        Ok(self.mu + self.sigma * normal::ppf(p))
    }

    /// Divide the distribution into `n` intervals of equal probability
    ///
    /// Returns the `n - 1` cut points; `n = 4` gives the quartiles.
    pub fn quantiles(&self, n: usize) -> Result<Vec<f64>> {
        if n < 1 {
            return Err(Error::InvalidArgument(
                "quantiles: n must be at least 1".to_string(),
            ));
        }
        (1..n).map(|i| self.inv_cdf(i as f64 / n as f64)).collect()
    }

    /// Number of standard deviations `x` lies above the mean
    pub fn zscore(&self, x: f64) -> Result<f64> {
        if self.is_degenerate() {
            return Err(Error::DegenerateDistribution("zscore"));
        }
        Ok((x - self.mu) / self.sigma)
    }

    /// Overlapping coefficient: the area under the smaller of the two densities
    ///
    /// Closed form after Inman & Bradley (1989). The result is in `[0, 1]` and
    /// symmetric in its arguments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statslab_normal::NormalDist;
    ///
    /// let a = NormalDist::new(2.4, 1.6).unwrap();
    /// let b = NormalDist::new(3.2, 2.0).unwrap();
    /// assert!((a.overlap(&b).unwrap() - 0.8035050657330205).abs() < 1e-9);
    /// ```
    pub fn overlap(&self, other: &NormalDist) -> Result<f64> {
        if self.is_degenerate() || other.is_degenerate() {
            return Err(Error::DegenerateDistribution("overlap"));
        }

        // Order the pair so the result does not depend on argument order
        let (x, y) = if (other.sigma, other.mu) < (self.sigma, self.mu) {
            (other, self)
        } else {
            (self, other)
        };

        let (x_var, y_var) = (x.variance(), y.variance());
        let dv = y_var - x_var;
        let dm = (y.mu - x.mu).abs();

        if dv == 0.0 {
            debug!("overlap: equal variances, dm={}", dm);
            return Ok(erfc(dm / (2.0 * x.sigma * SQRT_2)));
        }

        let a = x.mu * y_var - y.mu * x_var;
        let b = x.sigma * y.sigma * (dm * dm + dv * (y_var / x_var).ln()).sqrt();
        let x1 = (a + b) / dv;
        let x2 = (a - b) / dv;
        debug!("overlap: densities cross at {} and {}", x1, x2);

        Ok(1.0 - ((y.cdf(x1) - x.cdf(x1)).abs() + (y.cdf(x2) - x.cdf(x2)).abs()))
    }

    pub(crate) fn from_parts_unchecked(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }
}

impl Default for NormalDist {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for NormalDist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalDist(mu={}, sigma={})", self.mu, self.sigma)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawNormalDist {
    mu: f64,
    sigma: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawNormalDist> for NormalDist {
    type Error = Error;

    fn try_from(raw: RawNormalDist) -> Result<Self> {
        Self::new(raw.mu, raw.sigma)
    }
}
