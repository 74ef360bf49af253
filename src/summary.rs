//! One-shot descriptive summary of a sample

use statslab_center::{mean, median_sorted, mode};
use statslab_core::{utils, Error, Result};
use statslab_quantile::{quantiles_sorted, QuantileMethod, DEFAULT_QUANTILE_COUNT};
use statslab_spread::{classical_kurtosis, classical_skewness, pvariance, variance};
use std::fmt;
use tracing::debug;

/// Center, dispersion and shape of one sample
///
/// Metrics that need more observations than the sample has are `None`
/// rather than an error, so a summary of a small sample is still useful.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub pvariance: f64,
    pub pstdev: f64,
    /// Sample variance; needs two observations
    pub variance: Option<f64>,
    pub stdev: Option<f64>,
    /// Exclusive-method quartiles; needs two observations
    pub quartiles: Option<[f64; 3]>,
    /// Population skewness; needs three observations
    pub skewness: Option<f64>,
    /// Excess kurtosis; needs four observations
    pub kurtosis: Option<f64>,
}

impl Statistics {
    /// Summarize `data`
    ///
    /// # Errors
    ///
    /// [`Error::EmptySample`] if `data` is empty
    ///
    /// # Example
    ///
    /// ```rust
    /// use statslab::Statistics;
    ///
    /// let stats = Statistics::from_sample(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.pvariance, 1.25);
    /// assert_eq!(stats.quartiles, Some([1.25, 2.5, 3.75]));
    /// assert!(stats.skewness.is_some());
    /// ```
    pub fn from_sample(data: &[f64]) -> Result<Self> {
        Error::check_non_empty(data, "summary")?;
        debug!("Summarizing sample of {} values", data.len());

        let sorted = utils::sorted(data);
        let mean = mean(data)?;
        let pvariance = pvariance(data, None)?;

        let (variance, quartiles) = if data.len() >= 2 {
            let cuts = quantiles_sorted(&sorted, DEFAULT_QUANTILE_COUNT, QuantileMethod::Exclusive)?;
            (
                Some(variance(data, None)?),
                Some([cuts[0], cuts[1], cuts[2]]),
            )
        } else {
            (None, None)
        };
        let skewness = if data.len() >= 3 {
            Some(classical_skewness(data)?)
        } else {
            None
        };
        let kurtosis = if data.len() >= 4 {
            Some(classical_kurtosis(data)?)
        } else {
            None
        };

        Ok(Self {
            count: data.len(),
            min: utils::nan_min(data),
            max: utils::nan_max(data),
            mean,
            median: median_sorted(&sorted)?,
            mode: mode(data)?,
            pvariance,
            pstdev: pvariance.sqrt(),
            variance,
            stdev: variance.map(f64::sqrt),
            quartiles,
            skewness,
            kurtosis,
        })
    }

    /// Distance between the first and third quartiles
    pub fn iqr(&self) -> Option<f64> {
        self.quartiles.map(|[q1, _, q3]| q3 - q1)
    }

    /// Distance between the smallest and largest values
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt(value: Option<f64>) -> String {
            value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
        }

        writeln!(f, "count:     {}", self.count)?;
        writeln!(f, "min / max: {:.4} / {:.4}", self.min, self.max)?;
        writeln!(f, "mean:      {:.4}", self.mean)?;
        writeln!(f, "median:    {:.4}", self.median)?;
        writeln!(f, "mode:      {:.4}", self.mode)?;
        writeln!(f, "pstdev:    {:.4}", self.pstdev)?;
        writeln!(f, "stdev:     {}", opt(self.stdev))?;
        match self.quartiles {
            Some([q1, q2, q3]) => writeln!(f, "quartiles: {q1:.4} / {q2:.4} / {q3:.4}")?,
            None => writeln!(f, "quartiles: n/a")?,
        }
        writeln!(f, "skewness:  {}", opt(self.skewness))?;
        write!(f, "kurtosis:  {}", opt(self.kurtosis))
    }
}
