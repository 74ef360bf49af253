//! Dispersion measurements for statistical analysis
//!
//! This crate provides the classical estimators of scale/spread:
//! - Population variance and standard deviation (`pvariance`, `pstdev`)
//! - Sample variance and standard deviation with Bessel's correction
//!   (`variance`, `stdev`)
//! - Classical skewness and excess kurtosis
//!
//! # Estimator Properties
//!
//! | Estimator | Divisor | Minimum N |
//! |-----------|---------|-----------|
//! | pvariance | N       | 1         |
//! | variance  | N − 1   | 2         |
//! | skewness  | N       | 3         |
//! | kurtosis  | N       | 4         |
//!
//! # Example
//!
//! ```rust
//! use statslab_spread::{pvariance, stdev, PopulationStdDev, SpreadEstimator};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(pvariance(&data, None).unwrap(), 4.0);
//! assert_eq!(PopulationStdDev.estimate(&data).unwrap(), 2.0);
//!
//! // A known mean can be passed to skip recomputing it
//! let s = stdev(&data, Some(5.0)).unwrap();
//! assert!((s - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
//! ```

pub mod moments;
pub mod traits;
pub mod variance;

// Re-exports
pub use moments::{classical_kurtosis, classical_skewness};
pub use traits::SpreadEstimator;
pub use variance::{pstdev, pvariance, stdev, variance, PopulationStdDev, SampleStdDev};
pub use statslab_core::{Error, Result};
