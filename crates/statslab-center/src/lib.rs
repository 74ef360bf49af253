//! Central tendency for in-memory samples
//!
//! This crate provides the classical measures of location:
//! - Arithmetic mean, weighted `fmean`, geometric mean, weighted harmonic mean
//! - Median, low/high median, grouped (interpolated) median
//! - Mode and multimode
//!
//! # Estimator Properties
//!
//! | Estimator      | Breakdown Point | Requires          |
//! |----------------|-----------------|-------------------|
//! | Mean           | 0%              | N ≥ 1             |
//! | Geometric Mean | 0%              | N ≥ 1, all x > 0  |
//! | Harmonic Mean  | 0%              | N ≥ 1, all x ≥ 0  |
//! | Median (all)   | 50%             | N ≥ 1             |
//!
//! Every function takes a `&[f64]`; a [`statslab_core::Sample`] derefs to
//! one. Inputs are never reordered.
//!
//! # Example
//!
//! ```rust
//! use statslab_center::{harmonic_mean, mean, median_low, multimode};
//! use statslab_core::Sample;
//!
//! let sample = Sample::from(vec![1.0, 2.0, 2.0, 4.0]);
//! assert_eq!(mean(&sample).unwrap(), 2.25);
//! assert_eq!(median_low(&sample).unwrap(), 2.0);
//! assert_eq!(multimode(&sample), vec![2.0]);
//! assert_eq!(harmonic_mean(&[1.0, 4.0], &[]).unwrap(), 1.6);
//! ```

pub mod mean;
pub mod median;
pub mod mode;

// Re-exports
pub use mean::{fmean, geometric_mean, harmonic_mean, mean, GeometricMean, HarmonicMean, Mean};
pub use median::{
    median, median_grouped, median_grouped_sorted, median_high, median_high_sorted, median_low,
    median_low_sorted, median_sorted, Median, MedianGrouped, MedianHigh, MedianLow,
    DEFAULT_INTERVAL,
};
pub use mode::{mode, multimode};
pub use statslab_core::{CentralTendencyEstimator, Error, Result};
