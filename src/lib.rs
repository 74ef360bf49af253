//! # statslab
//!
//! Descriptive statistics over in-memory samples of real numbers, plus a
//! Normal distribution model that can be fit to them.
//!
//! ## Crates
//!
//! - [`core`]: [`Sample`], the [`Error`] taxonomy and shared traits
//! - [`center`]: means, medians and modes
//! - [`spread`]: variance, standard deviation and higher moments
//! - [`quantile`]: cut points under the exclusive and inclusive methods
//! - [`normal`]: the [`NormalDist`] model
//!
//! ## Quick Start
//!
//! ```rust
//! use statslab::prelude::*;
//!
//! let sample: Sample = vec![2.5, 3.1, 2.1, 2.4, 2.7, 3.5].into();
//!
//! let m = median(&sample)?;
//! let q = quantiles(&sample, 4, QuantileMethod::Exclusive)?;
//! assert_eq!(q.len(), 3);
//!
//! let model = NormalDist::from_samples(&sample)?;
//! assert!(model.cdf(m) > 0.4);
//!
//! let stats = Statistics::from_sample(&sample)?;
//! assert_eq!(stats.count, 6);
//! # Ok::<(), statslab::Error>(())
//! ```

pub mod summary;

pub use statslab_center as center;
pub use statslab_core as core;
pub use statslab_normal as normal;
pub use statslab_quantile as quantile;
pub use statslab_spread as spread;

pub use statslab_center::{
    fmean, geometric_mean, harmonic_mean, mean, median, median_grouped, median_high, median_low,
    mode, multimode,
};
pub use statslab_core::{CentralTendencyEstimator, Error, Result, Sample};
pub use statslab_normal::NormalDist;
pub use statslab_quantile::{quantiles, QuantileMethod};
pub use statslab_spread::{pstdev, pvariance, stdev, variance, SpreadEstimator};
pub use summary::Statistics;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        fmean, geometric_mean, harmonic_mean, mean, median, median_grouped, median_high,
        median_low, mode, multimode, pstdev, pvariance, quantiles, stdev, variance,
    };
    pub use crate::{
        CentralTendencyEstimator, Error, NormalDist, QuantileMethod, Result, Sample,
        SpreadEstimator, Statistics,
    };
}
