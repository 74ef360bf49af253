//! Core sample type, error taxonomy and traits for descriptive statistics
//!
//! This crate is the leaf of the statslab workspace. It provides:
//!
//! - [`Sample`]: an immutable ordered sequence of `f64` with boundary
//!   adapters for other containers and numeric types
//! - [`Error`] / [`Result`]: the error taxonomy every operation reports through
//! - [`CentralTendencyEstimator`]: the seam estimator types plug into
//! - [`math::distributions::normal`]: numerically careful standard normal
//!   functions built on `statrs`
//!
//! # Example
//!
//! ```rust
//! use statslab_core::{Error, Sample};
//!
//! let sample = Sample::from(vec![4.0, 1.0, 3.0]);
//! assert_eq!(sample.max().unwrap(), 4.0);
//!
//! let empty = Sample::default();
//! assert!(matches!(empty.min(), Err(Error::EmptySample { .. })));
//! ```

pub mod error;
pub mod math;
pub mod sample;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use sample::Sample;
pub use traits::CentralTendencyEstimator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{CentralTendencyEstimator, Result, Sample};
}
