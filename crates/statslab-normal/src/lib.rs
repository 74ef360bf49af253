//! Normal distribution model
//!
//! [`NormalDist`] describes a Normal random variable by its mean `mu` and
//! standard deviation `sigma`. It can be built directly, fit to data with
//! [`NormalDist::from_samples`], queried for densities and probabilities,
//! combined arithmetically, and sampled reproducibly.
//!
//! # Example
//!
//! ```rust
//! use statslab_normal::NormalDist;
//!
//! let heights = NormalDist::new(170.0, 7.5).unwrap();
//! let doubled = heights * 2.0;
//! assert_eq!(doubled.stdev(), 15.0);
//!
//! let q = heights.quantiles(4).unwrap();
//! assert_eq!(q[1], 170.0);
//! ```

pub mod normal;
pub mod ops;
pub mod sampling;

pub use normal::NormalDist;
pub use statslab_core::{Error, Result};
