//! Quantile computation over in-memory samples
//!
//! This crate provides the generalized n-quantile computation with a
//! selectable interpolation method, together with the insertion-point
//! searches (`bisect_left` / `bisect_right`) that other statslab crates reuse
//! to count runs of equal values in sorted data.
//!
//! # Example
//!
//! ```rust
//! use statslab_quantile::{bisect_left, bisect_right, quantiles, QuantileMethod};
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let quartiles = quantiles(&data, 4, QuantileMethod::Inclusive).unwrap();
//! assert_eq!(quartiles, vec![2.0, 3.0, 4.5]);
//!
//! // Elements strictly below / at most 2.0
//! assert_eq!(bisect_left(&data, 2.0), 1);
//! assert_eq!(bisect_right(&data, 2.0), 3);
//! ```

pub mod bisect;
pub mod quantiles;

// Re-export main types
pub use bisect::{bisect_left, bisect_right, count_equal};
pub use quantiles::{quantiles, quantiles_sorted, quartiles, QuantileMethod, DEFAULT_QUANTILE_COUNT};
pub use statslab_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{quantiles, Error, QuantileMethod, Result};
}
