//! The immutable in-memory sample every statistic is computed over
//!
//! Algorithms throughout the workspace consume plain `&[f64]` slices.
//! [`Sample`] owns the data, derefs to `[f64]`, and hosts the adapters that
//! convert other containers and numeric types at the boundary.

use crate::{utils, Error, Result};
use num_traits::ToPrimitive;
use std::ops::Deref;

/// An immutable, ordered sequence of real numbers
///
/// There is no mutable access once constructed, so a `Sample` can be shared
/// across threads and read concurrently.
///
/// # Example
///
/// ```rust
/// use statslab_core::Sample;
///
/// let sample = Sample::from_numeric([3_i32, 1, 2]).unwrap();
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample.min().unwrap(), 1.0);
/// assert_eq!(sample.sorted(), vec![1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Wrap an owned vector without copying
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Convert any primitive numeric sequence into a sample
    ///
    /// Fails with [`Error::InvalidArgument`] if a value has no `f64`
    /// representation.
    pub fn from_numeric<T, I>(values: I) -> Result<Self>
    where
        T: ToPrimitive,
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                v.to_f64().ok_or_else(|| {
                    Error::InvalidArgument(format!("value at index {i} is not representable as f64"))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Borrow the underlying values
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Element at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Smallest value, ignoring NaN
    pub fn min(&self) -> Result<f64> {
        Error::check_non_empty(&self.values, "min")?;
        Ok(utils::nan_min(&self.values))
    }

    /// Largest value, ignoring NaN
    pub fn max(&self) -> Result<f64> {
        Error::check_non_empty(&self.values, "max")?;
        Ok(utils::nan_max(&self.values))
    }

    /// Sorted copy of the values (NaN last); the sample itself is unchanged
    pub fn sorted(&self) -> Vec<f64> {
        utils::sorted(&self.values)
    }

    /// Give back the owned values
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Sample {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Sample {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Sample {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
