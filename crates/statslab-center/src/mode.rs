//! Most common values

use ordered_float::OrderedFloat;
use statslab_core::{Error, Result};
use std::collections::HashMap;

/// Distinct values in first-appearance order, with their counts
///
/// Values are keyed by `OrderedFloat`, so `-0.0` and `0.0` share a bucket and
/// all NaNs count as one value.
fn tally(data: &[f64]) -> Vec<(f64, usize)> {
    let mut slots: HashMap<OrderedFloat<f64>, usize> = HashMap::with_capacity(data.len());
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &x in data {
        let slot = *slots.entry(OrderedFloat(x)).or_insert_with(|| {
            counts.push((x, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts
}

/// The single most common value
///
/// Ties are broken by first appearance in the original (unsorted) data.
///
/// # Example
///
/// ```rust
/// use statslab_center::mode;
///
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0]).unwrap(), 1.0);
/// assert_eq!(mode(&[3.0, 2.0, 2.0, 3.0]).unwrap(), 3.0);
/// ```
pub fn mode(data: &[f64]) -> Result<f64> {
    Error::check_non_empty(data, "mode")?;
    let counts = tally(data);
    let best = counts.iter().map(|&(_, c)| c).max().unwrap_or(0);
    counts
        .into_iter()
        .find(|&(_, c)| c == best)
        .map(|(x, _)| x)
        .ok_or_else(|| Error::empty("mode"))
}

/// Every value tied for the highest frequency, in first-appearance order
///
/// Empty data yields an empty vector.
///
/// # Example
///
/// ```rust
/// use statslab_center::multimode;
///
/// assert_eq!(multimode(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
/// assert!(multimode(&[]).is_empty());
/// ```
pub fn multimode(data: &[f64]) -> Vec<f64> {
    let counts = tally(data);
    let best = counts.iter().map(|&(_, c)| c).max().unwrap_or(0);
    counts
        .into_iter()
        .filter(|&(_, c)| c == best)
        .map(|(x, _)| x)
        .collect()
}
