//! Utility functions for working with data slices

use std::cmp::Ordering;

/// Total order on `f64` that sends NaN after every other value.
///
/// `-0.0` and `0.0` compare equal, so a stable sort keeps them in input order.
#[inline]
pub fn nan_last_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end. The input is never touched.
///
/// # Examples
///
/// ```rust
/// use statslab_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(nan_last_cmp);
    sorted
}

/// Whether `data` is already in non-decreasing order (NaN last)
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2)
        .all(|w| nan_last_cmp(&w[0], &w[1]) != Ordering::Greater)
}

/// Smallest value, ignoring NaN; NaN only when every value is NaN or `data` is empty
pub fn nan_min(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NAN, f64::min)
}

/// Largest value, ignoring NaN; NaN only when every value is NaN or `data` is empty
pub fn nan_max(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NAN, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_min_max() {
        let data = [f64::NAN, 3.0, -1.0, f64::NAN, 2.0];
        assert_eq!(nan_min(&data), -1.0);
        assert_eq!(nan_max(&data), 3.0);
        assert!(nan_min(&[f64::NAN, f64::NAN]).is_nan());
        assert!(nan_max(&[f64::NAN]).is_nan());
        assert!(nan_min(&[]).is_nan());
    }

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert_eq!(sorted(&data), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_duplicates() {
        let data = vec![3.0, 1.0, 3.0, 2.0, 1.0];
        assert_eq!(sorted(&data), vec![1.0, 1.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_with_infinity() {
        let data = vec![3.0, f64::INFINITY, 1.0, f64::NEG_INFINITY, 2.0];
        assert_eq!(
            sorted(&data),
            vec![f64::NEG_INFINITY, 1.0, 2.0, 3.0, f64::INFINITY]
        );
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1.0, 1.0, 2.0, f64::NAN]));
        assert!(!is_sorted(&[2.0, 1.0]));
        assert!(!is_sorted(&[f64::NAN, 1.0]));
    }
}
