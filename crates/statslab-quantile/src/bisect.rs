//! Insertion-point searches over sorted data
//!
//! Both functions assume `sorted` is in non-decreasing order and run in
//! `O(log n)`.

/// Leftmost index at which `x` could be inserted keeping `sorted` ordered.
///
/// Equivalently, the number of elements strictly less than `x`.
#[inline]
pub fn bisect_left(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|&v| v < x)
}

/// Rightmost index at which `x` could be inserted keeping `sorted` ordered.
///
/// Equivalently, the number of elements less than or equal to `x`.
#[inline]
pub fn bisect_right(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|&v| v <= x)
}

/// Number of elements equal to `x`
#[inline]
pub fn count_equal(sorted: &[f64], x: f64) -> usize {
    bisect_right(sorted, x) - bisect_left(sorted, x)
}
