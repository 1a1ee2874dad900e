//! Assertion utilities for testing.
//!
//! This module provides helper functions for floating-point comparisons.

use ndarray::ArrayView2;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two arrays are element-wise identical, treating NaN as equal to NaN.
pub fn assert_arrays_identical(actual: ArrayView2<f64>, expected: ArrayView2<f64>) {
    assert_eq!(actual.dim(), expected.dim(), "Array shapes differ");
    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        assert!(
            a == e || (a.is_nan() && e.is_nan()),
            "Arrays differ at {:?}: actual = {}, expected = {}",
            idx,
            a,
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0 + 1e-12, None);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, None);
    }

    #[test]
    fn test_nan_matches_nan() {
        let a = array![[1.0, f64::NAN]];
        assert_arrays_identical(a.view(), a.view());
    }
}
