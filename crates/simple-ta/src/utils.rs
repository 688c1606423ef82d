//! Helpers for inspecting indicator output.
//!
//! Indicator series mark undefined positions with NaN, so plain `==` is of
//! little use when checking results. The comparisons here treat two NaNs as
//! equal and two infinities of the same sign as equal.
//!
//! ```
//! use simple_ta::indicators::rsi;
//! use simple_ta::utils::{count_nan_prefix, last_valid};
//!
//! let prices: Vec<f64> = (1..=15).map(f64::from).collect();
//! let out = rsi(&prices, 14).unwrap();
//!
//! assert_eq!(count_nan_prefix(&out), 14);
//! assert_eq!(last_valid(&out), Some(100.0));
//! ```

use crate::traits::SeriesElement;

/// Absolute tolerance for comparisons of values computed in `f64`.
pub const EPSILON: f64 = 1e-10;

/// Tolerance for values that went through long accumulations or `f32`.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Whether `a` and `b` differ by less than `tolerance`.
///
/// Two NaNs compare equal, as do two infinities of the same sign.
///
/// ```
/// use simple_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < tolerance
}

/// Like [`approx_eq`], but `tolerance` is relative to the larger magnitude.
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() || b.is_nan() || a.is_infinite() || b.is_infinite() {
        return approx_eq(a, b, tolerance);
    }
    let scale = a.abs().max(b.abs());
    if scale == T::zero() {
        return true;
    }
    (a - b).abs() / scale < tolerance
}

/// Whether two series have the same length and agree element-wise under [`approx_eq`].
#[must_use]
pub fn series_approx_eq<T: SeriesElement>(a: &[T], b: &[T], tolerance: T) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq(x, y, tolerance))
}

/// Number of NaN values anywhere in `data`.
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Number of leading NaN values, i.e. the observed warm-up of an indicator.
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// The most recent non-NaN value, if any.
#[inline]
#[must_use]
pub fn last_valid<T: SeriesElement>(data: &[T]) -> Option<T> {
    data.iter().rev().copied().find(|x| !x.is_nan())
}
