//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA blends each new observation with the previous average using a fixed
//! smoothing factor derived from the span:
//!
//! ```text
//! alpha  = 2 / (span + 1)
//! EMA[0] = P[0]
//! EMA[i] = alpha * P[i] + (1 - alpha) * EMA[i-1]
//! ```
//!
//! The recurrence is seeded from the first observation instead of an SMA of the
//! first `span` values, so the output is defined at every position and there is
//! no warm-up prefix. This is the non-adjusted form: history is never
//! re-weighted as a finite geometric series.
//!
//! # NaN Handling
//!
//! - Leading NaNs produce NaN until the first non-NaN value seeds the recurrence.
//! - A NaN after seeding repeats the previous EMA, but the weight of that
//!   average keeps decaying by `1 - alpha` per position. The next observation
//!   is blended as `(w * EMA + alpha * P) / (w + alpha)` with `w = (1 - alpha)^(gap + 1)`.
//!
//! An observation equal to the current average leaves it untouched, so a
//! constant series reproduces its value exactly.
//!
//! # Example
//!
//! ```
//! use simple_ta::indicators::ema::ema;
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! let result = ema(&data, 3).unwrap(); // alpha = 0.5
//!
//! assert_eq!(result[0], 1.0);
//! assert!((result[1] - 1.5).abs() < 1e-12);
//! assert!((result[2] - 2.25).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::traits::{validate_output_len, validate_positive, SeriesElement};

/// Returns the number of leading NaN values in the EMA output of finite input.
///
/// Always 0: the recurrence seeds from the first observation.
#[inline]
#[must_use]
pub const fn ema_lookback(_span: usize) -> usize {
    0
}

/// Computes the Exponential Moving Average with smoothing `2 / (span + 1)`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` ("span must be positive") if `span` is zero.
///
/// # Example
///
/// ```
/// use simple_ta::indicators::ema::ema;
///
/// let flat = ema(&[5.0_f64; 4], 10).unwrap();
/// assert!(flat.iter().all(|&v| (v - 5.0).abs() < 1e-12));
/// ```
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], span: usize) -> Result<Vec<T>> {
    validate_positive("span", span, "span must be positive")?;
    tracing::trace!(len = data.len(), span, "computing ema");

    let alpha = span_alpha(span)?;
    let mut result = vec![T::nan(); data.len()];
    ema_recurrence_into(data, alpha, &mut result);
    Ok(result)
}

/// Computes the EMA into a pre-allocated output buffer.
///
/// Only `output[..data.len()]` is written. Returns the number of positions
/// past the lookback prefix, which for the EMA is `data.len()`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `span` is zero or `output` is shorter
/// than `data`.
#[must_use = "this returns a Result with the count of valid EMA values"]
pub fn ema_into<T: SeriesElement>(data: &[T], span: usize, output: &mut [T]) -> Result<usize> {
    validate_positive("span", span, "span must be positive")?;
    validate_output_len("output", output.len(), data.len())?;
    tracing::trace!(len = data.len(), span, "computing ema into buffer");

    let alpha = span_alpha(span)?;
    ema_recurrence_into(data, alpha, output);
    Ok(data.len())
}

/// Smoothing factor for a span: `2 / (span + 1)`.
pub(crate) fn span_alpha<T: SeriesElement>(span: usize) -> Result<T> {
    Ok(T::two() / T::from_usize(span.saturating_add(1))?)
}

/// Applies the seeded EMA recurrence to `data`, writing `output[..data.len()]`.
///
/// Every step is normalised by the total weight, which is exactly the plain
/// recurrence when there are no gaps.
///
/// Assumes `output.len() >= data.len()` and `0 < alpha <= 1`.
pub(crate) fn ema_recurrence_into<T: SeriesElement>(data: &[T], alpha: T, output: &mut [T]) {
    let one_minus_alpha = T::one() - alpha;
    let mut prev = T::nan();
    let mut old_weight = T::one();

    for (out, &value) in output.iter_mut().zip(data) {
        if prev.is_nan() {
            // Not seeded yet, or reset by an undefined blend such as inf - inf.
            prev = value;
            *out = prev;
            continue;
        }

        old_weight = old_weight * one_minus_alpha;
        if !value.is_nan() {
            if value != prev {
                prev = (old_weight * prev + alpha * value) / (old_weight + alpha);
            }
            old_weight = T::one();
        }
        *out = prev;
    }
}
