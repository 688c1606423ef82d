//! Core traits and parameter validation shared by every indicator.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and `f64`
//! so each indicator is written once. The `validate_*` functions implement the
//! fail-fast argument checks every indicator runs before any computation.
//!
//! # Example
//!
//! ```
//! use simple_ta::traits::{validate_positive, SeriesElement};
//!
//! fn mean_of_first<T: SeriesElement>(data: &[T], count: usize) -> simple_ta::Result<T> {
//!     validate_positive("count", count, "count must be positive")?;
//!
//!     let count_t = T::from_usize(count)?;
//!     let sum: T = data.iter().take(count).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / count_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! assert!((mean_of_first(&data, 3).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A numeric type usable as an element of a price series.
///
/// Extends `num_traits::Float` with the conversions and constants the
/// indicators need. Implemented for every type meeting the bounds, which in
/// practice means `f32` and `f64`.
///
/// The `Send + Sync` bounds let indicator calls run on any thread, which the
/// [`batch`](crate::batch) module relies on.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Converts a window or span length into the element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the value cannot be represented.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::InvalidArgument {
            name: "period",
            value,
            reason: "value not representable in the series element type",
        })
    }

    /// Returns the constant 2, used for the EMA smoothing factor `2 / (span + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Rejects a zero window, span or period.
///
/// `name` identifies the parameter and `reason` is the message the caller sees.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `value` is zero.
#[inline]
pub fn validate_positive(name: &'static str, value: usize, reason: &'static str) -> Result<()> {
    if value == 0 {
        tracing::debug!(argument = name, value, reason, "rejecting indicator argument");
        Err(Error::InvalidArgument {
            name,
            value,
            reason,
        })
    } else {
        Ok(())
    }
}

/// Validates the window of a rolling-window indicator.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` with reason "window must be positive" if
/// `window` is zero.
#[inline]
pub fn validate_window(window: usize) -> Result<()> {
    validate_positive("window", window, "window must be positive")
}

/// Checks that a caller-provided output buffer can hold `required` values.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` naming the buffer if it is too short.
#[inline]
pub fn validate_output_len(name: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        tracing::debug!(
            argument = name,
            actual,
            required,
            "rejecting undersized output buffer"
        );
        Err(Error::InvalidArgument {
            name,
            value: actual,
            reason: "output buffer shorter than input",
        })
    } else {
        Ok(())
    }
}
