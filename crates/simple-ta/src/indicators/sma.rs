//! Simple Moving Average (SMA) indicator.
//!
//! The SMA smooths a price series by replacing each point with the arithmetic
//! mean of the trailing `window` observations.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (P[i-window+1] + ... + P[i]) / window      for i >= window - 1
//! SMA[i] = NaN                                        for i <  window - 1
//! ```
//!
//! The rolling sum is maintained by [`RollingMean`](crate::kernels::RollingMean),
//! which documents how NaN, infinities and identical windows are treated.
//!
//! # Example
//!
//! ```
//! use simple_ta::indicators::sma::sma;
//!
//! let data: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10);
//! assert!((result[4] - 4.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::kernels::rolling_mean::rolling_mean_into;
use crate::traits::{validate_output_len, validate_window, SeriesElement};

/// Returns the number of leading NaN values in the SMA output: `window - 1`.
///
/// ```
/// use simple_ta::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(3), 2);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(window: usize) -> usize {
    window.saturating_sub(1)
}

/// Computes the Simple Moving Average of a data series.
///
/// Returns a vector of the same length as the input whose first `window - 1`
/// values are NaN. A series shorter than the window is not an error; every
/// output is then NaN.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` ("window must be positive") if `window` is zero.
///
/// # Example
///
/// ```
/// use simple_ta::indicators::sma::sma;
///
/// let single = sma(&[42.0_f64], 1).unwrap();
/// assert_eq!(single, vec![42.0]);
///
/// let short = sma(&[1.0_f64, 2.0], 5).unwrap();
/// assert!(short.iter().all(|v| v.is_nan()));
/// ```
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    validate_window(window)?;
    tracing::trace!(len = data.len(), window, "computing sma");

    let mut result = vec![T::nan(); data.len()];
    rolling_mean_into(data, window, &mut result)?;
    Ok(result)
}

/// Computes the Simple Moving Average into a pre-allocated output buffer.
///
/// Only `output[..data.len()]` is written. Returns the number of positions
/// past the lookback prefix.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `window` is zero or `output` is shorter
/// than `data`.
///
/// # Example
///
/// ```
/// use simple_ta::indicators::sma::sma_into;
///
/// let data: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0; 5];
/// let valid = sma_into(&data, 3, &mut output).unwrap();
///
/// assert_eq!(valid, 3);
/// assert!(output[0].is_nan());
/// assert!((output[2] - 2.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the count of valid SMA values"]
pub fn sma_into<T: SeriesElement>(data: &[T], window: usize, output: &mut [T]) -> Result<usize> {
    validate_window(window)?;
    validate_output_len("output", output.len(), data.len())?;
    tracing::trace!(len = data.len(), window, "computing sma into buffer");

    rolling_mean_into(data, window, output)?;
    Ok(data.len().saturating_sub(sma_lookback(window)))
}
