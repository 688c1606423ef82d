//! Relative Strength Index (RSI) indicator.
//!
//! The RSI is a momentum oscillator comparing the average size of upward
//! moves with the average size of downward moves over a trailing window. It is
//! bounded to `[0, 100]`; readings above 70 are conventionally read as
//! overbought and below 30 as oversold.
//!
//! # Algorithm
//!
//! 1. `Change[i] = P[i] - P[i-1]`; `Change[0]` is undefined.
//! 2. `Gain[i] = max(Change[i], 0)`, `Loss[i] = max(-Change[i], 0)`. A
//!    change touching a NaN price counts as 0 in both; only `Change[0]`
//!    stays undefined.
//! 3. Average gain and loss are *simple* rolling means over `window`
//!    (not Wilder smoothing), using the same window rules as
//!    [`sma`](crate::indicators::sma()).
//! 4. `RS = AvgGain / AvgLoss`, `RSI = 100 - 100 / (1 + RS)`.
//!
//! Because `Change[0]` is undefined the first defined RSI value sits at index
//! `window`, one later than the SMA of the same window.
//!
//! # Boundary Conditions
//!
//! - **No losses in the window**: `RS = +inf`, RSI = 100
//! - **No gains in the window**: `RS = 0`, RSI = 0
//! - **No movement at all**: `RS = 0 / 0`, RSI is NaN
//!
//! A window of unchanged prices is deliberately left undefined rather than
//! mapped to 50.
//!
//! # Example
//!
//! ```
//! use simple_ta::indicators::rsi::rsi;
//!
//! let data: Vec<f64> = (1..=15).map(f64::from).collect();
//! let result = rsi(&data, 14).unwrap();
//!
//! assert!(result[13].is_nan());
//! assert_eq!(result[14], 100.0);
//! ```

use crate::error::Result;
use crate::kernels::rolling_mean::RollingMean;
use crate::traits::{validate_output_len, validate_window, SeriesElement};

/// Default RSI window.
pub const DEFAULT_RSI_WINDOW: usize = 14;

/// Returns the number of leading NaN values in the RSI output: `window`.
///
/// ```
/// use simple_ta::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(window: usize) -> usize {
    window
}

/// Computes the Relative Strength Index over simple rolling averages.
///
/// Returns a vector of the same length as the input. The first `window`
/// values are NaN, as is any position whose window contains no price movement
/// or whose window touches a NaN price.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` ("window must be positive") if `window` is zero.
///
/// # Example
///
/// ```
/// use simple_ta::indicators::rsi::rsi;
///
/// let data: Vec<f64> = vec![44.0, 44.5, 45.0, 44.5, 44.0, 44.5, 45.0];
/// let result = rsi(&data, 3).unwrap();
///
/// assert!(result[2].is_nan());
/// assert!(result[3] >= 0.0 && result[3] <= 100.0);
/// ```
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    validate_window(window)?;
    tracing::trace!(len = data.len(), window, "computing rsi");

    let mut result = vec![T::nan(); data.len()];
    compute_rsi_core(data, window, &mut result)?;
    Ok(result)
}

/// Computes the Relative Strength Index into a pre-allocated output buffer.
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
/// use simple_ta::indicators::rsi::rsi_into;
///
/// let data: Vec<f64> = vec![44.0, 44.5, 45.0, 44.5, 44.0, 44.5, 45.0];
/// let mut output = vec![0.0; 7];
/// let valid = rsi_into(&data, 3, &mut output).unwrap();
///
/// assert_eq!(valid, 4);
/// assert!(output[0].is_nan());
/// ```
#[must_use = "this returns a Result with the count of valid RSI values"]
pub fn rsi_into<T: SeriesElement>(data: &[T], window: usize, output: &mut [T]) -> Result<usize> {
    validate_window(window)?;
    validate_output_len("output", output.len(), data.len())?;
    tracing::trace!(len = data.len(), window, "computing rsi into buffer");

    compute_rsi_core(data, window, output)?;
    Ok(data.len().saturating_sub(rsi_lookback(window)))
}

/// Gain and loss contributed by the price change ending at `i`.
#[inline]
fn gain_loss<T: SeriesElement>(data: &[T], i: usize) -> (T, T) {
    if i == 0 {
        return (T::nan(), T::nan());
    }

    let change = data[i] - data[i - 1];
    if change > T::zero() {
        (change, T::zero())
    } else if change < T::zero() {
        (T::zero(), -change)
    } else {
        (T::zero(), T::zero())
    }
}

/// Single pass over `data`; gains and losses are recomputed on eviction
/// instead of being buffered.
fn compute_rsi_core<T: SeriesElement>(data: &[T], window: usize, output: &mut [T]) -> Result<()> {
    let hundred = T::from_usize(100)?;
    let mut avg_gain = RollingMean::new(window)?;
    let mut avg_loss = RollingMean::new(window)?;

    for i in 0..data.len() {
        if i >= window {
            let (gain, loss) = gain_loss(data, i - window);
            avg_gain.evict(gain);
            avg_loss.evict(loss);
        }

        let (gain, loss) = gain_loss(data, i);
        avg_gain.push(gain);
        avg_loss.push(loss);

        let rs = avg_gain.mean() / avg_loss.mean();
        output[i] = hundred - hundred / (T::one() + rs);
    }

    Ok(())
}
