//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! The MACD is a trend-following momentum indicator built from three series:
//!
//! - **MACD Line**: fast EMA minus slow EMA
//! - **Signal Line**: EMA of the MACD line
//! - **Histogram**: MACD line minus signal line
//!
//! # Formula
//!
//! ```text
//! MACD Line[i]   = EMA(P, fast)[i] - EMA(P, slow)[i]
//! Signal Line[i] = EMA(MACD Line, signal)[i]
//! Histogram[i]   = MACD Line[i] - Signal Line[i]
//! ```
//!
//! Every EMA here is the seeded recurrence of [`ema`](crate::indicators::ema()),
//! so all three outputs are defined from index 0 for finite input. No ordering
//! is imposed on `fast` and `slow`: swapping them negates the MACD line.
//!
//! # Example
//!
//! ```
//! use simple_ta::indicators::macd::macd;
//!
//! let data: Vec<f64> = (1..50).map(f64::from).collect();
//! let result = macd(&data, 12, 26, 9).unwrap();
//!
//! assert_eq!(result.macd_line.len(), 49);
//! assert_eq!(result.signal_line.len(), 49);
//! assert_eq!(result.histogram.len(), 49);
//! assert_eq!(result.macd_line[0], 0.0);
//! ```

use crate::error::Result;
use crate::indicators::ema::{ema_recurrence_into, span_alpha};
use crate::traits::{validate_output_len, validate_positive, SeriesElement};

/// Default fast EMA span.
pub const DEFAULT_MACD_FAST: usize = 12;
/// Default slow EMA span.
pub const DEFAULT_MACD_SLOW: usize = 26;
/// Default signal EMA span.
pub const DEFAULT_MACD_SIGNAL: usize = 9;

const PERIODS_REASON: &str = "periods must be positive";

/// The three MACD series, each as long as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T: SeriesElement> {
    /// Fast EMA minus slow EMA.
    pub macd_line: Vec<T>,

    /// EMA of the MACD line.
    pub signal_line: Vec<T>,

    /// MACD line minus signal line.
    pub histogram: Vec<T>,
}

impl<T: SeriesElement> MacdOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd_line.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }

    /// Splits the output into `(macd_line, signal_line, histogram)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.macd_line, self.signal_line, self.histogram)
    }
}

/// Returns the number of leading NaN values in the MACD outputs of finite input.
///
/// Always 0: every EMA involved seeds from its first observation.
#[inline]
#[must_use]
pub const fn macd_lookback(_fast: usize, _slow: usize, _signal: usize) -> usize {
    0
}

/// Computes the MACD line, signal line and histogram.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` ("periods must be positive") naming the
/// first of `fast`, `slow`, `signal` that is zero.
///
/// # Example
///
/// ```
/// use simple_ta::indicators::macd::macd;
///
/// let data: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i) * 0.5).collect();
/// let result = macd(&data, 12, 26, 9).unwrap();
///
/// // A steady uptrend keeps the fast EMA above the slow one
/// assert!(result.macd_line[59] > 0.0);
/// ```
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdOutput<T>> {
    validate_macd_periods(fast, slow, signal)?;
    tracing::trace!(len = data.len(), fast, slow, signal, "computing macd");

    let n = data.len();
    let mut output = MacdOutput {
        macd_line: vec![T::nan(); n],
        signal_line: vec![T::nan(); n],
        histogram: vec![T::nan(); n],
    };
    compute_macd_core(
        data,
        fast,
        slow,
        signal,
        &mut output.macd_line,
        &mut output.signal_line,
        &mut output.histogram,
    )?;

    Ok(output)
}

/// Computes MACD into pre-allocated output buffers.
///
/// Only the first `data.len()` positions of each buffer are written. The slow
/// EMA is staged in `histogram_output` before the histogram overwrites it, so
/// no scratch allocation is made. Returns the number of positions past the
/// lookback prefix, which for MACD is `data.len()`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if any period is zero or any buffer is
/// shorter than `data`.
///
/// # Example
///
/// ```
/// use simple_ta::indicators::macd::macd_into;
///
/// let data: Vec<f64> = (0..50).map(|i| 100.0 + f64::from(i) * 0.5).collect();
/// let mut macd_line = vec![0.0_f64; 50];
/// let mut signal_line = vec![0.0_f64; 50];
/// let mut histogram = vec![0.0_f64; 50];
///
/// let valid = macd_into(
///     &data, 12, 26, 9,
///     &mut macd_line, &mut signal_line, &mut histogram,
/// ).unwrap();
/// assert_eq!(valid, 50);
/// ```
#[must_use = "this returns a Result with the count of valid MACD values"]
pub fn macd_into<T: SeriesElement>(
    data: &[T],
    fast: usize,
    slow: usize,
    signal: usize,
    macd_output: &mut [T],
    signal_output: &mut [T],
    histogram_output: &mut [T],
) -> Result<usize> {
    validate_macd_periods(fast, slow, signal)?;
    let n = data.len();
    validate_output_len("macd_output", macd_output.len(), n)?;
    validate_output_len("signal_output", signal_output.len(), n)?;
    validate_output_len("histogram_output", histogram_output.len(), n)?;
    tracing::trace!(len = n, fast, slow, signal, "computing macd into buffers");

    compute_macd_core(
        data,
        fast,
        slow,
        signal,
        macd_output,
        signal_output,
        histogram_output,
    )?;

    Ok(n.saturating_sub(macd_lookback(fast, slow, signal)))
}

/// Validates MACD periods in `fast`, `slow`, `signal` order.
pub(crate) fn validate_macd_periods(fast: usize, slow: usize, signal: usize) -> Result<()> {
    validate_positive("fast", fast, PERIODS_REASON)?;
    validate_positive("slow", slow, PERIODS_REASON)?;
    validate_positive("signal", signal, PERIODS_REASON)?;
    Ok(())
}

/// Fills the three outputs. Assumes validated periods and buffers of at least
/// `data.len()` elements.
fn compute_macd_core<T: SeriesElement>(
    data: &[T],
    fast: usize,
    slow: usize,
    signal: usize,
    macd_line: &mut [T],
    signal_line: &mut [T],
    histogram: &mut [T],
) -> Result<()> {
    let n = data.len();
    let (macd_line, signal_line, histogram) =
        (&mut macd_line[..n], &mut signal_line[..n], &mut histogram[..n]);

    // Fast EMA into the MACD buffer, slow EMA staged in the histogram buffer.
    ema_recurrence_into(data, span_alpha(fast)?, macd_line);
    ema_recurrence_into(data, span_alpha(slow)?, histogram);
    for (line, &slow_ema) in macd_line.iter_mut().zip(histogram.iter()) {
        *line = *line - slow_ema;
    }

    ema_recurrence_into(macd_line, span_alpha(signal)?, signal_line);
    for ((hist, &line), &sig) in histogram.iter_mut().zip(macd_line.iter()).zip(signal_line.iter()) {
        *hist = line - sig;
    }

    Ok(())
}
