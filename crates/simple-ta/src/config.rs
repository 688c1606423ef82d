//! Parameter sets for the indicators.
//!
//! Each indicator has a small `Copy` struct holding its integer parameters
//! with the conventional defaults, so a host application can store, compare
//! and (with the `serde` feature) deserialize indicator settings alongside its
//! own configuration. All of them implement [`Indicator`].
//!
//! # Example
//!
//! ```
//! use simple_ta::config::{Indicator, Macd, Rsi};
//!
//! let prices: Vec<f64> = (0..40).map(|i| 100.0 + f64::from(i % 5)).collect();
//!
//! let rsi = Rsi::default().compute(&prices).unwrap();
//! assert_eq!(rsi.len(), prices.len());
//!
//! let macd = Macd::default().signal(5).compute(&prices).unwrap();
//! assert_eq!(macd.len(), prices.len());
//! ```

use crate::error::Result;
use crate::indicators::{
    macd, macd_lookback, rsi, rsi_lookback, sma, sma_lookback, MacdOutput, DEFAULT_MACD_FAST,
    DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW, DEFAULT_RSI_WINDOW,
};
use crate::indicators::macd::validate_macd_periods;
use crate::traits::{validate_window, SeriesElement};

/// An indicator together with its parameters.
pub trait Indicator<T: SeriesElement> {
    /// What one computation produces.
    type Output;

    /// Checks the parameters without computing anything.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a zero window or period.
    fn validate(&self) -> Result<()>;

    /// Runs the indicator over `data`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a zero window or period.
    fn compute(&self, data: &[T]) -> Result<Self::Output>;

    /// Number of leading NaN values in the output for finite input.
    fn lookback(&self) -> usize;
}

/// Simple Moving Average parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sma {
    /// Number of trailing observations averaged.
    pub window: usize,
}

impl Sma {
    /// Creates SMA parameters for the given window.
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self { window }
    }
}

impl<T: SeriesElement> Indicator<T> for Sma {
    type Output = Vec<T>;

    fn validate(&self) -> Result<()> {
        validate_window(self.window)
    }

    fn compute(&self, data: &[T]) -> Result<Vec<T>> {
        sma(data, self.window)
    }

    fn lookback(&self) -> usize {
        sma_lookback(self.window)
    }
}

/// Relative Strength Index parameters. Defaults to a 14-observation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rsi {
    /// Number of price changes averaged for gains and losses.
    pub window: usize,
}

impl Rsi {
    /// Creates RSI parameters for the given window.
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_WINDOW)
    }
}

impl<T: SeriesElement> Indicator<T> for Rsi {
    type Output = Vec<T>;

    fn validate(&self) -> Result<()> {
        validate_window(self.window)
    }

    fn compute(&self, data: &[T]) -> Result<Vec<T>> {
        rsi(data, self.window)
    }

    fn lookback(&self) -> usize {
        rsi_lookback(self.window)
    }
}

/// MACD parameters. Defaults to the conventional 12/26/9.
///
/// ```
/// use simple_ta::config::Macd;
///
/// let params = Macd::default().fast(8).slow(21);
/// assert_eq!((params.fast, params.slow, params.signal), (8, 21, 9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Macd {
    /// Span of the fast EMA.
    pub fast: usize,
    /// Span of the slow EMA.
    pub slow: usize,
    /// Span of the signal-line EMA.
    pub signal: usize,
}

impl Macd {
    /// Creates MACD parameters. No ordering between `fast` and `slow` is required.
    #[must_use]
    pub const fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// Sets the fast EMA span.
    #[must_use]
    pub const fn fast(mut self, fast: usize) -> Self {
        self.fast = fast;
        self
    }

    /// Sets the slow EMA span.
    #[must_use]
    pub const fn slow(mut self, slow: usize) -> Self {
        self.slow = slow;
        self
    }

    /// Sets the signal EMA span.
    #[must_use]
    pub const fn signal(mut self, signal: usize) -> Self {
        self.signal = signal;
        self
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(DEFAULT_MACD_FAST, DEFAULT_MACD_SLOW, DEFAULT_MACD_SIGNAL)
    }
}

impl<T: SeriesElement> Indicator<T> for Macd {
    type Output = MacdOutput<T>;

    fn validate(&self) -> Result<()> {
        validate_macd_periods(self.fast, self.slow, self.signal)
    }

    fn compute(&self, data: &[T]) -> Result<MacdOutput<T>> {
        macd(data, self.fast, self.slow, self.signal)
    }

    fn lookback(&self) -> usize {
        macd_lookback(self.fast, self.slow, self.signal)
    }
}
