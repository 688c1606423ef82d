//! Technical analysis indicators.
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Length-preserving**: every output is exactly as long as the input,
//!   including the empty input
//! - **NaN-aware**: positions without enough history are NaN
//! - **Fail-fast**: a zero window or period is rejected before any computation
//!
//! # Indicators
//!
//! - [`sma`] - Simple Moving Average over a trailing window
//! - [`ema`] - Exponential Moving Average, seeded from the first observation
//! - [`rsi`] - Relative Strength Index over simple rolling gain/loss averages
//! - [`macd`] - MACD line, signal line and histogram
//!
//! Each has an `_into` variant writing into caller-provided buffers and a
//! `_lookback` function giving the length of the NaN prefix.
//!
//! # Example
//!
//! ```
//! use simple_ta::indicators::{macd, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! let macd_result = macd(&prices, 3, 6, 2).unwrap();
//!
//! assert_eq!(sma_result.len(), prices.len());
//! assert_eq!(rsi_result.len(), prices.len());
//! assert_eq!(macd_result.len(), prices.len());
//! ```

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::{ema, ema_into, ema_lookback};
pub use macd::{
    macd, macd_into, macd_lookback, MacdOutput, DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL,
    DEFAULT_MACD_SLOW,
};
pub use rsi::{rsi, rsi_into, rsi_lookback, DEFAULT_RSI_WINDOW};
pub use sma::{sma, sma_into, sma_lookback};
