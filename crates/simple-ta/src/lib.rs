//! simple-ta: moving average, RSI and MACD over numeric price series.
//!
//! Every indicator takes a slice of `f32` or `f64` values and returns a series
//! of the same length, with NaN wherever the indicator is not yet defined.
//! Inputs are never mutated.
//!
//! # Features
//!
//! - **Length-preserving**: output position `i` always corresponds to input position `i`
//! - **NaN-aware**: missing observations propagate through the rolling windows
//!   and roll back out once they leave them
//! - **Stable**: rolling sums are compensated, so long series do not drift
//! - **Generics**: works with both `f32` and `f64` data types
//!
//! # Quick Start
//!
//! ```
//! use simple_ta::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! // The first window - 1 positions are undefined
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10);
//! assert!((result[4] - 4.0).abs() < 1e-10);
//! ```
//!
//! # Available Indicators
//!
//! - [`indicators::sma()`]: Simple Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//! - [`indicators::rsi()`]: Relative Strength Index
//! - [`indicators::macd()`]: Moving Average Convergence Divergence
//!
//! # Error Handling
//!
//! A zero window or period is the only rejected input:
//!
//! ```
//! use simple_ta::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0];
//! assert!(matches!(sma(&prices, 0), Err(Error::InvalidArgument { .. })));
//!
//! // Series shorter than the window are fine; they are simply all NaN
//! let out = sma(&prices, 10).unwrap();
//! assert!(out.iter().all(|v| v.is_nan()));
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: `trace` on every indicator call and
//! `debug` when an argument is rejected or a batch is dispatched. Nothing is
//! printed unless the application installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod config;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use config::Indicator;
pub use error::{Error, Result};
pub use indicators::{ema, macd, rsi, sma, MacdOutput};
pub use traits::SeriesElement;
