//! Commonly used types and functions for glob importing.
//!
//! ```
//! use simple_ta::prelude::*;
//!
//! let prices: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i % 7)).collect();
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 14).unwrap();
//! let macd_result = Macd::default().compute(&prices).unwrap();
//!
//! assert_eq!(sma_result.len(), prices.len());
//! assert_eq!(rsi_result.len(), prices.len());
//! assert_eq!(macd_result.len(), prices.len());
//! ```

pub use crate::error::{Error, Result};
pub use crate::traits::SeriesElement;

pub use crate::indicators::{ema, macd, rsi, sma, MacdOutput};
pub use crate::indicators::{ema_into, macd_into, rsi_into, sma_into};
pub use crate::indicators::{ema_lookback, macd_lookback, rsi_lookback, sma_lookback};

pub use crate::batch::BatchProcessor;
pub use crate::config::{Indicator, Macd, Rsi, Sma};
