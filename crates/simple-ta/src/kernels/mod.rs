//! Shared computation kernels.
//!
//! # Kernels
//!
//! - [`rolling_mean`]: compensated O(1)-per-step trailing-window mean, used by
//!   SMA and by the average gain/loss series of RSI
//!
//! The exponential recurrence shared by EMA and MACD lives with the EMA
//! indicator in [`crate::indicators::ema`].

pub mod rolling_mean;

pub use rolling_mean::{rolling_mean_into, RollingMean};
