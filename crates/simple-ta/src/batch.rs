//! Batch computation over many independent series.
//!
//! Indicator calls share no state, so a batch of series (one per symbol, say)
//! can be fanned out across threads without coordination. With the `parallel`
//! feature, batches at or above a threshold run on the Rayon pool; otherwise,
//! and always without the feature, they run sequentially.
//!
//! ```toml
//! [dependencies]
//! simple-ta = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use simple_ta::batch::BatchProcessor;
//! use simple_ta::config::Rsi;
//! use simple_ta::indicators::sma;
//!
//! let series = vec![
//!     vec![1.0_f64, 2.0, 3.0, 4.0, 5.0],
//!     vec![5.0, 4.0, 3.0, 2.0, 1.0],
//! ];
//!
//! let smas = BatchProcessor::new().process(&series, |s| sma(s, 3)).unwrap();
//! assert!((smas[1][2] - 4.0).abs() < 1e-10);
//!
//! let rsis = BatchProcessor::new().compute(&series, &Rsi::new(2)).unwrap();
//! assert_eq!(rsis[0][4], 100.0);
//! ```

use crate::config::Indicator;
use crate::error::Result;
use crate::traits::SeriesElement;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of series below which a batch is processed sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Applies one indicator to many series, optionally in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProcessor {
    /// Minimum number of series before the Rayon pool is used.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a batch processor with the default parallel threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Whether a batch of `count` series would be dispatched to the Rayon pool.
    #[must_use]
    pub const fn runs_parallel(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && count >= self.min_parallel_threshold
    }

    /// Applies `indicator_fn` to every series, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(feature = "parallel")]
    pub fn process<S, T, F, R>(&self, series: &[S], indicator_fn: F) -> Result<Vec<R>>
    where
        S: AsRef<[T]> + Sync,
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        let parallel = self.runs_parallel(series.len());
        tracing::debug!(series = series.len(), parallel, "processing indicator batch");

        if parallel {
            series
                .par_iter()
                .map(|s| indicator_fn(s.as_ref()))
                .collect::<Result<Vec<R>>>()
        } else {
            series.iter().map(|s| indicator_fn(s.as_ref())).collect()
        }
    }

    /// Applies `indicator_fn` to every series, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<S, T, F, R>(&self, series: &[S], indicator_fn: F) -> Result<Vec<R>>
    where
        S: AsRef<[T]>,
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        tracing::debug!(series = series.len(), parallel = false, "processing indicator batch");
        series.iter().map(|s| indicator_fn(s.as_ref())).collect()
    }

    /// Runs a configured indicator over every series.
    ///
    /// The parameters are validated once up front, so an invalid configuration
    /// fails without touching any series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the indicator's parameters are invalid.
    #[cfg(feature = "parallel")]
    pub fn compute<S, T, I>(&self, series: &[S], indicator: &I) -> Result<Vec<I::Output>>
    where
        S: AsRef<[T]> + Sync,
        T: SeriesElement,
        I: Indicator<T> + Sync,
        I::Output: Send,
    {
        indicator.validate()?;
        self.process(series, |s| indicator.compute(s))
    }

    /// Runs a configured indicator over every series.
    ///
    /// The parameters are validated once up front, so an invalid configuration
    /// fails without touching any series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the indicator's parameters are invalid.
    #[cfg(not(feature = "parallel"))]
    pub fn compute<S, T, I>(&self, series: &[S], indicator: &I) -> Result<Vec<I::Output>>
    where
        S: AsRef<[T]>,
        T: SeriesElement,
        I: Indicator<T>,
    {
        indicator.validate()?;
        self.process(series, |s| indicator.compute(s))
    }
}
