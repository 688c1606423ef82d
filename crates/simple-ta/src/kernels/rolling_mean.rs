//! Trailing-window arithmetic mean.
//!
//! [`RollingMean`] is the accumulator behind both [`sma`](crate::indicators::sma())
//! and the average gain/loss series of [`rsi`](crate::indicators::rsi()). It keeps
//! a compensated running sum so that each step costs O(1) regardless of the
//! window length.
//!
//! # Window rules
//!
//! The mean of a window of `W` positions is defined only when all `W`
//! positions hold a non-NaN value. On top of the plain `sum / W`:
//!
//! - a window whose values are all identical yields exactly that value;
//! - a window with no negative values never yields a negative mean, and a
//!   window of only negative values never yields a positive one (running-sum
//!   cancellation can otherwise leave a residue like `-1e-17`);
//! - `+inf` in the window yields `+inf`, `-inf` yields `-inf`, both yield NaN.
//!   Infinities are counted rather than summed, so one leaving the window
//!   does not poison later windows.
//!
//! # Example
//!
//! ```
//! use simple_ta::kernels::rolling_mean::RollingMean;
//!
//! let data = [1.0_f64, 2.0, 3.0, 4.0];
//! let mut acc = RollingMean::new(3).unwrap();
//!
//! for (i, &value) in data.iter().enumerate() {
//!     if i >= 3 {
//!         acc.evict(data[i - 3]);
//!     }
//!     acc.push(value);
//! }
//! assert!((acc.mean() - 3.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::traits::{validate_window, SeriesElement};

/// Accumulator for the arithmetic mean of the last `window` pushed values.
///
/// The caller owns the window contents: every value leaving the window must be
/// handed back through [`evict`](Self::evict) exactly once, before or after the
/// matching [`push`](Self::push).
#[derive(Debug, Clone, Copy)]
pub struct RollingMean<T> {
    window: usize,
    window_t: T,
    /// Non-NaN values currently in the window.
    observed: usize,
    /// Sign-negative values (including `-0.0` and `-inf`) in the window.
    negative: usize,
    pos_inf: usize,
    neg_inf: usize,
    sum: T,
    compensation: T,
    /// Length of the run of identical values ending at the latest push.
    same_run: usize,
    last: T,
}

impl<T: SeriesElement> RollingMean<T> {
    /// Creates an empty accumulator for the given window.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `window` is zero.
    pub fn new(window: usize) -> Result<Self> {
        validate_window(window)?;
        Ok(Self {
            window,
            window_t: T::from_usize(window)?,
            observed: 0,
            negative: 0,
            pos_inf: 0,
            neg_inf: 0,
            sum: T::zero(),
            compensation: T::zero(),
            same_run: 0,
            last: T::nan(),
        })
    }

    /// The window length this accumulator was created with.
    #[inline]
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Adds a value entering the window. NaN occupies a position but is not observed.
    #[inline]
    pub fn push(&mut self, value: T) {
        if value.is_nan() {
            return;
        }

        self.observed += 1;
        if value.is_sign_negative() {
            self.negative += 1;
        }

        if value == self.last {
            self.same_run += 1;
        } else {
            self.same_run = 1;
        }
        self.last = value;

        if value.is_infinite() {
            if value > T::zero() {
                self.pos_inf += 1;
            } else {
                self.neg_inf += 1;
            }
        } else {
            self.add_compensated(value);
        }
    }

    /// Removes a value leaving the window.
    #[inline]
    pub fn evict(&mut self, value: T) {
        if value.is_nan() {
            return;
        }

        self.observed -= 1;
        if value.is_sign_negative() {
            self.negative -= 1;
        }

        if value.is_infinite() {
            if value > T::zero() {
                self.pos_inf -= 1;
            } else {
                self.neg_inf -= 1;
            }
        } else {
            self.add_compensated(-value);
        }

        if self.observed == self.pos_inf + self.neg_inf {
            // No finite values left: drop the accumulated rounding residue.
            self.sum = T::zero();
            self.compensation = T::zero();
        }
    }

    /// Mean of the current window, or NaN if any position is missing or NaN.
    #[inline]
    #[must_use]
    pub fn mean(&self) -> T {
        if self.observed < self.window {
            return T::nan();
        }
        if self.same_run >= self.observed {
            return self.last;
        }
        match (self.pos_inf > 0, self.neg_inf > 0) {
            (true, true) => return T::nan(),
            (true, false) => return T::infinity(),
            (false, true) => return T::neg_infinity(),
            (false, false) => {}
        }

        let result = self.sum / self.window_t;
        if self.negative == 0 && result < T::zero() {
            T::zero()
        } else if self.negative == self.observed && result > T::zero() {
            T::zero()
        } else {
            result
        }
    }

    #[inline]
    fn add_compensated(&mut self, value: T) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }
}

/// Writes the trailing `window` mean of `data` into `output[..data.len()]`.
///
/// Positions before `window - 1` are NaN. The caller has already validated
/// `output.len() >= data.len()`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `window` is zero.
pub fn rolling_mean_into<T: SeriesElement>(
    data: &[T],
    window: usize,
    output: &mut [T],
) -> Result<()> {
    let mut acc = RollingMean::new(window)?;

    for (i, &value) in data.iter().enumerate() {
        if i >= window {
            acc.evict(data[i - window]);
        }
        acc.push(value);
        output[i] = acc.mean();
    }

    Ok(())
}
