//! Property-based tests for all indicators using proptest.
//!
//! These tests verify invariant properties that must hold for all valid inputs,
//! using randomly generated test data to find edge cases.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use simple_ta::indicators::{ema, macd, macd_into, rsi, rsi_into, sma, sma_into};
use simple_ta::utils::{approx_eq_relative, count_nan_prefix};

// ==================== Test Data Generators ====================

/// Generate a random price series (all positive values)
fn arb_price_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..=max_len)
}

/// Generate a price series with roughly one position in ten missing
fn arb_gappy_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![9 => (1.0..1000.0_f64).boxed(), 1 => Just(f64::NAN).boxed()],
        min_len..=max_len,
    )
}

fn same_bits(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

// ==================== SMA Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// SMA output length equals input length and the warm-up is window - 1
    #[test]
    fn prop_sma_length_and_prefix(data in arb_price_series(0, 100), window in 1usize..=20) {
        let out = sma(&data, window).unwrap();
        prop_assert_eq!(out.len(), data.len());
        prop_assert_eq!(count_nan_prefix(&out), (window - 1).min(data.len()));
    }

    /// SMA stays within the range of its window
    #[test]
    fn prop_sma_within_window_range(data in arb_price_series(1, 100), window in 1usize..=20) {
        let out = sma(&data, window).unwrap();
        for i in window.saturating_sub(1)..data.len() {
            let slice = &data[i + 1 - window..=i];
            let lo = slice.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = slice.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let slack = hi * 1e-12;
            prop_assert!(out[i] >= lo - slack && out[i] <= hi + slack);
        }
    }

    /// SMA agrees with a from-scratch mean of each window
    #[test]
    fn prop_sma_matches_direct_mean(data in arb_price_series(1, 200), window in 1usize..=30) {
        let out = sma(&data, window).unwrap();
        for i in window.saturating_sub(1)..data.len() {
            let direct = data[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            prop_assert!(approx_eq_relative(out[i], direct, 1e-10));
        }
    }

    /// A window containing NaN is undefined; one without NaN is defined
    #[test]
    fn prop_sma_nan_windows(data in arb_gappy_series(1, 100), window in 1usize..=10) {
        let out = sma(&data, window).unwrap();
        for (i, v) in out.iter().enumerate() {
            let full = i + 1 >= window && data[i + 1 - window..=i].iter().all(|x| !x.is_nan());
            prop_assert_eq!(!v.is_nan(), full);
        }
    }
}

// ==================== RSI Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// RSI is bounded to [0, 100] wherever it is defined
    #[test]
    fn prop_rsi_bounded(data in arb_price_series(2, 150), window in 1usize..=20) {
        let out = rsi(&data, window).unwrap();
        prop_assert_eq!(out.len(), data.len());
        for v in out.iter().filter(|v| !v.is_nan()) {
            prop_assert!((0.0..=100.0).contains(v));
        }
    }

    /// The first `window` positions are undefined
    #[test]
    fn prop_rsi_prefix(data in arb_price_series(0, 100), window in 1usize..=20) {
        let out = rsi(&data, window).unwrap();
        prop_assert!(out.iter().take(window).all(|v| v.is_nan()));
    }

    /// Scaling every price by a positive constant leaves RSI unchanged
    #[test]
    fn prop_rsi_scale_invariant(data in arb_price_series(20, 100), scale in 0.5..4.0_f64) {
        let scaled: Vec<f64> = data.iter().map(|x| x * scale).collect();
        let a = rsi(&data, 14).unwrap();
        let b = rsi(&scaled, 14).unwrap();
        for (x, y) in a.iter().zip(&b) {
            prop_assert!(x.is_nan() == y.is_nan());
            if !x.is_nan() {
                prop_assert!((x - y).abs() < 1e-6);
            }
        }
    }
}

// ==================== MACD Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// All three series are as long as the input and the histogram is line minus signal
    #[test]
    fn prop_macd_structure(
        data in arb_price_series(0, 150),
        fast in 1usize..=20,
        slow in 1usize..=40,
        signal in 1usize..=15,
    ) {
        let out = macd(&data, fast, slow, signal).unwrap();
        prop_assert_eq!(out.macd_line.len(), data.len());
        prop_assert_eq!(out.signal_line.len(), data.len());
        prop_assert_eq!(out.histogram.len(), data.len());

        for i in 0..data.len() {
            prop_assert_eq!(out.histogram[i], out.macd_line[i] - out.signal_line[i]);
        }
    }

    /// The MACD line is the difference of the two EMAs, so swapping spans negates it
    #[test]
    fn prop_macd_line_antisymmetric(data in arb_price_series(1, 100), fast in 1usize..=20, slow in 1usize..=40) {
        let ab = macd(&data, fast, slow, 9).unwrap();
        let ba = macd(&data, slow, fast, 9).unwrap();
        let fast_ema = ema(&data, fast).unwrap();
        let slow_ema = ema(&data, slow).unwrap();

        for i in 0..data.len() {
            prop_assert_eq!(ab.macd_line[i], -ba.macd_line[i]);
            prop_assert_eq!(ab.macd_line[i], fast_ema[i] - slow_ema[i]);
        }
    }
}

// ==================== Buffer Variant Equivalence ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_into_variants_match(data in arb_gappy_series(0, 120), window in 1usize..=20) {
        let mut buf = vec![0.0; data.len()];

        let _ = sma_into(&data, window, &mut buf).unwrap();
        prop_assert!(same_bits(&buf, &sma(&data, window).unwrap()));

        let _ = rsi_into(&data, window, &mut buf).unwrap();
        prop_assert!(same_bits(&buf, &rsi(&data, window).unwrap()));

        let mut signal = vec![0.0; data.len()];
        let mut hist = vec![0.0; data.len()];
        let _ = macd_into(&data, window, 26, 9, &mut buf, &mut signal, &mut hist).unwrap();
        let out = macd(&data, window, 26, 9).unwrap();
        prop_assert!(same_bits(&buf, &out.macd_line));
        prop_assert!(same_bits(&signal, &out.signal_line));
        prop_assert!(same_bits(&hist, &out.histogram));
    }

    /// Every indicator computed twice gives bit-identical output and leaves the input untouched
    #[test]
    fn prop_deterministic(data in arb_gappy_series(0, 120)) {
        let before = data.clone();
        prop_assert!(same_bits(&rsi(&data, 14).unwrap(), &rsi(&data, 14).unwrap()));
        prop_assert!(same_bits(&sma(&data, 5).unwrap(), &sma(&data, 5).unwrap()));
        prop_assert!(same_bits(&ema(&data, 9).unwrap(), &ema(&data, 9).unwrap()));

        let first = macd(&data, 12, 26, 9).unwrap();
        let second = macd(&data, 12, 26, 9).unwrap();
        prop_assert!(same_bits(&first.macd_line, &second.macd_line));
        prop_assert!(same_bits(&first.signal_line, &second.signal_line));
        prop_assert!(same_bits(&first.histogram, &second.histogram));

        prop_assert!(same_bits(&data, &before));
    }
}
