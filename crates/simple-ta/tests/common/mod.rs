//! Shared helpers for the integration tests.

#![allow(clippy::cast_precision_loss)]

/// Fourteen-period RSI textbook series (20 closing prices).
#[allow(dead_code)]
pub const CLOSES: [f64; 20] = [
    44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
    46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
];

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for values built from many accumulated operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Deterministic synthetic price series with trend and oscillation.
#[allow(dead_code)]
pub fn generate_series(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            100.0 + 0.05 * t + 3.0 * (t * 0.3).sin() + 1.5 * (t * 0.07).cos()
        })
        .collect()
}

/// Verify that exactly the first `expected_nan_count` values are NaN.
#[allow(dead_code)]
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| v.is_nan() == (i < expected_nan_count))
}

/// Naive trailing-window mean, recomputed from scratch at every position.
#[allow(dead_code)]
pub fn naive_sma(data: &[f64], window: usize) -> Vec<f64> {
    (0..data.len())
        .map(|i| {
            if i + 1 < window {
                f64::NAN
            } else {
                data[i + 1 - window..=i].iter().sum::<f64>() / window as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_nan_prefix() {
        let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, 3.0];
        assert!(verify_nan_prefix(&data, 2));
        assert!(!verify_nan_prefix(&data, 3));
        assert!(!verify_nan_prefix(&[f64::NAN, 1.0, f64::NAN], 1));
    }
}
