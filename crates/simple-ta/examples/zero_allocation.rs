//! Zero-Allocation Example
//!
//! Reuses one set of buffers across several batches of prices with the
//! `_into` variants.
//!
//! Run with: `cargo run --example zero_allocation`

#![allow(clippy::cast_precision_loss)]

use simple_ta::indicators::{macd_into, rsi_into, sma_into};
use simple_ta::utils::count_nan_prefix;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_size = 1000;

    println!("=== Zero-Allocation Pattern ===");
    println!();
    println!("Processing {data_size} data points with pre-allocated buffers");
    println!();

    // Pre-allocate all buffers once
    let mut sma_output = vec![0.0_f64; data_size];
    let mut rsi_output = vec![0.0_f64; data_size];
    let mut macd_line = vec![0.0_f64; data_size];
    let mut signal_line = vec![0.0_f64; data_size];
    let mut histogram = vec![0.0_f64; data_size];

    for batch in 0..3 {
        let prices: Vec<f64> = (0..data_size)
            .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0 + f64::from(batch) * 5.0)
            .collect();

        println!("Batch {}:", batch + 1);

        let sma_valid = sma_into(&prices, 20, &mut sma_output)?;
        let rsi_valid = rsi_into(&prices, 14, &mut rsi_output)?;
        macd_into(
            &prices,
            12,
            26,
            9,
            &mut macd_line,
            &mut signal_line,
            &mut histogram,
        )?;

        let last = data_size - 1;
        println!(
            "  SMA(20):      {:.4}  ({sma_valid} defined, {} warm-up)",
            sma_output[last],
            count_nan_prefix(&sma_output)
        );
        println!(
            "  RSI(14):      {:.2}  ({rsi_valid} defined, {} warm-up)",
            rsi_output[last],
            count_nan_prefix(&rsi_output)
        );
        println!(
            "  MACD:         {:.4} / {:.4} / {:.4}",
            macd_line[last], signal_line[last], histogram[last]
        );
        println!();
    }

    Ok(())
}
