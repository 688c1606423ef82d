//! Basic Usage Example
//!
//! Computes the three indicators over a short series of closing prices and
//! prints them side by side.
//!
//! Run with: `cargo run --example basic_usage`

use simple_ta::prelude::*;

fn fmt(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.3}")
    }
}

fn main() -> Result<()> {
    let closes = [
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
        46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
    ];

    let ma = sma(&closes, 5)?;
    let strength = rsi(&closes, 14)?;
    let trend = Macd::default().fast(3).slow(6).signal(2).compute(&closes)?;

    println!("{:>3} {:>8} {:>8} {:>8} {:>8} {:>8}", "i", "close", "sma5", "rsi14", "macd", "hist");
    for i in 0..closes.len() {
        println!(
            "{i:>3} {:>8.2} {:>8} {:>8} {:>8} {:>8}",
            closes[i],
            fmt(ma[i]),
            fmt(strength[i]),
            fmt(trend.macd_line[i]),
            fmt(trend.histogram[i]),
        );
    }

    if let Err(err) = sma(&closes, 0) {
        println!();
        println!("rejected: {err}");
    }

    Ok(())
}
