//! Changepoint Detection example using CUSUM and a bootstrap test.
//!
//! Run with: cargo run --example changepoint

use anofox_changepoint::changepoint::{
    bootstrap, changepoint, changepoint_detect, cusum, ChangepointConfig, ShiftLocator,
};
use anofox_changepoint::utils::{minmax, seeded_rng};

fn main() -> anofox_changepoint::Result<()> {
    env_logger::init();

    println!("=== Changepoint Detection Example ===\n");

    println!("The CUSUM range of a series is compared with the ranges of");
    println!("shuffled copies. Significant segments are split at their shift.\n");

    // 1. Clear Level Shift
    println!("--- Clear Level Shift ---");

    let mut series1: Vec<f64> = vec![10.0; 30];
    series1.extend(vec![50.0; 30]);
    series1.extend(vec![25.0; 30]);

    println!("Data: [10.0 × 30] + [50.0 × 30] + [25.0 × 30]");
    println!("Expected changepoints: 30, 60 (right-hand splits may report one earlier)\n");

    let config1 = ChangepointConfig::new(0.95).seed(42);
    let result1 = changepoint_detect(&series1, &config1)?;

    println!("Detected changepoints: {:?}", result1.changepoints);
    println!("Number of changepoints: {}", result1.n_changepoints);
    println!("Segments: {:?}", result1.segments(series1.len()));
    println!("Segment means: {:?}", result1.segment_means(&series1));
    println!("Work-list iterations: {}", result1.iterations_processed);

    // 2. Bootstrap Significance
    println!("\n--- Bootstrap Significance ---");

    let mut series2: Vec<f64> = (0..40).map(|i| 10.0 + (i as f64 * 1.7).sin()).collect();
    series2.extend((0..40).map(|i| 12.0 + (i as f64 * 1.7).sin()));

    let s = cusum(&series2)?;
    let (lo, hi) = minmax(&s)?;
    println!("CUSUM range: {:.2} (min {:.2}, max {:.2})", hi - lo, lo, hi);

    let mut rng = seeded_rng(Some(7));
    let iterations = 1000;
    let count = bootstrap(&series2, iterations, &mut rng)?;
    println!(
        "Shuffles with a smaller range: {} of {} ({:.1}%)",
        count,
        iterations,
        100.0 * count as f64 / iterations as f64
    );

    // 3. Effect of Confidence
    println!("\n--- Effect of Confidence ---");

    println!("{:<15} {:>20}", "Confidence", "Changepoints");
    println!("{:-<36}", "");

    for confidence in [0.5, 0.8, 0.9, 0.95, 0.99] {
        let config = ChangepointConfig::new(confidence).iterations(500).seed(1);
        let result = changepoint_detect(&series2, &config)?;
        println!("{:<15.2} {:>20?}", confidence, result.changepoints);
    }

    // 4. Shift Locators
    println!("\n--- Shift Locators ---");

    let mut upward: Vec<f64> = vec![0.0; 25];
    upward.extend(vec![5.0; 25]);

    for locator in [ShiftLocator::CusumAbsMax, ShiftLocator::CusumMax] {
        let config = ChangepointConfig::new(0.9).seed(3).locator(locator);
        let result = changepoint_detect(&upward, &config)?;
        println!("{:?}: {:?}", locator, result.changepoints);
    }

    // 5. Convenience Entry Point
    println!("\n--- Convenience Entry Point ---");

    let cps = changepoint(&series1, 0.9)?;
    println!("changepoint(series, 0.9) = {:?}", cps);

    Ok(())
}
