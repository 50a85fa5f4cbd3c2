//! Averaging readings from a noisy sensor and estimating the chance of
//! freezing.
//!
//! Run with `cargo run --example sensor_average`.

use tracing_subscriber::EnvFilter;
use u_uncertain::UncertainValue;

fn main() -> u_uncertain::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let readings = [2.0, 2.2, 1.8, 2.1, 2.0, 2.3, 1.9, 2.0, 2.1, 2.0];

    // Sensor accuracy: ±2 with 95% probability.
    let nums = readings
        .iter()
        .map(|&v| UncertainValue::from_mean_and_interval(v, v - 2.0, v + 2.0, 0.95))
        .collect::<u_uncertain::Result<Vec<_>>>()?;

    let avg = nums.iter().sum::<UncertainValue>() / 10.0;

    let (lo, hi) = nums[0].interval(0.95)?;
    println!("first reading: {:.6}, 95% bounds: [{lo:.6} {hi:.6}]", nums[0]);
    let (lo, hi) = avg.interval(0.95)?;
    println!("average: {avg:.6}, 95% bounds: [{lo:.6} {hi:.6}]");

    // The spread of the readings themselves, for comparison.
    let spread = UncertainValue::from_samples(&readings)?;
    println!("sample spread: {spread:.6}");

    println!(
        "first reading freezing score: {:.6}",
        nums[0].probability_less_than(0.0)
    );
    println!(
        "average freezing score: {:.6}",
        avg.probability_less_than(0.0)
    );
    Ok(())
}
