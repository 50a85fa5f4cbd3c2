//! Area of a rectangle whose sides are only known within tolerances.
//!
//! Run with `cargo run --example rectangle_area`.

use tracing_subscriber::EnvFilter;
use u_uncertain::UncertainValue;

fn report(name: &str, v: UncertainValue, probability: f64) -> u_uncertain::Result<()> {
    let (lo, hi) = v.interval(probability)?;
    println!(
        "{name}: {v:.6}, {:.0}% bounds: [{lo:.6} {hi:.6}]",
        probability * 100.0
    );
    Ok(())
}

fn main() -> u_uncertain::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 10 ± 2 with 90% probability
    let x1 = UncertainValue::from_mean_and_interval(10.0, 8.0, 12.0, 0.9)?;
    // 10 ± 0.5 with certainty
    let x2 = UncertainValue::from_mean_and_interval(10.0, 9.5, 10.5, 1.0)?;
    let y = UncertainValue::exact(5.0);

    let x = x1 + x2;
    let area = x * y;

    report("x1", x1, 0.95)?;
    report("x2", x2, 0.95)?;
    report("x", x, 0.95)?;
    report("y", y, 0.95)?;
    report("area", area, 0.95)?;
    report("area", area, 0.99)?;
    Ok(())
}
