//! Dew point from temperature and relative humidity, then the chance of
//! condensation on a surface of known temperature.
//!
//! Run with `cargo run --example dew_point`. Set `RUST_LOG=debug` to see
//! the Monte Carlo summary.

use tracing_subscriber::EnvFilter;
use u_uncertain::{MonteCarlo, MonteCarloConfig, UncertainValue};

fn main() -> u_uncertain::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let temperature = UncertainValue::from_mean_and_interval(22.0, 20.0, 24.0, 0.99)?;
    let humidity = UncertainValue::from_mean_and_interval(55.0, 45.0, 65.0, 0.90)?;
    let surface = UncertainValue::from_mean_and_interval(16.0, 14.0, 18.0, 0.99)?;

    // Simple approximation: dp = T − (100 − RH) / 5
    let deficit = (UncertainValue::exact(100.0) - humidity) / UncertainValue::exact(5.0);
    let dew_point = temperature - deficit;

    for (name, v) in [("temperature", temperature), ("humidity", humidity)] {
        let (lo, hi) = v.interval(0.95)?;
        println!("{name}: {v:.6}, 95% bounds: [{lo:.6} {hi:.6}]");
    }
    for p in [0.90, 0.95, 0.99] {
        let (lo, hi) = dew_point.interval(p)?;
        println!(
            "dew point: {dew_point:.6}, {:.0}% bounds: [{lo:.6} {hi:.6}]",
            p * 100.0
        );
    }
    let (lo, hi) = surface.interval(0.95)?;
    println!("surface temperature: {surface:.6}, 95% bounds: [{lo:.6} {hi:.6}]");

    let mut mc = MonteCarlo::new(MonteCarloConfig::default().with_samples(10_000));
    let est = mc.estimate_approx_equal(dew_point, surface, 1.0)?;
    println!(
        "probability of condensation (1 degree tolerance): {:.6} (± {:.6})",
        est.probability,
        est.standard_error()
    );
    Ok(())
}
