//! End-to-end scenarios through the public API.

use u_uncertain::config::SamplingMode;
use u_uncertain::monte_carlo::probability_approx_equal_with;
use u_uncertain::random::create_rng;
use u_uncertain::{MonteCarlo, MonteCarloConfig, UncertainError, UncertainValue};

fn uv(mean: f64, sd: f64) -> UncertainValue {
    UncertainValue::from_mean_and_std_dev(mean, sd).unwrap()
}

#[test]
fn rectangle_area_from_uncertain_sides() {
    let x1 = UncertainValue::from_mean_and_interval(10.0, 8.0, 12.0, 0.9).unwrap();
    let x2 = UncertainValue::from_mean_and_interval(10.0, 9.5, 10.5, 1.0).unwrap();
    let y = uv(5.0, 0.0);

    assert!((x1.std_dev() - 1.216).abs() < 1e-3);
    assert_eq!(x2.std_dev(), 0.0);

    let x = x1.sum(x2);
    let area = x.product(y);
    assert_eq!(area.mean(), 100.0);
    assert!((area.std_dev() - 5.0 * x1.std_dev()).abs() < 1e-12);

    let (lo95, hi95) = area.interval(0.95).unwrap();
    let (lo99, hi99) = area.interval(0.99).unwrap();
    assert!(lo99 < lo95 && hi95 < hi99);
}

#[test]
fn sensor_average_and_freezing_probability() {
    let readings = [2.0, 2.2, 1.8, 2.1, 2.0, 2.3, 1.9, 2.0, 2.1, 2.0];
    let nums: Vec<UncertainValue> = readings
        .iter()
        .map(|&v| UncertainValue::from_mean_and_interval(v, v - 2.0, v + 2.0, 0.95).unwrap())
        .collect();

    let sum: UncertainValue = nums.iter().sum();
    let avg = sum.quotient(uv(10.0, 0.0));

    assert!((avg.mean() - 2.04).abs() < 1e-12);
    // σ of one reading ≈ 1.0204; the average shrinks it by √10.
    assert!((avg.std_dev() - nums[0].std_dev() / 10f64.sqrt()).abs() < 1e-12);

    let single = nums[0].probability_less_than(0.0);
    let averaged = avg.probability_less_than(0.0);
    assert!(averaged < single);
    assert!(single > 0.0 && single < 0.5);
}

#[test]
fn dew_point_and_condensation() {
    let temperature = UncertainValue::from_mean_and_interval(22.0, 20.0, 24.0, 0.99).unwrap();
    let humidity = UncertainValue::from_mean_and_interval(55.0, 45.0, 65.0, 0.90).unwrap();
    let surface = UncertainValue::from_mean_and_interval(16.0, 14.0, 18.0, 0.99).unwrap();

    let deficit = (UncertainValue::exact(100.0) - humidity) / UncertainValue::exact(5.0);
    let dew_point = temperature - deficit;
    assert!((dew_point.mean() - 13.0).abs() < 1e-12);

    let expected_sd = temperature.std_dev().hypot(humidity.std_dev() / 5.0);
    assert!((dew_point.std_dev() - expected_sd).abs() < 1e-12);

    let mut rng = create_rng(2024);
    let est = probability_approx_equal_with(
        dew_point,
        surface,
        1.0,
        10_000,
        SamplingMode::UniformWindow,
        &mut rng,
    )
    .unwrap();
    assert!(est.probability < 0.5);
}

#[test]
fn quotient_by_zero_mean_is_infinitely_uncertain() {
    let q = uv(5.0, 1.0).quotient(uv(0.0, 0.1));
    assert!(q.mean().is_nan());
    assert_eq!(q.std_dev(), f64::INFINITY);
    assert_eq!(
        uv(5.0, 1.0).checked_quotient(uv(0.0, 0.1)),
        Err(UncertainError::DivisionByZero)
    );
}

#[test]
fn exact_product() {
    let p = uv(10.0, 0.0).product(uv(5.0, 0.0));
    assert_eq!(p.mean(), 50.0);
    assert_eq!(p.std_dev(), 0.0);
}

#[test]
fn monte_carlo_wide_tolerance() {
    let a = uv(0.0, 1.0);
    let p = a.probability_approx_equal(uv(0.0, 1.0), 10.0, 100_000).unwrap();
    assert!(p >= 0.99);

    let mut mc = MonteCarlo::new(
        MonteCarloConfig::default()
            .with_seed(3)
            .with_samples(100_000)
            .with_mode(SamplingMode::Gaussian),
    );
    assert!(mc.probability_approx_equal(a, a, 10.0).unwrap() >= 0.99);
}

#[test]
fn repeated_operand_is_not_tracked() {
    // a + a treats the operands as independent: σ·√2, not 2σ.
    let a = uv(1.0, 1.0);
    let doubled = a + a;
    assert!((doubled.std_dev() - 2f64.sqrt()).abs() < 1e-12);
    assert_eq!(a.scale(2.0).std_dev(), 2.0);
}

#[test]
fn invalid_construction_is_reported() {
    assert!(matches!(
        UncertainValue::from_mean_and_std_dev(0.0, -1.0),
        Err(UncertainError::InvalidArgument(_))
    ));
    assert!(matches!(
        UncertainValue::from_mean_and_interval(0.0, -1.0, 1.0, 0.0),
        Err(UncertainError::InvalidArgument(_))
    ));
}
