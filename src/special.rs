//! Special mathematical functions.
//!
//! The error function family and the normal quantities derived from it.
//! Everything here is pure Rust; accuracy targets are close to double
//! precision so that quantile round-trips hold to ~1e-12.

use crate::config::SolverConfig;
use crate::error::{Result, UncertainError};

/// 2/√π, the derivative scale of erf.
const FRAC_2_SQRT_PI: f64 = std::f64::consts::FRAC_2_SQRT_PI;

/// ln Γ(1/2) = ln √π.
const LN_GAMMA_HALF: f64 = 0.572_364_942_924_700_1;

/// Largest Newton step in `erf_inv` still attributable to rounding noise in
/// the residual, relative to `max(1, |x|)`.
const ROUNDING_STEP: f64 = 1e-10;

/// Iteration cap for the series and continued fraction expansions.
const EXPANSION_MAX_ITER: usize = 300;

// ============================================================================
// Incomplete Gamma Expansions
// ============================================================================

/// Series expansion for the regularized lower incomplete gamma.
fn gamma_series(a: f64, x: f64, ln_gamma_a: f64) -> f64 {
    let mut term = 1.0 / a;
    let mut sum = term;
    let mut ap = a;
    for _ in 0..EXPANSION_MAX_ITER {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * f64::EPSILON {
            break;
        }
    }
    sum * (-x + a * x.ln() - ln_gamma_a).exp()
}

/// Modified Lentz continued fraction for Q(a, x).
fn gamma_cf(a: f64, x: f64, ln_gamma_a: f64) -> f64 {
    const TINY: f64 = 1e-300;
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=EXPANSION_MAX_ITER {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < f64::EPSILON {
            break;
        }
    }
    h * (-x + a * x.ln() - ln_gamma_a).exp()
}

// ============================================================================
// Error Function
// ============================================================================

/// Error function erf(x).
///
/// # Definition
/// ```text
/// erf(x) = (2/√π) ∫₀ˣ exp(-t²) dt
/// ```
///
/// # Algorithm
/// Uses the identity `erf(x) = P(1/2, x²)` for `x ≥ 0` together with odd
/// symmetry. Near-double-precision accuracy.
///
/// # Examples
/// ```
/// use u_uncertain::special::erf;
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-12);
/// assert_eq!(erf(f64::INFINITY), 1.0);
/// ```
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.abs() < 1e-10 {
        // erf(x) = (2/√π)(x − x³/3 + …); the cubic term is below ulp here.
        return FRAC_2_SQRT_PI * x;
    }
    let sign = if x > 0.0 { 1.0 } else { -1.0 };
    sign * lower_gamma_half(x * x)
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// Computed directly from the upper incomplete gamma function for `x > 0`,
/// so `erfc(5.0)` keeps full relative precision.
///
/// # Examples
/// ```
/// use u_uncertain::special::erfc;
/// assert!((erfc(0.0) - 1.0).abs() < 1e-15);
/// assert!((erfc(3.0) - 2.209049699858544e-5).abs() < 1e-16);
/// ```
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 1.0 + lower_gamma_half(x * x);
    }
    upper_gamma_half(x * x)
}

/// P(1/2, s) with the exact ln Γ(1/2).
fn lower_gamma_half(s: f64) -> f64 {
    if s <= 0.0 {
        return 0.0;
    }
    if s == f64::INFINITY {
        return 1.0;
    }
    if s < 1.5 {
        gamma_series(0.5, s, LN_GAMMA_HALF)
    } else {
        1.0 - gamma_cf(0.5, s, LN_GAMMA_HALF)
    }
}

/// Q(1/2, s) with the exact ln Γ(1/2).
fn upper_gamma_half(s: f64) -> f64 {
    if s <= 0.0 {
        return 1.0;
    }
    if s == f64::INFINITY {
        return 0.0;
    }
    if s < 1.5 {
        1.0 - gamma_series(0.5, s, LN_GAMMA_HALF)
    } else {
        gamma_cf(0.5, s, LN_GAMMA_HALF)
    }
}

// ============================================================================
// Inverse Error Function
// ============================================================================

/// Inverse error function: solves `erf(x) = y` for `x`.
///
/// Uses the default [`SolverConfig`] (100 iterations, tolerance 1e-15).
///
/// # Errors
/// - [`UncertainError::InvalidArgument`] if `y` is NaN.
/// - [`UncertainError::NumericalNonConvergence`] if the iteration does not
///   settle; this is the outcome for every `|y| ≥ 1`.
///
/// # Examples
/// ```
/// use u_uncertain::special::{erf, erf_inv};
/// let x = erf_inv(0.5).unwrap();
/// assert!((x - 0.4769362762044699).abs() < 1e-12);
/// assert!((erf(x) - 0.5).abs() < 1e-14);
/// assert!(erf_inv(1.0).is_err());
/// ```
pub fn erf_inv(y: f64) -> Result<f64> {
    erf_inv_with(y, &SolverConfig::default())
}

/// Inverse error function with explicit solver settings.
///
/// # Algorithm
/// Newton's method seeded at `x₀ = (√π/2)·|y|`, which lies left of the
/// root on the concave branch of erf, so iterates approach monotonically.
/// For `|y| ≥ 0.5` the residual is written as `(1 − |y|) − erfc(x)` to
/// avoid cancellation near `|y| = 1`. The step test is scaled by
/// `max(1, |x|)`. Once a step no longer shrinks and is already at rounding
/// level, the iterate is accepted: the residual cannot resolve it further.
pub fn erf_inv_with(y: f64, config: &SolverConfig) -> Result<f64> {
    if y.is_nan() {
        return Err(UncertainError::invalid("erf_inv argument is NaN"));
    }
    if y == 0.0 {
        return Ok(0.0);
    }

    let sign = y.signum();
    let target = y.abs();
    let tail = 1.0 - target;
    let use_tail = target >= 0.5;

    let mut x = 0.5 * std::f64::consts::PI.sqrt() * target;
    let mut prev_step = f64::INFINITY;
    for _ in 0..config.max_iterations {
        let residual = if use_tail {
            tail - erfc(x)
        } else {
            erf(x) - target
        };
        if residual == 0.0 {
            return Ok(sign * x);
        }
        let slope = FRAC_2_SQRT_PI * (-x * x).exp();
        let step = residual / slope;
        if !step.is_finite() {
            break;
        }
        let scale = x.abs().max(1.0);
        // Quadratic convergence shrinks every step until rounding noise in
        // the residual takes over; a step that stops shrinking is noise.
        let stalled = step.abs() >= prev_step.abs() && step.abs() < ROUNDING_STEP * scale;
        x -= step;
        if step.abs() < config.tolerance * scale || stalled {
            return Ok(sign * x);
        }
        prev_step = step;
    }

    tracing::warn!(
        y,
        iterations = config.max_iterations,
        "erf_inv failed to converge"
    );
    Err(UncertainError::NumericalNonConvergence {
        input: y,
        iterations: config.max_iterations,
    })
}

// ============================================================================
// Normal Distribution Helpers
// ============================================================================

/// Standard normal CDF Φ(x) = P(Z ≤ x) for Z ~ N(0,1).
///
/// Computed as `erfc(−x/√2) / 2`, accurate in both tails.
///
/// # Examples
/// ```
/// use u_uncertain::special::standard_normal_cdf;
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((standard_normal_cdf(1.96) - 0.9750021048517795).abs() < 1e-12);
/// ```
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Two-sided z-score: the half-width, in standard deviations, of the
/// central interval that encloses `probability` of a normal distribution.
///
/// `z = √2 · erf⁻¹(probability)`, so `P(|Z| ≤ z) = probability`.
///
/// # Returns
/// - `+∞` for `probability == 1.0`.
///
/// # Errors
/// [`UncertainError::InvalidArgument`] unless `probability ∈ (0, 1]`.
///
/// # Examples
/// ```
/// use u_uncertain::special::two_sided_z;
/// assert!((two_sided_z(0.95).unwrap() - 1.959963984540054).abs() < 1e-10);
/// assert_eq!(two_sided_z(1.0).unwrap(), f64::INFINITY);
/// assert!(two_sided_z(0.0).is_err());
/// ```
pub fn two_sided_z(probability: f64) -> Result<f64> {
    if probability.is_nan() || probability <= 0.0 || probability > 1.0 {
        return Err(UncertainError::invalid(format!(
            "probability must be in (0, 1], got {probability}"
        )));
    }
    if probability == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok(std::f64::consts::SQRT_2 * erf_inv(probability)?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn erf_odd_symmetry(x in 0.01_f64..5.0) {
            let sum = erf(x) + erf(-x);
            prop_assert!(sum.abs() < 1e-15, "erf odd symmetry: {sum} for x={x}");
        }

        #[test]
        fn erf_plus_erfc_is_one(x in -5.0_f64..5.0) {
            let total = erf(x) + erfc(x);
            prop_assert!((total - 1.0).abs() < 1e-14, "erf+erfc = {total} at x={x}");
        }

        #[test]
        fn erf_inv_roundtrip(y in -0.999999_f64..0.999999) {
            let x = erf_inv(y).unwrap();
            let back = erf(x);
            prop_assert!((back - y).abs() < 1e-13, "erf(erf_inv({y})) = {back}");
        }

        #[test]
        fn cdf_in_zero_one(x in -8.0_f64..8.0) {
            let c = standard_normal_cdf(x);
            prop_assert!((0.0..=1.0).contains(&c), "CDF({x}) = {c} out of [0,1]");
        }

        #[test]
        fn two_sided_z_encloses_probability(p in 0.01_f64..0.9999) {
            let z = two_sided_z(p).unwrap();
            let enclosed = standard_normal_cdf(z) - standard_normal_cdf(-z);
            prop_assert!((enclosed - p).abs() < 1e-12, "P(|Z|≤{z}) = {enclosed}, expected {p}");
        }
    }
}
