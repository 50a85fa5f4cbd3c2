//! Uncertain values under a Gaussian error model.
//!
//! An [`UncertainValue`] is a mean paired with a standard deviation,
//! interpreted as N(mean, σ²). Values are immutable `Copy` types; every
//! operation returns a new value.
//!
//! # Propagation Rules
//!
//! | Operation | Mean | Standard deviation |
//! |---|---|---|
//! | `a + b` | a + b | √(σa² + σb²) |
//! | `a − b` | a − b | √(σa² + σb²) |
//! | `a × b` | a·b | \|a·b\| · √((σa/a)² + (σb/b)²) |
//! | `a ÷ b` | a/b | \|a/b\| · √((σa/a)² + (σb/b)²) |
//!
//! Product and quotient are evaluated in the equivalent absolute form
//! `√((b·σa)² + (a·σb)²)` and `√(σa² + (a/b · σb)²) / |b|` with
//! [`f64::hypot`], so no intermediate square or relative error overflows
//! for finite operands.
//!
//! # Independence
//!
//! Every binary operation assumes its two operands are statistically
//! independent. No provenance is tracked, so an expression that uses the
//! same value more than once (`a + a`, `x * (x + y)`) propagates an
//! incorrect variance: `a + a` reports σ·√2 where the true spread of `2a`
//! is 2σ. Use [`UncertainValue::scale`] for multiples of a single value.
//!
//! # Infinite Uncertainty
//!
//! When the relative-error form is undefined (division by a zero mean, or
//! an uncertain operand with zero mean in a product/quotient of two
//! uncertain values) the result is the sentinel `(mean = NaN, σ = +∞)`.
//! This is a return-value contract, not an error.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, UncertainError};
use crate::special::{erf, standard_normal_cdf, two_sided_z};
use crate::stats;

/// A normally distributed quantity: mean ± standard deviation.
///
/// `std_dev == 0` denotes an exact value (all probability mass at `mean`).
///
/// # Examples
/// ```
/// use u_uncertain::UncertainValue;
///
/// // 10 ± 2 with 90% confidence, 10 ± 0.5 with certainty
/// let x1 = UncertainValue::from_mean_and_interval(10.0, 8.0, 12.0, 0.9).unwrap();
/// let x2 = UncertainValue::from_mean_and_interval(10.0, 9.5, 10.5, 1.0).unwrap();
/// let y = UncertainValue::exact(5.0);
///
/// let area = (x1 + x2) * y;
/// assert_eq!(area.mean(), 100.0);
/// assert!((area.std_dev() - 5.0 * x1.std_dev()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UncertainValue {
    mean: f64,
    std_dev: f64,
}

impl UncertainValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a value from its mean and standard deviation.
    ///
    /// # Errors
    /// Returns [`UncertainError::InvalidArgument`] if `std_dev` is negative
    /// or NaN. `+∞` is accepted.
    pub fn from_mean_and_std_dev(mean: f64, std_dev: f64) -> Result<Self> {
        if std_dev.is_nan() || std_dev < 0.0 {
            return Err(UncertainError::invalid(format!(
                "std_dev must be non-negative, got {std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// Creates a value from a symmetric confidence interval.
    ///
    /// `[lower_bound, upper_bound]` is taken to enclose `probability` of the
    /// distribution, giving `σ = (upper − lower) / (2z)` with the two-sided
    /// z-score of [`two_sided_z`]. `probability == 1.0` yields an exact
    /// value.
    ///
    /// # Errors
    /// [`UncertainError::InvalidArgument`] if `probability ∉ (0, 1]`, the
    /// bounds are NaN or inverted, or the z-score is zero.
    ///
    /// # Examples
    /// ```
    /// use u_uncertain::UncertainValue;
    /// let v = UncertainValue::from_mean_and_interval(10.0, 8.0, 12.0, 0.9).unwrap();
    /// assert!((v.std_dev() - 1.216).abs() < 1e-3);
    /// ```
    pub fn from_mean_and_interval(
        mean: f64,
        lower_bound: f64,
        upper_bound: f64,
        probability: f64,
    ) -> Result<Self> {
        if lower_bound.is_nan() || upper_bound.is_nan() {
            return Err(UncertainError::invalid("interval bounds must not be NaN"));
        }
        if upper_bound < lower_bound {
            return Err(UncertainError::invalid(format!(
                "interval is inverted: [{lower_bound}, {upper_bound}]"
            )));
        }
        let z = two_sided_z(probability)?;
        if z == 0.0 {
            return Err(UncertainError::invalid(format!(
                "z-score is zero for probability {probability}"
            )));
        }
        let width = upper_bound - lower_bound;
        let std_dev = if z.is_infinite() { 0.0 } else { width / (2.0 * z) };
        Self::from_mean_and_std_dev(mean, std_dev)
    }

    /// Creates an exact value (`std_dev = 0`).
    pub const fn exact(mean: f64) -> Self {
        Self { mean, std_dev: 0.0 }
    }

    /// Summarizes repeated readings as sample mean ± sample standard
    /// deviation.
    ///
    /// The spread describes a single reading. For the uncertainty of the
    /// mean itself, divide by √n.
    ///
    /// # Errors
    /// [`UncertainError::InvalidArgument`] for fewer than two readings or
    /// any non-finite reading.
    ///
    /// # Examples
    /// ```
    /// use u_uncertain::UncertainValue;
    /// let v = UncertainValue::from_samples(&[1.0, 3.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(v.mean(), 2.0);
    /// assert!((v.std_dev() - (4.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        let (Some(mean), Some(std_dev)) = (stats::mean(samples), stats::std_dev(samples)) else {
            return Err(UncertainError::invalid(format!(
                "need at least two finite samples, got {}",
                samples.len()
            )));
        };
        Ok(Self { mean, std_dev })
    }

    /// The `(NaN, +∞)` infinite-uncertainty sentinel.
    const fn infinite_uncertainty() -> Self {
        Self {
            mean: f64::NAN,
            std_dev: f64::INFINITY,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn mean(self) -> f64 {
        self.mean
    }

    pub fn std_dev(self) -> f64 {
        self.std_dev
    }

    pub fn variance(self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// σ / |mean|; infinite for an uncertain zero mean.
    pub fn relative_uncertainty(self) -> f64 {
        self.std_dev / self.mean.abs()
    }

    /// True when `std_dev == 0`.
    pub fn is_exact(self) -> bool {
        self.std_dev == 0.0
    }

    /// True for the `(NaN, +∞)` sentinel produced by undefined propagation.
    pub fn is_infinitely_uncertain(self) -> bool {
        self.mean.is_nan() && self.std_dev == f64::INFINITY
    }

    // ========================================================================
    // Bounds
    // ========================================================================

    /// Half-width `z·σ` of the interval; an exact value has zero spread even
    /// for `z = ∞`.
    fn spread(self, z: f64) -> f64 {
        if self.std_dev == 0.0 {
            0.0
        } else {
            z * self.std_dev
        }
    }

    /// Lower end of the central interval enclosing `probability` of the mass.
    ///
    /// # Errors
    /// [`UncertainError::InvalidArgument`] unless `probability ∈ (0, 1]`.
    pub fn lower_bound(self, probability: f64) -> Result<f64> {
        let z = two_sided_z(probability)?;
        Ok(self.mean - self.spread(z))
    }

    /// Upper end of the central interval enclosing `probability` of the mass.
    ///
    /// # Errors
    /// [`UncertainError::InvalidArgument`] unless `probability ∈ (0, 1]`.
    pub fn upper_bound(self, probability: f64) -> Result<f64> {
        let z = two_sided_z(probability)?;
        Ok(self.mean + self.spread(z))
    }

    /// Both ends of the central interval as `(lower, upper)`.
    ///
    /// # Examples
    /// ```
    /// use u_uncertain::UncertainValue;
    /// let v = UncertainValue::from_mean_and_std_dev(0.0, 1.0).unwrap();
    /// let (lo, hi) = v.interval(0.95).unwrap();
    /// assert!((hi - 1.959963984540054).abs() < 1e-10);
    /// assert_eq!(lo, -hi);
    /// ```
    pub fn interval(self, probability: f64) -> Result<(f64, f64)> {
        let spread = self.spread(two_sided_z(probability)?);
        Ok((self.mean - spread, self.mean + spread))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// `self + other` with `σ = √(σa² + σb²)`.
    pub fn sum(self, other: Self) -> Self {
        Self {
            mean: self.mean + other.mean,
            std_dev: quadrature(self.std_dev, other.std_dev),
        }
    }

    /// `self − other` with `σ = √(σa² + σb²)`.
    pub fn difference(self, other: Self) -> Self {
        Self {
            mean: self.mean - other.mean,
            std_dev: quadrature(self.std_dev, other.std_dev),
        }
    }

    /// `self × other` under the relative-error rule (absolute form).
    ///
    /// An exact operand acts as a scale factor. If both operands are
    /// uncertain and either has a zero mean, the result is the
    /// infinite-uncertainty sentinel.
    pub fn product(self, other: Self) -> Self {
        if other.is_exact() {
            return self.scale(other.mean);
        }
        if self.is_exact() {
            return other.scale(self.mean);
        }
        if self.mean == 0.0 || other.mean == 0.0 {
            tracing::trace!(lhs = %self, rhs = %other, "product of uncertain zero mean");
            return Self::infinite_uncertainty();
        }
        Self {
            mean: self.mean * other.mean,
            std_dev: quadrature(self.std_dev * other.mean, other.std_dev * self.mean),
        }
    }

    /// `self ÷ other` under the relative-error rule (absolute form).
    ///
    /// A zero divisor mean yields the sentinel `(NaN, +∞)`. An exact divisor
    /// acts as a scale factor; otherwise an uncertain zero numerator also
    /// yields the sentinel.
    ///
    /// # Examples
    /// ```
    /// use u_uncertain::UncertainValue;
    /// let a = UncertainValue::from_mean_and_std_dev(5.0, 1.0).unwrap();
    /// let b = UncertainValue::from_mean_and_std_dev(0.0, 0.1).unwrap();
    /// let q = a.quotient(b);
    /// assert!(q.mean().is_nan());
    /// assert_eq!(q.std_dev(), f64::INFINITY);
    /// ```
    pub fn quotient(self, other: Self) -> Self {
        if other.mean == 0.0 {
            tracing::trace!(lhs = %self, rhs = %other, "quotient by zero mean");
            return Self::infinite_uncertainty();
        }
        if self.mean == 0.0 && !self.is_exact() && !other.is_exact() {
            tracing::trace!(lhs = %self, rhs = %other, "quotient of uncertain zero mean");
            return Self::infinite_uncertainty();
        }
        let mean = self.mean / other.mean;
        let std_dev = if other.is_exact() {
            self.std_dev / other.mean.abs()
        } else {
            quadrature(self.std_dev, mean * other.std_dev) / other.mean.abs()
        };
        Self { mean, std_dev }
    }

    /// Strict quotient that reports a zero divisor mean as an error.
    ///
    /// # Errors
    /// [`UncertainError::DivisionByZero`] if `other.mean() == 0`.
    pub fn checked_quotient(self, other: Self) -> Result<Self> {
        if other.mean == 0.0 {
            return Err(UncertainError::DivisionByZero);
        }
        Ok(self.quotient(other))
    }

    /// Multiplies by an exact factor: `(k·mean) ± (|k|·σ)`.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            mean: self.mean * factor,
            std_dev: if self.std_dev == 0.0 {
                0.0
            } else {
                self.std_dev * factor.abs()
            },
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// True iff the upper bound at `probability` is still below `threshold`,
    /// i.e. `mean < threshold − z·σ`.
    ///
    /// # Errors
    /// [`UncertainError::InvalidArgument`] unless `probability ∈ (0, 1]`.
    pub fn is_less_than_with_confidence(self, threshold: f64, probability: f64) -> Result<bool> {
        let z = two_sided_z(probability)?;
        Ok(self.mean < threshold - self.spread(z))
    }

    /// True iff the lower bound at `probability` is still above `threshold`,
    /// i.e. `mean > threshold + z·σ`.
    ///
    /// # Errors
    /// [`UncertainError::InvalidArgument`] unless `probability ∈ (0, 1]`.
    pub fn is_greater_than_with_confidence(
        self,
        threshold: f64,
        probability: f64,
    ) -> Result<bool> {
        let z = two_sided_z(probability)?;
        Ok(self.mean > threshold + self.spread(z))
    }

    // ========================================================================
    // Probability
    // ========================================================================

    /// Tail score `(1 + erf(z/√2)) / 4` with `z = (threshold − mean)/σ`.
    ///
    /// The divisor is 4, not 2: the result ranges over `[0, 0.5]` and is
    /// half the normal CDF. Existing consumers depend on this scale. Use
    /// [`cdf`](Self::cdf) for the textbook probability.
    ///
    /// An exact value returns 0.5 when `mean < threshold`, else 0. A NaN
    /// threshold yields NaN, as in plain `f64` arithmetic.
    ///
    /// # Examples
    /// ```
    /// use u_uncertain::UncertainValue;
    /// let v = UncertainValue::from_mean_and_std_dev(0.0, 1.0).unwrap();
    /// assert!((v.probability_less_than(0.0) - 0.25).abs() < 1e-15);
    /// ```
    pub fn probability_less_than(self, threshold: f64) -> f64 {
        if self.std_dev == 0.0 && !threshold.is_nan() {
            return if self.mean < threshold { 0.5 } else { 0.0 };
        }
        let z = (threshold - self.mean) / self.std_dev;
        (1.0 + erf(z / std::f64::consts::SQRT_2)) / 4.0
    }

    /// Tail score `(1 − erf(z/√2)) / 4`, the mirror of
    /// [`probability_less_than`](Self::probability_less_than) with the same
    /// divisor-4 scale.
    ///
    /// An exact value returns 0.5 when `mean > threshold`, else 0. A NaN
    /// threshold yields NaN.
    pub fn probability_greater_than(self, threshold: f64) -> f64 {
        if self.std_dev == 0.0 && !threshold.is_nan() {
            return if self.mean > threshold { 0.5 } else { 0.0 };
        }
        let z = (threshold - self.mean) / self.std_dev;
        (1.0 - erf(z / std::f64::consts::SQRT_2)) / 4.0
    }

    /// Normal CDF `P(X ≤ x) = Φ((x − mean)/σ)`.
    ///
    /// An exact value is a step function at `mean`. A NaN `x` yields NaN.
    pub fn cdf(self, x: f64) -> f64 {
        if self.std_dev == 0.0 && !x.is_nan() {
            return if x >= self.mean { 1.0 } else { 0.0 };
        }
        standard_normal_cdf((x - self.mean) / self.std_dev)
    }

    /// Monte Carlo estimate of `P(|X − Y| ≤ tolerance)`.
    ///
    /// Each operand is drawn uniformly from its ±1σ window, using the
    /// calling thread's generator, never reseeded per call. See
    /// [`monte_carlo`](crate::monte_carlo) for seeded and Gaussian variants.
    ///
    /// # Errors
    /// [`UncertainError::InvalidArgument`] if `sample_count == 0` or
    /// `tolerance` is negative or NaN.
    pub fn probability_approx_equal(
        self,
        other: Self,
        tolerance: f64,
        sample_count: usize,
    ) -> Result<f64> {
        crate::monte_carlo::probability_approx_equal(self, other, tolerance, sample_count)
    }
}

/// `√(a² + b²)` without overflow, symmetric in its arguments.
fn quadrature(a: f64, b: f64) -> f64 {
    if a.abs() >= b.abs() {
        a.hypot(b)
    } else {
        b.hypot(a)
    }
}

// ============================================================================
// Operator Impls
// ============================================================================

impl Add for UncertainValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.sum(rhs)
    }
}

impl Sub for UncertainValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl Mul for UncertainValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.product(rhs)
    }
}

impl Div for UncertainValue {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.quotient(rhs)
    }
}

impl Mul<f64> for UncertainValue {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div<f64> for UncertainValue {
    type Output = Self;

    /// Division by an exact `0.0` follows the quotient sentinel.
    fn div(self, rhs: f64) -> Self {
        self.quotient(Self::exact(rhs))
    }
}

impl Neg for UncertainValue {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            mean: -self.mean,
            std_dev: self.std_dev,
        }
    }
}

impl Sum for UncertainValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::exact(0.0), Add::add)
    }
}

impl<'a> Sum<&'a UncertainValue> for UncertainValue {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<f64> for UncertainValue {
    fn from(mean: f64) -> Self {
        Self::exact(mean)
    }
}

impl fmt::Display for UncertainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.mean, p, self.std_dev),
            None => write!(f, "{} ± {}", self.mean, self.std_dev),
        }
    }
}
