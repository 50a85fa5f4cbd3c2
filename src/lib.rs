//! # u-uncertain
//!
//! Uncertain numbers for the U-Engine ecosystem.
//!
//! A value is a mean paired with a standard deviation under a normal
//! model. Arithmetic propagates the uncertainty with the standard
//! first-order error formulas, and every value can be queried for
//! confidence bounds, threshold comparisons, and exceedance probabilities.
//!
//! ## Modules
//!
//! - [`uncertain`] — The [`UncertainValue`] type and its propagation rules
//! - [`monte_carlo`] — Sampling estimator for approximate equality
//! - [`special`] — Error function, its inverse, and normal quantiles
//! - [`stats`] — Stable descriptive statistics for raw readings
//! - [`random`] — Seeded generators and sample draws
//! - [`config`] — Solver and Monte Carlo settings
//! - [`error`] — Error taxonomy
//!
//! ## Quick Start
//!
//! ```
//! use u_uncertain::UncertainValue;
//!
//! let temperature = UncertainValue::from_mean_and_interval(22.0, 20.0, 24.0, 0.99).unwrap();
//! let offset = UncertainValue::from_mean_and_std_dev(-1.5, 0.3).unwrap();
//! let corrected = temperature + offset;
//!
//! let (lo, hi) = corrected.interval(0.95).unwrap();
//! assert!(lo < 20.5 && 20.5 < hi);
//! assert!(corrected.is_greater_than_with_confidence(15.0, 0.99).unwrap());
//! ```
//!
//! ## Design Philosophy
//!
//! - **Immutable values**: operations never mutate, they return new values
//! - **Independent operands**: no covariance tracking; see [`uncertain`]
//! - **Explicit failure**: bounded solvers and typed errors instead of
//!   infinite loops or silent NaN

pub mod config;
pub mod error;
pub mod monte_carlo;
pub mod random;
pub mod special;
pub mod stats;
pub mod uncertain;

pub use config::{MonteCarloConfig, SamplingMode, SolverConfig};
pub use error::{Result, UncertainError};
pub use monte_carlo::{MonteCarlo, MonteCarloEstimate};
pub use uncertain::UncertainValue;
