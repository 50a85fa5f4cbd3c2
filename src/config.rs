//! Solver and Monte Carlo configuration.
//!
//! Both configs are plain values with [`Default`] impls; the defaults
//! reproduce the behavior of the free functions in [`special`](crate::special)
//! and [`monte_carlo`](crate::monte_carlo).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default iteration cap for the inverse error function.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default Newton step tolerance for the inverse error function.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Default number of Monte Carlo sample pairs.
pub const DEFAULT_SAMPLES: usize = 10_000;

// ============================================================================
// Solver
// ============================================================================

/// Newton solver settings for [`erf_inv_with`](crate::special::erf_inv_with).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Upper bound on Newton iterations before reporting non-convergence.
    pub max_iterations: usize,
    /// Stop once `|step| < tolerance · max(1, |x|)`.
    pub tolerance: f64,
}

impl SolverConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

// ============================================================================
// Monte Carlo
// ============================================================================

/// How each operand is sampled by the equality estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SamplingMode {
    /// Uniform draw on `[mean − σ, mean + σ]`.
    ///
    /// This is an approximation that ignores the tails beyond ±1σ; it is
    /// kept as the default for compatibility with existing results.
    #[default]
    UniformWindow,
    /// Draw from N(mean, σ²) via the Box-Muller transform.
    Gaussian,
}

/// Settings for a [`MonteCarlo`](crate::monte_carlo::MonteCarlo) estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonteCarloConfig {
    /// Number of sample pairs per estimate.
    pub samples: usize,
    /// Sampling scheme.
    pub mode: SamplingMode,
    /// Fixed seed for reproducible runs; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl MonteCarloConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_mode(mut self, mode: SamplingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            mode: SamplingMode::UniformWindow,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_defaults() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.max_iterations, 100);
        assert_eq!(cfg.tolerance, 1e-15);
    }

    #[test]
    fn test_monte_carlo_builders() {
        let cfg = MonteCarloConfig::default()
            .with_samples(500)
            .with_mode(SamplingMode::Gaussian)
            .with_seed(7);
        assert_eq!(cfg.samples, 500);
        assert_eq!(cfg.mode, SamplingMode::Gaussian);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn test_default_mode_is_uniform_window() {
        assert_eq!(SamplingMode::default(), SamplingMode::UniformWindow);
        assert_eq!(MonteCarloConfig::default().seed, None);
    }
}
