//! Error taxonomy for uncertain-number operations.
//!
//! All conditions are local and recoverable. The ordinary quotient does
//! **not** report division by zero through this type: it returns the
//! infinite-uncertainty sentinel `(NaN, +∞)` instead. Only
//! [`UncertainValue::checked_quotient`](crate::UncertainValue::checked_quotient)
//! surfaces [`UncertainError::DivisionByZero`].

use thiserror::Error;

/// Errors produced by construction, quantile, and estimation routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UncertainError {
    /// An argument is outside its admissible domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Strict quotient with an exactly-zero divisor mean.
    #[error("division by zero: divisor mean is 0")]
    DivisionByZero,

    /// The inverse error function did not converge.
    #[error("inverse error function did not converge for y={input} after {iterations} iterations")]
    NumericalNonConvergence { input: f64, iterations: usize },
}

impl UncertainError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        UncertainError::InvalidArgument(msg.into())
    }
}

/// Result type alias for uncertain-number operations.
pub type Result<T> = std::result::Result<T, UncertainError>;
