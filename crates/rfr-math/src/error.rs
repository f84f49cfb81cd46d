//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// Matrix is singular or too ill-conditioned to invert reliably.
    #[error("Singular matrix: pivot {pivot:.2e} below threshold at column {column}")]
    SingularMatrix {
        /// Magnitude of the offending pivot.
        pivot: f64,
        /// Elimination column where breakdown occurred.
        column: usize,
    },

    /// Matrix dimensions are incompatible.
    #[error("Incompatible dimensions: matrix is {rows}x{cols}, rhs has length {rhs_len}")]
    DimensionMismatch {
        /// Rows in the matrix.
        rows: usize,
        /// Columns in the matrix.
        cols: usize,
        /// Length of the right-hand side.
        rhs_len: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_singular_display() {
        let err = MathError::SingularMatrix {
            pivot: 1e-18,
            column: 3,
        };
        assert!(err.to_string().contains("column 3"));
    }
}
