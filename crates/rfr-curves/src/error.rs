//! Error types for curve fitting and evaluation.
//!
//! Three failure classes are kept distinct so callers can react precisely:
//! input-shape problems ([`ValidationError`], detected before any numeric
//! work), pointwise domain violations ([`DomainError`], detected at the
//! point of computation), and linear-system breakdown
//! ([`CurveError::SingularSystem`]). All of them propagate through the
//! top-level [`CurveError`]; no operation returns a partial result.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Malformed input shape, rejected before any numeric work begins.
///
/// Always recoverable by the caller by correcting the inputs.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    /// Rate and tenor sequences have different lengths.
    #[error("Mismatched lengths: {rates} rates for {tenors} tenors")]
    LengthMismatch {
        /// Number of rates supplied.
        rates: usize,
        /// Number of tenors supplied.
        tenors: usize,
    },

    /// A tenor sequence is empty.
    #[error("Tenor sequence is empty")]
    EmptyTenors,

    /// A tenor is zero, negative, or not a number.
    #[error("Non-positive tenor {tenor} at index {index}")]
    NonPositiveTenor {
        /// Position of the offending tenor.
        index: usize,
        /// The offending tenor value.
        tenor: f64,
    },

    /// Two tenors in one sequence are equal, which makes the kernel
    /// matrix singular.
    #[error("Duplicate tenor {tenor} at index {index}")]
    DuplicateTenor {
        /// Position of the second occurrence.
        index: usize,
        /// The duplicated tenor value.
        tenor: f64,
    },

    /// The convergence speed parameter is not positive.
    #[error("Convergence speed alpha must be positive, got {alpha}")]
    NonPositiveAlpha {
        /// The offending alpha value.
        alpha: f64,
    },
}

/// A value passed to a pointwise numeric transform violates its
/// mathematical domain.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// An annually-compounded rate at or below -100%.
    #[error("Rate {rate} implies a non-positive growth factor")]
    InvalidRate {
        /// The offending rate.
        rate: f64,
    },

    /// A discount factor that is zero or negative.
    #[error("Discount factor must be positive, got {price}")]
    InvalidPrice {
        /// The offending price.
        price: f64,
    },

    /// A maturity that is zero, negative, or not a number.
    #[error("Maturity must be positive, got {tenor}")]
    NonPositiveTenor {
        /// The offending tenor.
        tenor: f64,
    },

    /// The convergence speed parameter is not positive.
    #[error("Convergence speed alpha must be positive, got {alpha}")]
    NonPositiveAlpha {
        /// The offending alpha value.
        alpha: f64,
    },

    /// A forward interval whose start does not precede its end.
    #[error("Invalid interval: start {start} must precede end {end}")]
    InvalidInterval {
        /// Interval start in years.
        start: f64,
        /// Interval end in years.
        end: f64,
    },
}

/// Top-level error type for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Input validation failed before any numeric work.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A pointwise numeric transform was handed an out-of-domain value.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The observation kernel matrix cannot be reliably inverted.
    ///
    /// Fatal to the fit; the weights are never silently degraded.
    #[error("Observation kernel matrix ({size}x{size}) is singular or ill-conditioned")]
    SingularSystem {
        /// Number of observed tenors.
        size: usize,
    },

    /// The convergence-speed search failed to bracket or converge.
    #[error("Alpha calibration failed: {reason}")]
    Calibration {
        /// Description of the failure.
        reason: String,
    },

    /// An unexpected failure surfaced by the math layer.
    #[error("Math error: {reason}")]
    Math {
        /// Description of the mathematical error.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ValidationError::DuplicateTenor {
            index: 3,
            tenor: 5.0,
        };
        assert!(err.to_string().contains("Duplicate tenor 5"));
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: CurveError = ValidationError::EmptyTenors.into();
        assert_eq!(err.to_string(), "Tenor sequence is empty");
    }

    #[test]
    fn test_singular_display() {
        let err = CurveError::SingularSystem { size: 25 };
        assert!(err.to_string().contains("25x25"));
    }
}
