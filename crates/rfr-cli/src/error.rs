//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// A number in a comma-separated list failed to parse.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// A required argument was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// A CSV record did not have the expected shape.
    #[error("Malformed CSV record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the input file.
        line: u64,
        /// What was wrong with the record.
        reason: String,
    },

    /// The input file contained no observations.
    #[error("No observations found in input")]
    EmptyInput,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the curve engine.
    #[error(transparent)]
    Curve(#[from] rfr_curves::CurveError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
