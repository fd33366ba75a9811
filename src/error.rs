//! Error types for numeric evaluation and sampling operations

use std::fmt;

/// Main error type for all library operations
///
/// Only two kinds of failure exist: a caller-supplied precondition violation,
/// detected before any computation proceeds, and an iterative refinement that
/// exhausted its iteration budget. Neither is retried internally and neither
/// is ever downgraded to a default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    /// A precondition on an argument was violated
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An iterative refinement exceeded its iteration cap without converging
    ///
    /// The algorithm's fixed strategy either converges or reports failure;
    /// callers may retry with a different budget if they choose.
    ConvergenceFailure {
        /// Name of the routine that failed to converge
        operation: &'static str,
        /// Iteration budget that was exhausted
        max_iterations: usize,
    },
}

impl fmt::Display for StatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ConvergenceFailure {
                operation,
                max_iterations,
            } => {
                write!(
                    f,
                    "{operation} failed to converge within {max_iterations} iterations"
                )
            }
        }
    }
}

impl std::error::Error for StatError {}

/// Convenience type alias for library results
pub type Result<T> = std::result::Result<T, StatError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StatError {
    StatError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a convergence failure error
pub const fn convergence_failure(operation: &'static str, max_iterations: usize) -> StatError {
    StatError::ConvergenceFailure {
        operation,
        max_iterations,
    }
}
