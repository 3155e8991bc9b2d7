use std::error::Error;
use std::fmt;

/// Rejected input, detected before any model work is performed.
///
/// Validation is the only hard failure mode of the solver. Everything that
/// can go wrong after it (line-search failure, indefinite Hessian, iteration
/// caps) is reported through the termination reason in
/// [`SolverResult`](crate::SolverResult), so the caller still receives the
/// best iterate found.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A settings field lies outside its admissible open interval (0, 1).
    SettingOutOfDomain {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The initial guess does not match the model's parameter dimension.
    DimensionMismatch {
        /// Dimension declared by the model.
        expected: usize,
        /// Length of the supplied initial guess.
        actual: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SettingOutOfDomain { name, value } => {
                write!(f, "setting '{}' = {} must lie in the open interval (0, 1)", name, value)
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "initial guess has wrong size {}, expected {}", actual, expected)
            }
        }
    }
}

impl Error for ValidationError {}
