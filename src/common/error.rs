//! Error types for motion_primitives

use std::fmt;

/// Main error type for the motion-primitive kernel
#[derive(Debug)]
pub enum ModelError {
    /// State input does not have exactly the expected number of fields
    InvalidStateDimension { expected: usize, actual: usize },
    /// A computed state or derivative contains NaN or infinity
    NonFiniteResult(String),
    /// The steering sweep produced no usable candidate
    EmptyCandidateSet(String),
    /// Degenerate or out-of-range model parameter
    InvalidParameter(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidStateDimension { expected, actual } => {
                write!(f, "Invalid state dimension: expected {}, got {}", expected, actual)
            }
            ModelError::NonFiniteResult(msg) => write!(f, "Non-finite result: {}", msg),
            ModelError::EmptyCandidateSet(msg) => write!(f, "Empty candidate set: {}", msg),
            ModelError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

/// Result type alias for kernel operations
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidStateDimension { expected: 5, actual: 3 };
        assert_eq!(format!("{}", err), "Invalid state dimension: expected 5, got 3");

        let err = ModelError::EmptyCandidateSet("steer step must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Empty candidate set: steer step must be positive"
        );
    }
}
