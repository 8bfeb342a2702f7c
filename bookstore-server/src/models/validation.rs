//! Validation error types

use std::fmt;

/// Validation error for request inputs
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is missing or empty when it shouldn't be
    Empty { field: &'static str },

    /// String doesn't match required format (e.g., numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "id: must be an integer");
    }
}
