//! Validation error types

use std::fmt;

/// Validation error for write-request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field is outside its allowed range
    OutOfRange { field: &'static str, min: i32, max: i32 },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Body failed to deserialize (missing field, wrong type, bad JSON)
    Body { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "\"{}\" is not allowed to be empty", field),
            Self::OutOfRange { field, min, max } => {
                write!(f, "\"{}\" must be between {} and {}", field, min, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "\"{}\" {}", field, reason)
            }
            Self::Body { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "year",
            min: 1900,
            max: 2026,
        };
        assert_eq!(err.to_string(), "\"year\" must be between 1900 and 2026");
    }

    #[test]
    fn empty_display_quotes_field() {
        let err = ValidationError::Empty { field: "title" };
        assert_eq!(err.to_string(), "\"title\" is not allowed to be empty");
    }
}
