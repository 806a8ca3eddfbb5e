//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Request body could not be parsed at all
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::Malformed { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
