use std::fmt;

use crate::FormField;

/// Result type for letterbox-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required form field was left empty
    MissingField(FormField),

    /// Date text is not a `YYYY-MM-DD` calendar date
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingField(field) => write!(f, "Missing required field: {}", field),
            Error::InvalidDate(text) => {
                write!(f, "Invalid date '{}': expected YYYY-MM-DD", text)
            }
        }
    }
}

impl std::error::Error for Error {}
