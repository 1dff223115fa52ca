//! Validation error types
//!
//! Every variant is a request-level failure; none is retried and none is
//! fatal to the process.

use thiserror::Error;

/// Result type for validation checks
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Rejections raised before input reaches the store or business rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// Identifier is not a positive integer literal.
    #[error("invalid id '{0}': expected a positive integer")]
    InvalidId(String),

    /// Name is blank or empty.
    #[error("invalid name: must not be blank")]
    InvalidName,

    /// Book title is blank or empty.
    #[error("invalid book title: must not be blank")]
    InvalidBookTitle,

    /// Combined input does not split into the expected two parts.
    #[error("invalid input '{input}': expected {expected}")]
    InvalidInputFormat {
        input: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_input() {
        let err = ValidateError::InvalidId("abc".to_string());
        assert!(err.to_string().contains("abc"));

        let err = ValidateError::InvalidInputFormat {
            input: "Title".to_string(),
            expected: "'title/author'",
        };
        assert!(err.to_string().contains("Title"));
        assert!(err.to_string().contains("title/author"));
    }
}
