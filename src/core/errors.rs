//! Shared error types for parameter extraction

use thiserror::Error;

/// Main error type for fn-params operations
#[derive(Debug, Error)]
pub enum Error {
    /// An option carried a value outside its recognized set
    #[error("Expected {option} to be {expectation}")]
    InvalidOption {
        option: &'static str,
        expectation: &'static str,
    },

    /// An input that must be text was something else
    #[error("Expected {parameter} to be a string")]
    TypeMismatch { parameter: &'static str },

    /// An input was text but violated a shape constraint
    #[error("Expected {parameter} to {expectation}")]
    InvalidArgument {
        parameter: &'static str,
        expectation: &'static str,
    },

    /// The function name does not occur anywhere in the contents
    #[error("Expected function {name} to be in contents")]
    NotFound { name: String },

    /// A caller-supplied pattern could not be used
    #[error("Expected customPattern to be a regex with a capture group: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Error category, one per failure class callers are expected to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOption,
    TypeMismatch,
    InvalidArgument,
    NotFound,
    InvalidPattern,
    Config,
    Io,
}

impl Error {
    pub(crate) fn type_mismatch(parameter: &'static str) -> Self {
        Self::TypeMismatch { parameter }
    }

    pub(crate) fn invalid_argument(parameter: &'static str, expectation: &'static str) -> Self {
        Self::InvalidArgument {
            parameter,
            expectation,
        }
    }

    pub(crate) fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidOption { .. } => ErrorKind::InvalidOption,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_parameter() {
        assert_eq!(
            Error::type_mismatch("contents").to_string(),
            "Expected contents to be a string"
        );
        assert_eq!(
            Error::invalid_argument("name", "not contain whitespace").to_string(),
            "Expected name to not contain whitespace"
        );
        assert_eq!(
            Error::NotFound {
                name: "config".into()
            }
            .to_string(),
            "Expected function config to be in contents"
        );
    }

    #[test]
    fn test_kind_classification() {
        let io = Error::from(std::io::Error::other("boom"));
        assert_eq!(io.kind(), ErrorKind::Io);
        assert_eq!(
            Error::invalid_pattern("(", "unclosed group").kind(),
            ErrorKind::InvalidPattern
        );
    }
}
