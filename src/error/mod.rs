use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The request was rejected.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The session log could not be written or read.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Reading from the terminal failed.
    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),

    /// Unexpected fault, such as a panicked worker task.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the fault.
        message: String,
    },
}

/// Errors raised while turning raw user input into a simulation request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Fewer than 10 or more than 15 digits.
    #[error("invalid phone number '{input}': expected 10-15 digits starting with a country code")]
    InvalidPhoneNumber {
        /// The rejected input, as entered.
        input: String,
    },

    /// Input that does not parse as an integer.
    #[error("'{input}' is not a valid number")]
    NotANumber {
        /// The rejected input, as entered.
        input: String,
    },

    /// Report count outside `1..=100`.
    #[error("report count {value} is outside 1-100")]
    CountOutOfRange {
        /// The parsed count.
        value: i64,
    },

    /// Reason menu choice outside `1..=10`.
    #[error("reason choice {value} is outside 1-10")]
    ReasonOutOfRange {
        /// The parsed menu choice.
        value: i64,
    },

    /// Reason label that matches no known reason.
    #[error("unknown report reason: {input}")]
    UnknownReason {
        /// The unrecognised label.
        input: String,
    },

    /// A required value was not supplied.
    #[error("missing required value: {field}")]
    Missing {
        /// Name of the missing value.
        field: String,
    },

    /// End of input reached while prompting.
    #[error("input stream closed before a value was entered")]
    InputClosed,
}

/// Session log persistence errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Creating or writing the log file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading the log file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document could not be encoded or decoded.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "bad probability".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad probability");

        let err = AppError::Internal {
            message: "unexpected".to_string(),
        };
        assert_eq!(err.to_string(), "Internal error: unexpected");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::CountOutOfRange { value: 101 };
        assert_eq!(err.to_string(), "report count 101 is outside 1-100");

        let err = ValidationError::ReasonOutOfRange { value: 0 };
        assert_eq!(err.to_string(), "reason choice 0 is outside 1-10");

        let err = ValidationError::NotANumber {
            input: "ten".to_string(),
        };
        assert_eq!(err.to_string(), "'ten' is not a valid number");

        let err = ValidationError::Missing {
            field: "reason".to_string(),
        };
        assert_eq!(err.to_string(), "missing required value: reason");
    }

    #[test]
    fn test_persistence_error_display() {
        let err = PersistenceError::Write {
            path: PathBuf::from("/readonly/log.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write /readonly/log.json: denied");
    }

    #[test]
    fn test_validation_error_conversion_to_app_error() {
        let app_err: AppError = ValidationError::InputClosed.into();
        assert!(matches!(app_err, AppError::Validation(_)));
        assert!(app_err.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn test_persistence_error_conversion_to_app_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = PersistenceError::from(json_err).into();
        assert!(matches!(app_err, AppError::Persistence(PersistenceError::Json(_))));
    }
}
