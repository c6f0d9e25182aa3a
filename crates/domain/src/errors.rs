//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid phone number format
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Invalid artifact identifier
    #[error("Invalid artifact id: {0}")]
    InvalidArtifactId(String),

    /// Unknown language name or selection
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_phone_error_message() {
        let err = DomainError::InvalidPhoneNumber("123".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: 123");
    }

    #[test]
    fn invalid_artifact_id_error_message() {
        let err = DomainError::InvalidArtifactId("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid artifact id: ../etc");
    }

    #[test]
    fn unknown_language_error_message() {
        let err = DomainError::UnknownLanguage("Klingon".to_string());
        assert_eq!(err.to_string(), "Unknown language: Klingon");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }
}
