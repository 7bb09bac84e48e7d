use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// No credential record matched both username and password
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        let error = DomainError::invalid_credentials();
        assert_eq!(error.to_string(), "Incorrect username or password");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("grant_type must be 'password'");
        assert_eq!(
            error.to_string(),
            "Validation error: grant_type must be 'password'"
        );
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("store unavailable");
        assert_eq!(error.to_string(), "Storage error: store unavailable");
    }
}
