//! Login service

use std::sync::Arc;

use tracing::debug;

use crate::domain::DomainError;
use crate::domain::credential::CredentialRepository;
use crate::domain::token::{IssuedToken, TokenIssuer};

/// Validates submitted credentials and issues a token
///
/// Login has no side effects: no lockout counter, no login timestamp.
pub struct AuthService<R: CredentialRepository, T: TokenIssuer> {
    repository: Arc<R>,
    issuer: Arc<T>,
}

impl<R: CredentialRepository, T: TokenIssuer> AuthService<R, T> {
    /// Create a new auth service
    pub fn new(repository: Arc<R>, issuer: Arc<T>) -> Self {
        Self { repository, issuer }
    }

    /// Authenticate a username/password pair
    ///
    /// Unknown user and wrong password produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, DomainError> {
        let record = match self.repository.find_by_credentials(username, password).await? {
            Some(record) => record,
            None => {
                debug!(username = %username, "Login rejected");
                return Err(DomainError::invalid_credentials());
            }
        };

        debug!(username = %record.username(), role = %record.role(), "Login accepted");

        self.issuer.issue(&record)
    }

    /// Number of records in the underlying store
    pub async fn credential_count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
