//! Credential repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::CredentialRecord;
use crate::domain::DomainError;

/// Read-only lookup over the credential store
///
/// Implementations are populated once at startup and never written to while
/// serving requests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// First record matching both username and password exactly
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<CredentialRecord>, DomainError>;

    /// All records in store order
    async fn list(&self) -> Result<Vec<CredentialRecord>, DomainError>;

    /// Number of records in the store
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
