//! In-memory credential repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::credential::{CredentialRecord, CredentialRepository};

/// Fixed list of records loaded at startup
///
/// The list is shared behind an `Arc` and never mutated, so lookups need no
/// locking.
#[derive(Debug, Clone)]
pub struct InMemoryCredentialRepository {
    records: Arc<[CredentialRecord]>,
}

impl InMemoryCredentialRepository {
    /// Create a repository holding the given records, in order
    pub fn with_records(records: Vec<CredentialRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<CredentialRecord>, DomainError> {
        Ok(self
            .records
            .iter()
            .find(|record| record.matches(username, password))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<CredentialRecord>, DomainError> {
        Ok(self.records.to_vec())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.records.len())
    }
}
