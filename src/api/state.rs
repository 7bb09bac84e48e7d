//! Application state for shared services

use std::sync::Arc;

use utoipa::openapi::OpenApi;

use crate::domain::DomainError;
use crate::domain::credential::CredentialRepository;
use crate::domain::token::{IssuedToken, TokenIssuer};
use crate::infrastructure::credential::AuthService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    /// Schema built once at startup
    pub openapi: Arc<OpenApi>,
}

/// Trait for login operations
#[async_trait::async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, DomainError>;
    async fn credential_count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R, T> AuthServiceTrait for AuthService<R, T>
where
    R: CredentialRepository + 'static,
    T: TokenIssuer + 'static,
{
    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, DomainError> {
        AuthService::login(self, username, password).await
    }

    async fn credential_count(&self) -> Result<usize, DomainError> {
        AuthService::credential_count(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(auth_service: Arc<dyn AuthServiceTrait>, openapi: OpenApi) -> Self {
        Self {
            auth_service,
            openapi: Arc::new(openapi),
        }
    }
}
