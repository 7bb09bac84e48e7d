//! Carbis Test API
//!
//! A small demo service with:
//! - Password login against an in-memory credential store
//! - A shared static bearer token
//! - A bearer-presence gated endpoint
//! - A generated OpenAPI schema with interactive docs

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::openapi::build_openapi;
use api::state::AppState;
use domain::access::StaticPrivilegeCheck;
use infrastructure::auth::StaticTokenIssuer;
use infrastructure::credential::{AuthService, InMemoryCredentialRepository};
use tracing::{info, warn};

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    if config.auth.users.is_empty() {
        warn!("Credential store is empty; every login will fail");
    }

    let repository = Arc::new(InMemoryCredentialRepository::with_records(
        config.auth.users.clone(),
    ));
    let issuer = Arc::new(StaticTokenIssuer::new(config.auth.token.clone()));
    let auth_service = Arc::new(AuthService::new(repository, issuer));

    let privilege = StaticPrivilegeCheck::new(config.docs.show_privileged);
    let openapi = build_openapi(&privilege);

    info!(
        users = config.auth.users.len(),
        show_privileged = config.docs.show_privileged,
        "Application state initialized"
    );

    AppState::new(auth_service, openapi)
}
