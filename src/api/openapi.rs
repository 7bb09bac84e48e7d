//! # OpenAPI schema and docs page
//!
//! The schema is assembled from the annotated handlers once at startup.
//! Privileged operations are dropped from it unless the privilege check
//! passes; the routes themselves stay registered either way.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use thiserror::Error;
use utoipa::openapi::security::{Flow, OAuth2, Password, Scopes, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::auth::{self, LoginForm, TOKEN_PATH};
use super::health::{self, HealthCheck, HealthResponse, HealthStatus};
use super::items::{self, CreateItemResponse};
use super::secure::{self, MessageResponse, SECRET_PATH, SecureResponse};
use super::state::AppState;
use super::types::ApiErrorResponse;
use crate::domain::access::PrivilegeCheck;
use crate::domain::item::{ItemSelector, Person};
use crate::domain::token::{IssuedToken, TokenType};

/// Name of the security scheme protected operations refer to
pub const SECURITY_SCHEME: &str = "oauth2_password";

/// Route serving the generated schema
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Operations only advertised to privileged viewers
pub const PRIVILEGED_PATHS: &[&str] = &[SECRET_PATH];

/// Swagger UI loads from the CDN and runs an inline bootstrap script
const DOCS_CSP: &str = "default-src 'self'; \
     script-src 'self' https://cdn.jsdelivr.net 'unsafe-inline'; \
     style-src 'self' https://cdn.jsdelivr.net 'unsafe-inline'; \
     img-src 'self' data: https://cdn.jsdelivr.net; \
     connect-src 'self'; \
     frame-ancestors 'none'";

/// Adds the OAuth2 password flow pointing at the login route
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                SECURITY_SCHEME,
                SecurityScheme::OAuth2(OAuth2::new([Flow::Password(Password::new(
                    TOKEN_PATH,
                    Scopes::new(),
                ))])),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carbis Test API",
        description = "Demo API: password login, a bearer-gated endpoint and item creation."
    ),
    paths(
        auth::login,
        items::create_item,
        secure::secure_endpoint,
        secure::secret_method,
        health::health_check,
    ),
    components(schemas(
        LoginForm,
        IssuedToken,
        TokenType,
        ItemSelector,
        Person,
        CreateItemResponse,
        SecureResponse,
        MessageResponse,
        HealthResponse,
        HealthStatus,
        HealthCheck,
        ApiErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Password login"),
        (name = "items", description = "Item creation"),
        (name = "secure", description = "Bearer-gated and privileged operations"),
        (name = "health", description = "Service probes"),
    )
)]
pub struct ApiDoc;

/// Build the schema, consulting the privilege check exactly once
pub fn build_openapi(check: &dyn PrivilegeCheck) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    if !check.is_privileged() {
        for path in PRIVILEGED_PATHS {
            doc.paths.paths.remove(*path);
        }
    }

    doc
}

/// Configured docs path that cannot be mounted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocsPathError {
    #[error("docs path '{0}' is already served by another route")]
    Conflict(String),

    #[error("docs path '{0}' must be a literal path without '{{', '}}' or '*'")]
    NotLiteral(String),
}

/// Routes serving the schema and the interactive docs page
///
/// `taken` lists the paths already routed by the rest of the API; the docs
/// page may not shadow any of them.
pub fn create_docs_router(
    docs_path: &str,
    taken: &[&str],
) -> Result<Router<AppState>, DocsPathError> {
    let path = normalize_docs_path(docs_path);

    if path.contains(['{', '}', '*']) {
        return Err(DocsPathError::NotLiteral(path));
    }

    if path == OPENAPI_PATH || taken.contains(&path.as_str()) {
        return Err(DocsPathError::Conflict(path));
    }

    let page = docs_page(OPENAPI_PATH);

    let router = Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .route(
            &path,
            get(move || async move {
                ([(header::CONTENT_SECURITY_POLICY, DOCS_CSP)], Html(page)).into_response()
            }),
        );

    Ok(router)
}

async fn openapi_json(State(state): State<AppState>) -> Response {
    axum::Json(state.openapi.as_ref()).into_response()
}

fn normalize_docs_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn docs_page(spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Carbis Test API - Docs</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{
      url: "{spec_url}",
      dom_id: "#swagger-ui",
      persistAuthorization: true
    }});
  </script>
</body>
</html>"##
    )
}
