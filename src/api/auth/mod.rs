//! Authentication API endpoints
//!
//! Password-grant login returning the shared bearer token.

use axum::{Router, extract::State, routing::post};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiErrorResponse, Form, Json};
use crate::domain::DomainError;
use crate::domain::token::IssuedToken;

/// Route serving the login form; also the token URL advertised in the schema
pub const TOKEN_PATH: &str = "/docs/api/token";

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route(TOKEN_PATH, post(login))
}

/// OAuth2 password-grant form
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Must be `password` when sent
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
}

impl LoginForm {
    fn check_grant_type(&self) -> Result<(), DomainError> {
        match self.grant_type.as_deref() {
            None | Some("password") => Ok(()),
            Some(other) => Err(DomainError::validation(format!(
                "Unsupported grant_type '{}': expected 'password'",
                other
            ))),
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("grant_type", &self.grant_type)
            .field("scope", &self.scope)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[hidden]"))
            .finish()
    }
}

/// Login with username and password
///
/// POST /docs/api/token
///
/// Every successful login receives the same token.
#[utoipa::path(
    post,
    path = "/docs/api/token",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Credentials matched", body = IssuedToken),
        (status = 400, description = "Incorrect username or password", body = ApiErrorResponse),
        (status = 422, description = "Malformed form", body = ApiErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<IssuedToken>, ApiError> {
    form.check_grant_type()?;

    let token = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok(Json(token))
}
