//! Bearer-gated and privileged endpoints

use axum::{Router, http::HeaderMap, routing::get};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use super::middleware::RequireBearer;
use super::state::AppState;
use super::types::{ApiErrorResponse, Json, Query};

pub const SECURE_PATH: &str = "/secure_endpoint";

/// Path listed in the schema only when the privilege check passes
pub const SECRET_PATH: &str = "/secret_method";

pub fn create_secure_router() -> Router<AppState> {
    Router::new()
        .route(SECURE_PATH, get(secure_endpoint))
        .route(SECRET_PATH, get(secret_method))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SecureQuery {
    /// The ID of the item
    pub item_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SecureResponse {
    pub item_id: Option<i64>,
    #[schema(example = "Authorized user")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Bearer-gated endpoint
///
/// Any bearer token is accepted; only its presence is required.
#[utoipa::path(
    get,
    path = "/secure_endpoint",
    tag = "secure",
    params(
        SecureQuery,
        ("x-token" = Option<String>, Header, description = "Optional X token"),
        ("y-token" = Option<String>, Header, description = "Optional Y token"),
    ),
    responses(
        (status = 200, description = "Token present", body = SecureResponse),
        (status = 401, description = "No bearer token", body = ApiErrorResponse),
        (status = 422, description = "item_id is not an integer", body = ApiErrorResponse),
    ),
    security(("oauth2_password" = []))
)]
pub async fn secure_endpoint(
    _bearer: RequireBearer,
    headers: HeaderMap,
    Query(query): Query<SecureQuery>,
) -> Json<SecureResponse> {
    debug!(
        item_id = ?query.item_id,
        x_token = headers.contains_key("x-token"),
        y_token = headers.contains_key("y-token"),
        "Secure endpoint called"
    );

    Json(SecureResponse {
        item_id: query.item_id,
        message: "Authorized user".to_string(),
    })
}

/// Privileged endpoint
///
/// Callable by anyone; whether it is advertised is decided at startup.
#[utoipa::path(
    get,
    path = "/secret_method",
    tag = "secure",
    responses((status = 200, description = "Secret message", body = MessageResponse))
)]
pub async fn secret_method() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "This is a secret message.".to_string(),
    })
}
