//! Bearer token presence gate

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::debug;

use crate::api::types::{ApiError, NOT_AUTHENTICATED};

/// Extractor that requires a bearer token to be present
///
/// Only presence is checked. The token is passed through as-is and never
/// compared against issued tokens, decoded or checked for expiry; any
/// non-empty value satisfies the gate. Requests without one are rejected with
/// 401 before the handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireBearer(pub String);

impl<S> FromRequestParts<S> for RequireBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match extract_bearer_token(&parts.headers) {
            Some(token) => Ok(RequireBearer(token)),
            None => {
                debug!("Rejecting request without bearer token");
                Err(ApiError::unauthorized(NOT_AUTHENTICATED))
            }
        }
    }
}

/// Token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively. A missing header, a different
/// scheme, undecodable header bytes or an empty token all count as absent.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
