//! Custom JSON extractor that returns errors as `{"detail"}` JSON
//!
//! A request without a `Content-Type` header is read as JSON. A missing,
//! unparseable or mistyped body is a 422.

use axum::{
    Json as AxumJson,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use super::error::ApiError;

/// Wrapper around `axum::Json` whose rejections use the API error body
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_body(req.headers()) {
            return Err(ApiError::unprocessable("Expected a JSON request body"));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

        if bytes.is_empty() {
            return Err(ApiError::unprocessable("Request body is required"));
        }

        serde_json::from_slice(&bytes)
            .map(Json)
            .map_err(|err| ApiError::unprocessable(format_json_error(&err)))
    }
}

/// Missing `Content-Type` counts as JSON, as do `application/*+json` types
fn is_json_body(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };

    let Ok(value) = value.to_str() else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn format_json_error(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Data => format!("Invalid JSON data: {}", err),
        Category::Syntax | Category::Eof => format!("Invalid JSON syntax: {}", err),
        Category::Io => format!("Failed to read request body: {}", err),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
