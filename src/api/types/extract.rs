//! Form, query and path extractors with `{"detail"}` rejections
//!
//! Values that fail type coercion, and form bodies sent with another content
//! type, are reported as 422 like the JSON extractor does.

use axum::{
    extract::{
        Form as AxumForm, FromRequest, FromRequestParts, Path as AxumPath, Query as AxumQuery,
        Request,
        rejection::{FormRejection, PathRejection, QueryRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// URL-encoded form body
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<T>(pub T);

/// Query string parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

/// Path parameters
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<S, T> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        AxumForm::<T>::from_request(req, state)
            .await
            .map(|AxumForm(value)| Form(value))
            .map_err(form_rejection)
    }
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AxumQuery::<T>::from_request_parts(parts, state)
            .await
            .map(|AxumQuery(value)| Query(value))
            .map_err(query_rejection)
    }
}

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AxumPath::<T>::from_request_parts(parts, state)
            .await
            .map(|AxumPath(value)| Path(value))
            .map_err(path_rejection)
    }
}

fn form_rejection(rejection: FormRejection) -> ApiError {
    match rejection {
        FormRejection::InvalidFormContentType(_) => {
            ApiError::unprocessable("Expected an 'application/x-www-form-urlencoded' request body")
        }
        FormRejection::FailedToDeserializeForm(err) => {
            ApiError::unprocessable(format!("Invalid form data: {}", err.body_text()))
        }
        FormRejection::FailedToDeserializeFormBody(err) => {
            ApiError::unprocessable(format!("Invalid form data: {}", err.body_text()))
        }
        other => ApiError::new(other.status(), other.body_text()),
    }
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    ApiError::unprocessable(format!("Invalid query parameters: {}", rejection.body_text()))
}

fn path_rejection(rejection: PathRejection) -> ApiError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => {
            ApiError::unprocessable(format!("Invalid path parameter: {}", err.body_text()))
        }
        other => ApiError::internal(other.body_text()),
    }
}
