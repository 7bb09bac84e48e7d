//! Request extractors and response types shared by the handlers

pub mod error;
pub mod extract;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, NOT_AUTHENTICATED};
pub use extract::{Form, Path, Query};
pub use json::Json;
