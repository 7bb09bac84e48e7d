//! API middleware components

pub mod bearer;
pub mod logging;
pub mod security;

pub use bearer::RequireBearer;
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
