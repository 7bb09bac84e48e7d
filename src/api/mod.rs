//! API layer - HTTP endpoints and middleware

pub mod auth;
pub mod health;
pub mod items;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod secure;
pub mod state;
pub mod types;

pub use middleware::RequireBearer;
pub use router::create_router;
pub use state::AppState;
