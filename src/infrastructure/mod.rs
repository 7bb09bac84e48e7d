//! Infrastructure layer - Implementations of the domain traits

pub mod auth;
pub mod credential;
pub mod logging;
