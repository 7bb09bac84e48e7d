//! Token domain

mod entity;
mod issuer;

pub use entity::{IssuedToken, TokenType};
pub use issuer::TokenIssuer;
