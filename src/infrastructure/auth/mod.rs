//! Authentication infrastructure module
//!
//! Token issuance strategies. Only the static shared-token issuer exists.

mod static_token;

pub use static_token::{DEFAULT_STATIC_TOKEN, StaticTokenIssuer};
