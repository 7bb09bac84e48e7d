//! Credential domain
//!
//! Username/password/role records and the read-only repository trait used
//! by the login flow.

mod entity;
mod repository;

pub use entity::{CredentialRecord, Role, seed_records};
pub use repository::CredentialRepository;

#[cfg(test)]
pub use repository::MockCredentialRepository;
