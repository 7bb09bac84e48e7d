//! Domain layer - Core types and traits

pub mod access;
pub mod credential;
pub mod error;
pub mod item;
pub mod token;

pub use access::{PrivilegeCheck, StaticPrivilegeCheck};
pub use credential::{CredentialRecord, CredentialRepository, Role, seed_records};
pub use error::DomainError;
pub use item::{ItemSelector, Person};
pub use token::{IssuedToken, TokenIssuer, TokenType};
