//! Credential store and login service

mod repository;
mod service;

pub use repository::InMemoryCredentialRepository;
pub use service::AuthService;
