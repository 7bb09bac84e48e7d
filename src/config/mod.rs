//! Application configuration

mod app_config;

pub use app_config::{AppConfig, AuthConfig, DocsConfig, LogFormat, LoggingConfig, ServerConfig};
