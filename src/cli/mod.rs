//! CLI module for Carbis Test API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server
//! - `openapi`: print the generated OpenAPI schema

pub mod openapi;
pub mod serve;

use clap::{Parser, Subcommand};

/// Carbis Test API - demo login and bearer-gated endpoints
#[derive(Parser)]
#[command(name = "carbis-test-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Print the OpenAPI schema as JSON
    Openapi(openapi::OpenapiArgs),
}
