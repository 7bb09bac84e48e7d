//! OpenAPI command - prints the schema the server would serve

use clap::Args;

use crate::api::openapi::build_openapi;
use crate::config::AppConfig;
use crate::domain::access::StaticPrivilegeCheck;

#[derive(Args, Debug)]
pub struct OpenapiArgs {
    /// Include privileged operations regardless of configuration
    #[arg(long)]
    pub show_privileged: bool,
}

/// Print the schema as pretty JSON to stdout
pub fn run(args: OpenapiArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    let privileged = args.show_privileged || config.docs.show_privileged;

    let doc = build_openapi(&StaticPrivilegeCheck::new(privileged));
    println!("{}", serde_json::to_string_pretty(&doc)?);

    Ok(())
}
