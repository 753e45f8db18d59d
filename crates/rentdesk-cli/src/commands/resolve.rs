//! Show how a `Host` header maps to a tenant.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rentdesk_auth::HostResolver;
use rentdesk_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Host header values to resolve
    #[arg(required = true)]
    pub hosts: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ResolutionRow {
    host: String,
    tenant: String,
}

/// Execute the resolve command. Pure: no database access.
pub async fn execute(
    args: &ResolveArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let resolver = HostResolver::from_config(&config.tenancy);

    let rows: Vec<ResolutionRow> = args
        .hosts
        .iter()
        .map(|host| ResolutionRow {
            host: host.clone(),
            tenant: resolver
                .resolve(host)
                .map(|slug| slug.to_string())
                .unwrap_or_else(|| "(root)".to_string()),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
