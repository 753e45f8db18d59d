//! Issue session tokens for local testing.

use chrono::Duration;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rentdesk_auth::SessionEncoder;
use rentdesk_core::error::AppError;
use rentdesk_core::types::UserId;
use rentdesk_entity::identity::SessionRole;

use crate::output::{self, OutputFormat};

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Session role: tenant, landlord-owner, team-admin, team-member, super-admin
    #[arg(short, long)]
    pub role: String,

    /// User ID; a random one is generated when omitted
    #[arg(short, long)]
    pub user: Option<UserId>,

    /// Lifetime in minutes; defaults to `auth.session_ttl_minutes`
    #[arg(long)]
    pub ttl_minutes: Option<i64>,
}

#[derive(Debug, Serialize, Tabled)]
struct TokenRow {
    user_id: String,
    role: String,
    expires_at: String,
    token: String,
}

/// Execute the token command
pub async fn execute(
    args: &TokenArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let role: SessionRole = args.role.parse()?;
    let user_id = args.user.unwrap_or_default();

    let encoder = SessionEncoder::new(&config.auth);
    let issued = match args.ttl_minutes {
        Some(minutes) => encoder.issue_with_ttl(user_id, role, Duration::minutes(minutes))?,
        None => encoder.issue(user_id, role)?,
    };

    match format {
        OutputFormat::Json => output::print_item(
            &TokenRow {
                user_id: user_id.to_string(),
                role: role.to_string(),
                expires_at: issued.expires_at.to_rfc3339(),
                token: issued.token,
            },
            format,
        ),
        OutputFormat::Table => {
            output::print_kv("User", &user_id.to_string());
            output::print_kv("Role", role.as_str());
            output::print_kv("Expires", &issued.expires_at.to_rfc3339());
            println!();
            println!("{}", issued.token);
        }
    }

    Ok(())
}
