//! Tenant management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rentdesk_auth::validate_slug;
use rentdesk_core::error::AppError;
use rentdesk_core::types::{PageRequest, UserId};
use rentdesk_database::Stores;
use rentdesk_database::store::{TenantDirectory, TenantStore};
use rentdesk_entity::tenant::{CreateTenant, Tenant, TenantSlug};

use crate::output::{self, OutputFormat};

/// Arguments for tenant commands
#[derive(Debug, Args)]
pub struct TenantArgs {
    /// Tenant subcommand
    #[command(subcommand)]
    pub command: TenantCommand,
}

/// Tenant subcommands
#[derive(Debug, Subcommand)]
pub enum TenantCommand {
    /// List tenants, newest first
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Tenants per page
        #[arg(long, default_value_t = 50)]
        per_page: u64,
    },
    /// Create a tenant for an existing landlord
    Create {
        /// Subdomain label
        slug: String,
        /// Display name
        name: String,
        /// Owning landlord's user ID
        #[arg(long)]
        owner: UserId,
    },
    /// Disable a tenant; its subdomain stops resolving
    Disable {
        /// Subdomain label
        slug: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Tenant display row for table output
#[derive(Debug, Serialize, Tabled)]
struct TenantRow {
    /// Tenant ID
    id: String,
    /// Subdomain label
    slug: String,
    /// Display name
    name: String,
    /// Owning landlord
    owner_id: String,
    /// Active or disabled
    status: String,
    /// Created at
    created_at: String,
}

impl From<&Tenant> for TenantRow {
    fn from(t: &Tenant) -> Self {
        Self {
            id: t.id.to_string(),
            slug: t.slug.to_string(),
            name: t.name.clone(),
            owner_id: t.owner_id.to_string(),
            status: if t.is_active() { "active" } else { "disabled" }.to_string(),
            created_at: t.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute tenant commands
pub async fn execute(
    args: &TenantArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let stores = Stores::postgres(pool.pool().clone());

    match &args.command {
        TenantCommand::List { page, per_page } => {
            let page = stores
                .tenants
                .list_tenants(&PageRequest::new(*page, *per_page))
                .await?;
            let rows: Vec<TenantRow> = page.items.iter().map(TenantRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                println!(
                    "Page {} of {} ({} tenants)",
                    page.page, page.total_pages, page.total_items
                );
            }
        }
        TenantCommand::Create { slug, name, owner } => {
            let slug = TenantSlug::new(slug);
            validate_slug(slug.as_str(), &config.tenancy.reserved_slugs)?;

            let tenant = stores
                .tenants
                .create_tenant(&CreateTenant {
                    slug,
                    name: name.trim().to_string(),
                    owner_id: *owner,
                })
                .await?;

            output::print_success(&format!(
                "Tenant created: https://{}.{}",
                tenant.slug, config.tenancy.root_domain
            ));
            output::print_item(&TenantRow::from(&tenant), format);
        }
        TenantCommand::Disable { slug, force } => {
            let slug = TenantSlug::new(slug);
            let tenant = stores
                .directory
                .find_tenant_by_slug(&slug)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Tenant '{slug}' not found")))?;

            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Disable '{}' ({})? Its subdomain will stop resolving.",
                        tenant.slug, tenant.name
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            stores.tenants.disable_tenant(tenant.id).await?;
            output::print_success(&format!("Tenant '{slug}' disabled."));
            // A server's slug cache is local to it; only its TTL evicts this entry.
            if config.tenancy.cache_ttl_seconds > 0 {
                output::print_kv(
                    "Running servers",
                    &format!(
                        "may serve the subdomain for up to {}s",
                        config.tenancy.cache_ttl_seconds
                    ),
                );
            }
        }
    }

    pool.close().await;
    Ok(())
}
