//! Subdomain tenancy configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for resolving landlords from request hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenancyConfig {
    /// The application's root domain, e.g. `rentals.app`. Landlords live on
    /// `{slug}.{root_domain}`. A port suffix is ignored during matching.
    pub root_domain: String,
    /// Upper bound for the tenant/membership lookups made while assembling
    /// a request's tenant context, in milliseconds.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,
    /// How long a resolved slug stays cached, in seconds (0 disables caching).
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached slugs.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Labels that can never be claimed as a landlord slug.
    #[serde(default = "default_reserved_slugs")]
    pub reserved_slugs: Vec<String>,
}

impl TenancyConfig {
    /// Build a configuration for the given root domain with defaults elsewhere.
    pub fn for_root(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
            lookup_timeout_ms: default_lookup_timeout(),
            cache_ttl_seconds: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
            reserved_slugs: default_reserved_slugs(),
        }
    }

    /// Lookup timeout as a [`Duration`].
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

fn default_lookup_timeout() -> u64 {
    2000
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_cache_capacity() -> u64 {
    10_000
}

fn default_reserved_slugs() -> Vec<String> {
    ["www", "api", "admin", "app", "mail"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
