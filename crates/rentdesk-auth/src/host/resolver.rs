//! Maps a request's `Host` header onto a landlord slug.

use rentdesk_core::config::TenancyConfig;
use rentdesk_entity::tenant::TenantSlug;

/// Resolve the landlord slug addressed by `host_header`.
///
/// Returns `None` for the bare root domain, for hosts outside the root
/// domain, and when the label in front of the root domain is empty. A
/// foreign host is not an error; the caller simply has no tenant.
///
/// Port suffixes (including bracketed IPv6 literals) and a single trailing
/// dot are ignored on both sides, and matching is case-insensitive. The
/// slug is returned raw: `a.b.rentals.app` yields `a.b`.
pub fn resolve(host_header: &str, root_domain: &str) -> Option<TenantSlug> {
    let host = normalize(host_header);
    let root = normalize(root_domain);

    if root.is_empty() || host == root {
        return None;
    }

    let label = host.strip_suffix(root.as_str())?.strip_suffix('.')?;
    if label.is_empty() {
        return None;
    }

    Some(TenantSlug::new(label))
}

/// Lower-case, drop the port and one trailing dot.
fn normalize(raw: &str) -> String {
    let host = strip_port(raw.trim());
    let host = host.strip_suffix('.').unwrap_or(host);
    host.to_ascii_lowercase()
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // [v6]:port
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Resolves hosts against the configured root domain.
#[derive(Debug, Clone)]
pub struct HostResolver {
    root_domain: String,
}

impl HostResolver {
    /// Create a resolver for the given root domain.
    pub fn new(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
        }
    }

    /// Create a resolver from the tenancy configuration.
    pub fn from_config(config: &TenancyConfig) -> Self {
        Self::new(config.root_domain.clone())
    }

    /// The configured root domain.
    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    /// Resolve a `Host` header value. See [`resolve`].
    pub fn resolve(&self, host_header: &str) -> Option<TenantSlug> {
        resolve(host_header, &self.root_domain)
    }

    /// Whether the host is the bare root domain.
    pub fn is_root(&self, host_header: &str) -> bool {
        normalize(host_header) == normalize(&self.root_domain)
    }
}
