//! CORS policy for the root domain and its tenant subdomains.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use rentdesk_auth::HostResolver;
use rentdesk_core::config::CorsConfig;

/// Builds the CORS layer.
///
/// `["*"]` allows any origin. Otherwise the listed origins are allowed, and
/// with `allow_tenant_origins` so is any origin served from the root domain
/// or one of its subdomains.
pub fn build_cors_layer(config: &CorsConfig, resolver: &HostResolver) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let listed: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    if !config.allow_tenant_origins {
        return layer.allow_origin(listed);
    }

    let resolver = resolver.clone();
    layer.allow_origin(AllowOrigin::predicate(move |origin, _| {
        listed.contains(origin) || is_platform_origin(origin, &resolver)
    }))
}

/// Whether `origin` is an `http(s)://` origin on the root domain or below it.
fn is_platform_origin(origin: &HeaderValue, resolver: &HostResolver) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    let Some(host) = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
    else {
        return false;
    };
    resolver.is_root(host) || resolver.resolve(host).is_some()
}
