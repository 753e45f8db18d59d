//! Resolves the tenant context for the current request.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, HOST};
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use rentdesk_auth::TenantContext;
use rentdesk_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The request's [`TenantContext`], built from the `Host` header and the
/// session token.
///
/// The token is read from an `Authorization: Bearer` header or, failing
/// that, from the session cookie. A missing or invalid token yields an
/// anonymous context; an unknown or disabled subdomain fails the request
/// with 404 before any handler runs.
#[derive(Debug, Clone)]
pub struct TenantScope(pub TenantContext);

impl FromRequestParts<AppState> for TenantScope {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<TenantContext>() {
            return Ok(Self(ctx.clone()));
        }

        let host = request_host(parts).unwrap_or_default();
        let slug = state.resolver.resolve(&host);

        let token = bearer_token(parts).or_else(|| {
            CookieJar::from_headers(&parts.headers)
                .get(&state.config.auth.session_cookie)
                .map(|cookie| cookie.value().to_string())
        });
        let identity = state.sessions.identify(token.as_deref());

        let ctx = state
            .contexts
            .build(slug.as_ref(), Some(identity))
            .await
            .map_err(AppError::from)?;

        parts.extensions.insert(ctx.clone());
        Ok(Self(ctx))
    }
}

/// The host the client addressed: the `Host` header, or the URI authority
/// for HTTP/2 requests.
fn request_host(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| parts.uri.authority().map(|a| a.as_str().to_string()))
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim().to_string())
        .filter(|t| !t.is_empty())
}
