//! The tenant behind the requested host, and the caller's view of it.

use axum::Json;

use rentdesk_core::error::AppError;

use crate::dto::response::{ApiResponse, TenantResponse, WhoAmIResponse};
use crate::error::ApiResult;
use crate::extractors::TenantScope;

/// GET /api/tenant
///
/// Public: anyone reaching a landlord's subdomain may see who it belongs to.
pub async fn current_tenant(
    TenantScope(ctx): TenantScope,
) -> ApiResult<Json<ApiResponse<TenantResponse>>> {
    let tenant = ctx
        .tenant()
        .ok_or_else(|| AppError::not_found("No tenant is served at this address"))?;

    Ok(Json(ApiResponse::ok(TenantResponse {
        id: tenant.id,
        slug: tenant.slug.to_string(),
        name: tenant.name.clone(),
    })))
}

/// GET /api/me
pub async fn whoami(TenantScope(ctx): TenantScope) -> Json<ApiResponse<WhoAmIResponse>> {
    Json(ApiResponse::ok(WhoAmIResponse::from(&ctx)))
}
