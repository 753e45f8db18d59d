//! Tenant administration.

use axum::Json;
use axum::extract::{Path, Query, State};

use rentdesk_core::types::{PageResponse, TenantId};
use rentdesk_entity::tenant::Tenant;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::path::parse_id;
use crate::extractors::{PaginationParams, TenantScope};
use crate::state::AppState;

/// GET /api/admin/tenants
pub async fn list_tenants(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Tenant>>>> {
    let page = state
        .services
        .platform
        .list_tenants(&ctx, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/admin/tenants/{id}/disable
pub async fn disable_tenant(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Tenant>>> {
    let id: TenantId = parse_id(&id)?;
    let tenant = state.services.platform.disable_tenant(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(tenant)))
}
