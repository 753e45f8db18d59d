//! Cross-tenant property listing.

use axum::Json;
use axum::extract::{Query, State};

use rentdesk_core::types::PageResponse;
use rentdesk_entity::property::Property;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, TenantScope};
use crate::state::AppState;

/// GET /api/admin/properties
pub async fn list_all_properties(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Property>>>> {
    let page = state
        .services
        .platform
        .list_all_properties(&ctx, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}
