//! Landlord onboarding on the root domain.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use rentdesk_entity::tenant::Tenant;

use crate::dto::request::CreateTenantBody;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{TenantScope, ValidatedJson};
use crate::state::AppState;

/// POST /api/onboarding
pub async fn create_tenant(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    ValidatedJson(body): ValidatedJson<CreateTenantBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Tenant>>)> {
    let tenant = state
        .services
        .onboarding
        .create_tenant(&ctx, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tenant))))
}
