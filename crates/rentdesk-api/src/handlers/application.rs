//! Rental application handlers.

use axum::Json;
use axum::extract::{Path, State};

use rentdesk_core::types::ApplicationId;
use rentdesk_entity::application::RentalApplication;

use crate::dto::request::DecisionBody;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::path::parse_id;
use crate::extractors::{TenantScope, ValidatedJson};
use crate::state::AppState;

/// GET /api/applications/mine
pub async fn list_mine(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
) -> ApiResult<Json<ApiResponse<Vec<RentalApplication>>>> {
    let applications = state.services.applications.list_mine(&ctx).await?;
    Ok(Json(ApiResponse::ok(applications)))
}

/// GET /api/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<RentalApplication>>> {
    let id: ApplicationId = parse_id(&id)?;
    let application = state.services.applications.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// PUT /api/applications/{id}/decision
pub async fn decide(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<DecisionBody>,
) -> ApiResult<Json<ApiResponse<RentalApplication>>> {
    let id: ApplicationId = parse_id(&id)?;
    let application = state
        .services
        .applications
        .decide(&ctx, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(application)))
}
