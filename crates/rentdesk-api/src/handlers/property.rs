//! Property handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use rentdesk_core::types::{PageResponse, PropertyId};
use rentdesk_entity::application::RentalApplication;
use rentdesk_entity::property::Property;

use crate::dto::request::{CreatePropertyBody, SubmitApplicationBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::path::parse_id;
use crate::extractors::{PaginationParams, TenantScope, ValidatedJson};
use crate::state::AppState;

/// GET /api/properties
pub async fn list_properties(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Property>>>> {
    let page = state
        .services
        .properties
        .list(&ctx, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/properties
pub async fn create_property(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    ValidatedJson(body): ValidatedJson<CreatePropertyBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Property>>)> {
    let property = state.services.properties.create(&ctx, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(property))))
}

/// GET /api/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Property>>> {
    let id: PropertyId = parse_id(&id)?;
    let property = state.services.properties.get(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(property)))
}

/// DELETE /api/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let id: PropertyId = parse_id(&id)?;
    state.services.properties.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Property deleted"))))
}

/// POST /api/properties/{id}/applications
pub async fn apply(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<SubmitApplicationBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<RentalApplication>>)> {
    let id: PropertyId = parse_id(&id)?;
    let application = state
        .services
        .applications
        .submit(&ctx, id, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(application))))
}
