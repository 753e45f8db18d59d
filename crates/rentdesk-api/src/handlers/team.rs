//! Team management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use rentdesk_core::types::UserId;
use rentdesk_entity::membership::TeamMembership;

use crate::dto::request::{AddMemberBody, ChangeRoleBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::path::parse_id;
use crate::extractors::{TenantScope, ValidatedJson};
use crate::state::AppState;

/// GET /api/team
pub async fn list_members(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
) -> ApiResult<Json<ApiResponse<Vec<TeamMembership>>>> {
    let members = state.services.team.list_members(&ctx).await?;
    Ok(Json(ApiResponse::ok(members)))
}

/// POST /api/team
pub async fn add_member(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    ValidatedJson(body): ValidatedJson<AddMemberBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<TeamMembership>>)> {
    let member = state.services.team.add_member(&ctx, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(member))))
}

/// PUT /api/team/{user_id}
pub async fn change_role(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(user_id): Path<String>,
    ValidatedJson(body): ValidatedJson<ChangeRoleBody>,
) -> ApiResult<Json<ApiResponse<TeamMembership>>> {
    let user_id: UserId = parse_id(&user_id)?;
    let member = state
        .services
        .team
        .change_role(&ctx, user_id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// DELETE /api/team/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    TenantScope(ctx): TenantScope,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let user_id: UserId = parse_id(&user_id)?;
    state.services.team.remove_member(&ctx, user_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Member removed"))))
}
