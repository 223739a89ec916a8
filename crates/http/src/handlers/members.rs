use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use tandem_core::{MemberWithAgenda, TeamMember};

use crate::api_error::ApiError;
use crate::api_types::{CreateMemberRequest, DeletedResponse, UpdateProfileRequest};
use crate::auth::CurrentUser;
use crate::AppState;

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<MemberWithAgenda>>, ApiError> {
    Ok(Json(state.teams.list_members(&user, &team_id).await?))
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(team_id): Path<String>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<Json<TeamMember>, ApiError> {
    Ok(Json(state.teams.create_member(&user, &team_id, &req.name).await?))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
) -> Result<Json<TeamMember>, ApiError> {
    Ok(Json(state.teams.get_member(&user, &member_id).await?))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.teams.delete_member(&user, &member_id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}

pub async fn update_member_profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<TeamMember>, ApiError> {
    let member = state
        .teams
        .update_member_profile(&user, &member_id, &req.profile, req.profile_raw_input.as_deref())
        .await?;
    Ok(Json(member))
}
