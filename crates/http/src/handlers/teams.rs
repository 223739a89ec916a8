use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use tandem_core::Team;

use crate::api_error::ApiError;
use crate::api_types::{CreateTeamRequest, DeletedResponse};
use crate::auth::CurrentUser;
use crate::AppState;

pub async fn list_teams(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Team>>, ApiError> {
    Ok(Json(state.teams.list_teams(&user).await?))
}

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Json<Team>, ApiError> {
    Ok(Json(state.teams.create_team(&user, &req.name).await?))
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(team_id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    Ok(Json(state.teams.get_team(&user, &team_id).await?))
}

pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(team_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.teams.delete_team(&user, &team_id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
