use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use tandem_core::AgendaItem;

use crate::api_error::ApiError;
use crate::api_types::{CreateAgendaItemRequest, DeletedResponse, UpdateAgendaItemRequest};
use crate::auth::CurrentUser;
use crate::AppState;

pub async fn list_items(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
) -> Result<Json<Vec<AgendaItem>>, ApiError> {
    Ok(Json(state.agenda.list_items(&user, &member_id).await?))
}

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
    Json(req): Json<CreateAgendaItemRequest>,
) -> Result<Json<AgendaItem>, ApiError> {
    let item =
        state.agenda.create_item(&user, &member_id, &req.content, req.scheduled_date).await?;
    Ok(Json(item))
}

pub async fn update_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<String>,
    Json(req): Json<UpdateAgendaItemRequest>,
) -> Result<Json<AgendaItem>, ApiError> {
    Ok(Json(state.agenda.update_item(&user, &item_id, &req.into_update()).await?))
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(item_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.agenda.delete_item(&user, &item_id).await?;
    Ok(Json(DeletedResponse { deleted: true }))
}
