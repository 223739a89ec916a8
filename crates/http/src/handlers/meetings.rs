use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Local;
use tandem_core::MeetingSession;

use crate::api_error::ApiError;
use crate::api_types::MeetingAgendaResponse;
use crate::auth::CurrentUser;
use crate::AppState;

pub async fn start_meeting(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
) -> Result<Json<MeetingSession>, ApiError> {
    // One calendar-day definition for the whole request, from server-local time.
    let today = Local::now().date_naive();
    Ok(Json(state.meetings.start_session(&user, &member_id, today).await?))
}

pub async fn end_meeting(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
) -> Result<Json<MeetingSession>, ApiError> {
    Ok(Json(state.meetings.end_session(&user, &member_id).await?))
}

pub async fn get_meeting_agenda(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
) -> Result<Json<MeetingAgendaResponse>, ApiError> {
    let session = state.meetings.active_session(&user, &member_id).await?;
    let items = match &session {
        Some(_) => state.meetings.active_session_items(&user, &member_id).await?,
        None => Vec::new(),
    };
    Ok(Json(MeetingAgendaResponse { session, items }))
}

pub async fn list_meetings(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(member_id): Path<String>,
) -> Result<Json<Vec<MeetingSession>>, ApiError> {
    Ok(Json(state.meetings.list_sessions(&user, &member_id).await?))
}
