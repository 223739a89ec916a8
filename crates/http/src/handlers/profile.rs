use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tandem_core::MemberProfile;
use tandem_service::ServiceError;

use crate::api_error::ApiError;
use crate::api_types::ExtractProfileRequest;
use crate::auth::CurrentUser;
use crate::AppState;

/// `POST /api/profile/extract`: `{text}` in, five profile fields out.
///
/// 400 for missing text, 500 with one generic message for everything the
/// completion API or its response parsing can do wrong.
pub async fn extract_profile(
    State(state): State<Arc<AppState>>,
    CurrentUser(_user): CurrentUser,
    Json(req): Json<ExtractProfileRequest>,
) -> Result<Json<MemberProfile>, ApiError> {
    let profile = state.profile.extract(&req.text).await.map_err(|e| match e {
        ServiceError::InvalidInput(_) => ApiError::BadRequest("text input is required".to_owned()),
        other => ApiError::ExtractionFailed(other),
    })?;
    Ok(Json(profile))
}
