use std::sync::Arc;

use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::Json;

use crate::api_error::ApiError;
use crate::api_types::SignOutResponse;
use crate::auth::bearer_token;
use crate::AppState;

/// The raw bearer token, for routes that act on the session itself.
pub(crate) struct SessionToken(pub String);

impl FromRequestParts<Arc<AppState>> for SessionToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_token(parts)?.to_owned()))
    }
}

pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    SessionToken(token): SessionToken,
) -> Result<Json<SignOutResponse>, ApiError> {
    let signed_out = state.auth.revoke(&token).await?;
    Ok(Json(SignOutResponse { signed_out }))
}
