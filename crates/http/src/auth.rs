//! Bearer-token auth boundary for all `/api` routes.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::Utc;
use tandem_core::AuthUser;

use crate::api_error::ApiError;
use crate::AppState;

/// Extractor that verifies the request's bearer token.
///
/// Verification transparently refreshes sessions that are close to expiry,
/// so a request never dies to an expiring token mid-flight.
pub struct CurrentUser(pub AuthUser);

pub(crate) fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_owned()))
}

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let user = state.auth.verify(token, Utc::now()).await?;
        Ok(Self(user))
    }
}
