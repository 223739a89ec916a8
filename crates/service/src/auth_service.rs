use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tandem_core::{AuthSession, AuthUser};
use tandem_storage::traits::AuthStore;
use tandem_storage::StorageBackend;

use crate::error::ServiceError;

/// Lifetime of an issued session token.
pub const AUTH_TOKEN_TTL_SECS: i64 = 3600;

/// Sessions this close to expiry are refreshed transparently during
/// verification, so they don't die mid-request.
pub const REFRESH_WINDOW_SECS: i64 = 300;

/// Verifies bearer-token sessions and keeps them alive near expiry.
pub struct AuthService {
    storage: Arc<StorageBackend>,
}

impl AuthService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Resolve a token to the authenticated user.
    ///
    /// Missing or expired tokens fail with `Unauthenticated`; a token within
    /// the refresh window gets its expiry pushed out before returning.
    pub async fn verify(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthUser, ServiceError> {
        let Some(session) = self.storage.get_auth_session(token).await? else {
            return Err(ServiceError::Unauthenticated);
        };

        if session.is_expired(now) {
            if let Err(e) = self.storage.delete_auth_session(token).await {
                tracing::warn!("failed to drop expired auth session: {e}");
            }
            return Err(ServiceError::Unauthenticated);
        }

        if (session.expires_at - now) < Duration::seconds(REFRESH_WINDOW_SECS) {
            let extended = now + Duration::seconds(AUTH_TOKEN_TTL_SECS);
            self.storage.extend_auth_session(token, extended).await?;
        }

        Ok(AuthUser { user_id: session.user_id })
    }

    /// Mint a session token for a user. Used by the operator CLI; in
    /// production the auth provider writes these rows.
    pub async fn issue(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthSession, ServiceError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ServiceError::InvalidInput("user id is required".to_owned()));
        }
        let session = AuthSession {
            token: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_owned(),
            expires_at: now + Duration::seconds(AUTH_TOKEN_TTL_SECS),
        };
        self.storage.insert_auth_session(&session).await?;
        Ok(session)
    }

    /// Sign out: drop the session row. Returns `true` if it existed.
    pub async fn revoke(&self, token: &str) -> Result<bool, ServiceError> {
        Ok(self.storage.delete_auth_session(token).await?)
    }

    /// Housekeeping sweep for tokens past their expiry.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, ServiceError> {
        Ok(self.storage.purge_expired_sessions(now).await?)
    }
}
