use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tandem_core::AuthSession;

use crate::error::StorageError;

/// Bearer-token session rows, provisioned by the auth provider (or the
/// operator CLI) and verified on every request.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Insert a session token row.
    async fn insert_auth_session(&self, session: &AuthSession) -> Result<(), StorageError>;

    /// Look up a session by token.
    async fn get_auth_session(&self, token: &str) -> Result<Option<AuthSession>, StorageError>;

    /// Move a session's expiry forward. Returns `true` if the row exists.
    async fn extend_auth_session(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, StorageError>;

    /// Remove a session (sign-out). Returns `true` if a row was deleted.
    async fn delete_auth_session(&self, token: &str) -> Result<bool, StorageError>;

    /// Drop every session past its expiry. Returns the number removed.
    async fn purge_expired_sessions(&self, now: DateTime<Utc>) -> Result<usize, StorageError>;
}
