//! AuthStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tandem_core::AuthSession;

use super::{row_to_auth_session, PgStorage};
use crate::error::StorageError;
use crate::traits::AuthStore;

#[async_trait]
impl AuthStore for PgStorage {
    async fn insert_auth_session(&self, session: &AuthSession) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO auth_sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&session.token)
            .bind(&session.user_id)
            .bind(session.expires_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_auth_session(&self, token: &str) -> Result<Option<AuthSession>, StorageError> {
        let row = sqlx::query("SELECT token, user_id, expires_at FROM auth_sessions WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_auth_session(&r)).transpose()
    }

    async fn extend_auth_session(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE auth_sessions SET expires_at = $1 WHERE token = $2")
            .bind(expires_at)
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_auth_session(&self, token: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn purge_expired_sessions(&self, now: DateTime<Utc>) -> Result<usize, StorageError> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?;
        Ok(usize::try_from(result.rows_affected()).unwrap_or(usize::MAX))
    }
}
