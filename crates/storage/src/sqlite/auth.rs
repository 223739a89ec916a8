//! AuthStore implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::params;
use tandem_core::AuthSession;

use super::{lock_conn, row_to_auth_session, Storage};
use crate::error::StorageError;
use crate::traits::AuthStore;

#[async_trait]
impl AuthStore for Storage {
    async fn insert_auth_session(&self, session: &AuthSession) -> Result<(), StorageError> {
        let conn = lock_conn(self.conn())?;
        conn.execute(
            "INSERT INTO auth_sessions (token, user_id, expires_at) VALUES (?1, ?2, ?3)",
            params![
                session.token,
                session.user_id,
                session.expires_at.with_timezone(&Utc).to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    async fn get_auth_session(&self, token: &str) -> Result<Option<AuthSession>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn
            .prepare("SELECT token, user_id, expires_at FROM auth_sessions WHERE token = ?1")?;
        let mut rows = stmt.query(params![token])?;
        match rows.next()? {
            Some(row) => Ok(Some(row_to_auth_session(row)?)),
            None => Ok(None),
        }
    }

    async fn extend_auth_session(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, StorageError> {
        let conn = lock_conn(self.conn())?;
        let updated = conn.execute(
            "UPDATE auth_sessions SET expires_at = ?1 WHERE token = ?2",
            params![expires_at.with_timezone(&Utc).to_rfc3339(), token],
        )?;
        Ok(updated > 0)
    }

    async fn delete_auth_session(&self, token: &str) -> Result<bool, StorageError> {
        let conn = lock_conn(self.conn())?;
        let deleted =
            conn.execute("DELETE FROM auth_sessions WHERE token = ?1", params![token])?;
        Ok(deleted > 0)
    }

    async fn purge_expired_sessions(&self, now: DateTime<Utc>) -> Result<usize, StorageError> {
        let conn = lock_conn(self.conn())?;
        let purged = conn.execute(
            "DELETE FROM auth_sessions WHERE expires_at <= ?1",
            params![now.with_timezone(&Utc).to_rfc3339()],
        )?;
        Ok(purged)
    }
}
