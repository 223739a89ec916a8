//! MeetingStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tandem_core::{AgendaItem, MeetingSession, SessionAgendaLink};

use super::{row_to_item, row_to_link, row_to_session, PgStorage, ITEM_COLUMNS, SESSION_COLUMNS};
use crate::error::StorageError;
use crate::traits::MeetingStore;

#[async_trait]
impl MeetingStore for PgStorage {
    async fn insert_session(&self, session: &MeetingSession) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO meeting_sessions ({SESSION_COLUMNS}) VALUES ($1, $2, $3, $4)"
        ))
        .bind(&session.id)
        .bind(&session.team_member_id)
        .bind(session.started_at)
        .bind(session.ended_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_open_session(
        &self,
        team_member_id: &str,
    ) -> Result<Option<MeetingSession>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM meeting_sessions
             WHERE team_member_id = $1 AND ended_at IS NULL
             ORDER BY started_at DESC LIMIT 1"
        ))
        .bind(team_member_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_session(&r)).transpose()
    }

    async fn list_member_sessions(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<MeetingSession>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM meeting_sessions
             WHERE team_member_id = $1 ORDER BY started_at DESC"
        ))
        .bind(team_member_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_session).collect()
    }

    async fn end_open_session(
        &self,
        team_member_id: &str,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<MeetingSession>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE meeting_sessions SET ended_at = $1
             WHERE id = (
                 SELECT id FROM meeting_sessions
                 WHERE team_member_id = $2 AND ended_at IS NULL
                 ORDER BY started_at DESC LIMIT 1
             )
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(ended_at)
        .bind(team_member_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_session(&r)).transpose()
    }

    async fn add_session_items(
        &self,
        session_id: &str,
        agenda_item_ids: &[String],
        added_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        if agenda_item_ids.is_empty() {
            return Ok(());
        }
        let next_position: i64 = sqlx::query(
            "SELECT COALESCE(MAX(position) + 1, 0) AS next FROM meeting_session_agenda_items
             WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_one(&self.pool)
        .await?
        .try_get("next")?;

        for (offset, item_id) in agenda_item_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO meeting_session_agenda_items (session_id, agenda_item_id, added_at, position)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(session_id)
            .bind(item_id)
            .bind(added_at)
            .bind(next_position + offset as i64)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn get_session_items(
        &self,
        session_id: &str,
    ) -> Result<Vec<AgendaItem>, StorageError> {
        let columns = ITEM_COLUMNS
            .split(", ")
            .map(|c| format!("a.{c}"))
            .collect::<Vec<_>>()
            .join(", ");
        let rows = sqlx::query(&format!(
            "SELECT {columns}
             FROM meeting_session_agenda_items l
             JOIN agenda_items a ON a.id = l.agenda_item_id
             WHERE l.session_id = $1
             ORDER BY l.added_at ASC, l.position ASC"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_item).collect()
    }

    async fn get_session_links(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionAgendaLink>, StorageError> {
        let rows = sqlx::query(
            "SELECT session_id, agenda_item_id, added_at, position
             FROM meeting_session_agenda_items
             WHERE session_id = $1
             ORDER BY added_at ASC, position ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_link).collect()
    }
}
