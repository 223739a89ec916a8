//! MeetingStore implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::params;
use tandem_core::{AgendaItem, MeetingSession, SessionAgendaLink};

use super::{
    lock_conn, log_row_error, row_to_item, row_to_link, row_to_session, Storage, ITEM_COLUMNS,
    SESSION_COLUMNS,
};
use crate::error::StorageError;
use crate::traits::MeetingStore;

#[async_trait]
impl MeetingStore for Storage {
    async fn insert_session(&self, session: &MeetingSession) -> Result<(), StorageError> {
        let conn = lock_conn(self.conn())?;
        conn.execute(
            &format!("INSERT INTO meeting_sessions ({SESSION_COLUMNS}) VALUES (?1, ?2, ?3, ?4)"),
            params![
                session.id,
                session.team_member_id,
                session.started_at.with_timezone(&Utc).to_rfc3339(),
                session.ended_at.map(|d| d.with_timezone(&Utc).to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    async fn get_open_session(
        &self,
        team_member_id: &str,
    ) -> Result<Option<MeetingSession>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SESSION_COLUMNS} FROM meeting_sessions
             WHERE team_member_id = ?1 AND ended_at IS NULL
             ORDER BY started_at DESC LIMIT 1"
        ))?;
        let mut rows = stmt.query(params![team_member_id])?;
        match rows.next()? {
            Some(row) => Ok(Some(row_to_session(row)?)),
            None => Ok(None),
        }
    }

    async fn list_member_sessions(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<MeetingSession>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SESSION_COLUMNS} FROM meeting_sessions
             WHERE team_member_id = ?1 ORDER BY started_at DESC"
        ))?;
        let sessions = stmt
            .query_map(params![team_member_id], row_to_session)?
            .filter_map(log_row_error)
            .collect();
        Ok(sessions)
    }

    async fn end_open_session(
        &self,
        team_member_id: &str,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<MeetingSession>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SESSION_COLUMNS} FROM meeting_sessions
             WHERE team_member_id = ?1 AND ended_at IS NULL
             ORDER BY started_at DESC LIMIT 1"
        ))?;
        let mut rows = stmt.query(params![team_member_id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let mut session = row_to_session(row)?;
        drop(rows);
        drop(stmt);

        conn.execute(
            "UPDATE meeting_sessions SET ended_at = ?1 WHERE id = ?2 AND ended_at IS NULL",
            params![ended_at.with_timezone(&Utc).to_rfc3339(), session.id],
        )?;
        session.ended_at = Some(ended_at);
        Ok(Some(session))
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
        let conn = lock_conn(self.conn())?;
        let next_position: i64 = conn.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM meeting_session_agenda_items
             WHERE session_id = ?1",
            params![session_id],
            |row| row.get(0),
        )?;
        let added_at = added_at.with_timezone(&Utc).to_rfc3339();
        let mut stmt = conn.prepare(
            "INSERT INTO meeting_session_agenda_items (session_id, agenda_item_id, added_at, position)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (offset, item_id) in agenda_item_ids.iter().enumerate() {
            stmt.execute(params![session_id, item_id, added_at, next_position + offset as i64])?;
        }
        Ok(())
    }

    async fn get_session_items(
        &self,
        session_id: &str,
    ) -> Result<Vec<AgendaItem>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let columns = ITEM_COLUMNS
            .split(", ")
            .map(|c| format!("a.{c}"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut stmt = conn.prepare(&format!(
            "SELECT {columns}
             FROM meeting_session_agenda_items l
             JOIN agenda_items a ON a.id = l.agenda_item_id
             WHERE l.session_id = ?1
             ORDER BY l.added_at ASC, l.position ASC"
        ))?;
        let items = stmt
            .query_map(params![session_id], row_to_item)?
            .filter_map(log_row_error)
            .collect();
        Ok(items)
    }

    async fn get_session_links(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionAgendaLink>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn.prepare(
            "SELECT session_id, agenda_item_id, added_at, position
             FROM meeting_session_agenda_items
             WHERE session_id = ?1
             ORDER BY added_at ASC, position ASC",
        )?;
        let links = stmt
            .query_map(params![session_id], row_to_link)?
            .filter_map(log_row_error)
            .collect();
        Ok(links)
    }
}
