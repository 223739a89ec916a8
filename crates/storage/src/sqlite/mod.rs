//! SQLite storage implementation

mod agenda;
mod auth;
mod meetings;
mod teams;

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use tandem_core::{AgendaItem, AuthSession, MeetingSession, SessionAgendaLink, Team, TeamMember};

use crate::error::StorageError;
use crate::migrations;

/// SQLite-backed storage. One long-lived connection behind a mutex; the
/// guard is held only for the duration of each statement batch.
#[derive(Clone)]
pub struct Storage {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

pub(crate) fn lock_conn<T>(
    mutex: &Mutex<T>,
) -> Result<std::sync::MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|e: PoisonError<_>| StorageError::Database(format!("lock poisoned: {e}")))
}

pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        }
    }
}

impl Storage {
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Database(format!("open {}: {e}", db_path.display())))?;
        let storage = Self { conn: Arc::new(Mutex::new(conn)) };

        let conn = lock_conn(&storage.conn)?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        Ok(storage)
    }

    pub(crate) fn conn(&self) -> &Mutex<Connection> {
        &self.conn
    }
}

// ── row/column helpers ───────────────────────────────────────────

pub(crate) const TEAM_COLUMNS: &str = "id, name, owner_user_id, created_at";

pub(crate) const MEMBER_COLUMNS: &str = "id, team_id, name, role, current_focus, growth_goals, \
     one_on_one_themes, feedback_preferences, profile_raw_input, created_at";

pub(crate) const ITEM_COLUMNS: &str =
    "id, team_member_id, content, completed, scheduled_date, created_at";

pub(crate) const SESSION_COLUMNS: &str = "id, team_member_id, started_at, ended_at";

fn conversion_err(e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
}

pub(crate) fn parse_utc(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .map_err(conversion_err)
}

pub(crate) fn parse_opt_utc(s: Option<String>) -> rusqlite::Result<Option<DateTime<Utc>>> {
    s.as_deref().map(parse_utc).transpose()
}

pub(crate) fn parse_opt_date(s: Option<String>) -> rusqlite::Result<Option<NaiveDate>> {
    s.as_deref()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(conversion_err))
        .transpose()
}

pub(crate) fn date_to_sql(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

pub(crate) fn row_to_team(row: &rusqlite::Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        name: row.get(1)?,
        owner_user_id: row.get(2)?,
        created_at: parse_utc(&row.get::<_, String>(3)?)?,
    })
}

pub(crate) fn row_to_member(row: &rusqlite::Row<'_>) -> rusqlite::Result<TeamMember> {
    Ok(TeamMember {
        id: row.get(0)?,
        team_id: row.get(1)?,
        name: row.get(2)?,
        role: row.get(3)?,
        current_focus: row.get(4)?,
        growth_goals: row.get(5)?,
        one_on_one_themes: row.get(6)?,
        feedback_preferences: row.get(7)?,
        profile_raw_input: row.get(8)?,
        created_at: parse_utc(&row.get::<_, String>(9)?)?,
    })
}

pub(crate) fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<AgendaItem> {
    Ok(AgendaItem {
        id: row.get(0)?,
        team_member_id: row.get(1)?,
        content: row.get(2)?,
        completed: row.get(3)?,
        scheduled_date: parse_opt_date(row.get(4)?)?,
        created_at: parse_utc(&row.get::<_, String>(5)?)?,
    })
}

pub(crate) fn row_to_session(row: &rusqlite::Row<'_>) -> rusqlite::Result<MeetingSession> {
    Ok(MeetingSession {
        id: row.get(0)?,
        team_member_id: row.get(1)?,
        started_at: parse_utc(&row.get::<_, String>(2)?)?,
        ended_at: parse_opt_utc(row.get(3)?)?,
    })
}

pub(crate) fn row_to_auth_session(row: &rusqlite::Row<'_>) -> rusqlite::Result<AuthSession> {
    Ok(AuthSession {
        token: row.get(0)?,
        user_id: row.get(1)?,
        expires_at: parse_utc(&row.get::<_, String>(2)?)?,
    })
}

pub(crate) fn row_to_link(row: &rusqlite::Row<'_>) -> rusqlite::Result<SessionAgendaLink> {
    Ok(SessionAgendaLink {
        session_id: row.get(0)?,
        agenda_item_id: row.get(1)?,
        added_at: parse_utc(&row.get::<_, String>(2)?)?,
        position: row.get(3)?,
    })
}
