//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod agenda;
mod auth;
mod meetings;
mod teams;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tandem_core::{AgendaItem, AuthSession, MeetingSession, SessionAgendaLink, Team, TeamMember};

use crate::error::StorageError;

const POOL_MAX_CONNECTIONS: u32 = 10;
const POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS teams (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    owner_user_id TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS team_members (
    id TEXT PRIMARY KEY,
    team_id TEXT NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    role TEXT,
    current_focus TEXT,
    growth_goals TEXT,
    one_on_one_themes TEXT,
    feedback_preferences TEXT,
    profile_raw_input TEXT,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS agenda_items (
    id TEXT PRIMARY KEY,
    team_member_id TEXT NOT NULL REFERENCES team_members(id) ON DELETE CASCADE,
    content TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    scheduled_date DATE,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS meeting_sessions (
    id TEXT PRIMARY KEY,
    team_member_id TEXT NOT NULL REFERENCES team_members(id) ON DELETE CASCADE,
    started_at TIMESTAMPTZ NOT NULL,
    ended_at TIMESTAMPTZ
);

CREATE TABLE IF NOT EXISTS meeting_session_agenda_items (
    session_id TEXT NOT NULL REFERENCES meeting_sessions(id) ON DELETE CASCADE,
    agenda_item_id TEXT NOT NULL REFERENCES agenda_items(id) ON DELETE CASCADE,
    added_at TIMESTAMPTZ NOT NULL,
    position BIGINT NOT NULL,
    PRIMARY KEY (session_id, agenda_item_id)
);

CREATE TABLE IF NOT EXISTS auth_sessions (
    token TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    expires_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_teams_owner ON teams(owner_user_id);
CREATE INDEX IF NOT EXISTS idx_members_team ON team_members(team_id);
CREATE INDEX IF NOT EXISTS idx_agenda_member ON agenda_items(team_member_id);
CREATE INDEX IF NOT EXISTS idx_sessions_member ON meeting_sessions(team_member_id);
CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_one_open_per_member
    ON meeting_sessions(team_member_id) WHERE ended_at IS NULL;
CREATE INDEX IF NOT EXISTS idx_auth_sessions_expiry ON auth_sessions(expires_at);
";

async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATION_SQL).execute(pool).await?;
    Ok(())
}

// ── row/column helpers ───────────────────────────────────────────

pub(crate) const TEAM_COLUMNS: &str = "id, name, owner_user_id, created_at";

pub(crate) const MEMBER_COLUMNS: &str = "id, team_id, name, role, current_focus, growth_goals, \
     one_on_one_themes, feedback_preferences, profile_raw_input, created_at";

pub(crate) const ITEM_COLUMNS: &str =
    "id, team_member_id, content, completed, scheduled_date, created_at";

pub(crate) const SESSION_COLUMNS: &str = "id, team_member_id, started_at, ended_at";

pub(crate) fn row_to_team(row: &sqlx::postgres::PgRow) -> Result<Team, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Team {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        owner_user_id: row.try_get("owner_user_id")?,
        created_at,
    })
}

pub(crate) fn row_to_member(row: &sqlx::postgres::PgRow) -> Result<TeamMember, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(TeamMember {
        id: row.try_get("id")?,
        team_id: row.try_get("team_id")?,
        name: row.try_get("name")?,
        role: row.try_get("role")?,
        current_focus: row.try_get("current_focus")?,
        growth_goals: row.try_get("growth_goals")?,
        one_on_one_themes: row.try_get("one_on_one_themes")?,
        feedback_preferences: row.try_get("feedback_preferences")?,
        profile_raw_input: row.try_get("profile_raw_input")?,
        created_at,
    })
}

pub(crate) fn row_to_item(row: &sqlx::postgres::PgRow) -> Result<AgendaItem, StorageError> {
    let scheduled_date: Option<NaiveDate> = row.try_get("scheduled_date")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(AgendaItem {
        id: row.try_get("id")?,
        team_member_id: row.try_get("team_member_id")?,
        content: row.try_get("content")?,
        completed: row.try_get("completed")?,
        scheduled_date,
        created_at,
    })
}

pub(crate) fn row_to_session(row: &sqlx::postgres::PgRow) -> Result<MeetingSession, StorageError> {
    let started_at: DateTime<Utc> = row.try_get("started_at")?;
    let ended_at: Option<DateTime<Utc>> = row.try_get("ended_at")?;
    Ok(MeetingSession {
        id: row.try_get("id")?,
        team_member_id: row.try_get("team_member_id")?,
        started_at,
        ended_at,
    })
}

pub(crate) fn row_to_auth_session(
    row: &sqlx::postgres::PgRow,
) -> Result<AuthSession, StorageError> {
    let expires_at: DateTime<Utc> = row.try_get("expires_at")?;
    Ok(AuthSession {
        token: row.try_get("token")?,
        user_id: row.try_get("user_id")?,
        expires_at,
    })
}

pub(crate) fn row_to_link(row: &sqlx::postgres::PgRow) -> Result<SessionAgendaLink, StorageError> {
    let added_at: DateTime<Utc> = row.try_get("added_at")?;
    Ok(SessionAgendaLink {
        session_id: row.try_get("session_id")?,
        agenda_item_id: row.try_get("agenda_item_id")?,
        added_at,
        position: row.try_get("position")?,
    })
}
