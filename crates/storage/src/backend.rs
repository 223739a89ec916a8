//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tandem_core::{
    AgendaItem, AgendaItemUpdate, AuthSession, MeetingSession, MemberProfile, SessionAgendaLink,
    Team, TeamMember,
};

use crate::error::StorageError;
use crate::traits::{AgendaStore, AuthStore, MeetingStore, MemberStore, TeamStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }
}

// ── TeamStore ────────────────────────────────────────────────────

#[async_trait]
impl TeamStore for StorageBackend {
    async fn create_team(&self, team: &Team) -> Result<(), StorageError> {
        dispatch!(self, TeamStore, create_team(team))
    }

    async fn get_team(&self, id: &str) -> Result<Option<Team>, StorageError> {
        dispatch!(self, TeamStore, get_team(id))
    }

    async fn list_teams_for_owner(&self, owner_user_id: &str) -> Result<Vec<Team>, StorageError> {
        dispatch!(self, TeamStore, list_teams_for_owner(owner_user_id))
    }

    async fn delete_team(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, TeamStore, delete_team(id))
    }
}

// ── MemberStore ──────────────────────────────────────────────────

#[async_trait]
impl MemberStore for StorageBackend {
    async fn create_member(&self, member: &TeamMember) -> Result<(), StorageError> {
        dispatch!(self, MemberStore, create_member(member))
    }

    async fn get_member(&self, id: &str) -> Result<Option<TeamMember>, StorageError> {
        dispatch!(self, MemberStore, get_member(id))
    }

    async fn list_team_members(&self, team_id: &str) -> Result<Vec<TeamMember>, StorageError> {
        dispatch!(self, MemberStore, list_team_members(team_id))
    }

    async fn delete_member(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, MemberStore, delete_member(id))
    }

    async fn update_member_profile(
        &self,
        id: &str,
        profile: &MemberProfile,
        raw_input: Option<&str>,
    ) -> Result<Option<TeamMember>, StorageError> {
        dispatch!(self, MemberStore, update_member_profile(id, profile, raw_input))
    }
}

// ── AgendaStore ──────────────────────────────────────────────────

#[async_trait]
impl AgendaStore for StorageBackend {
    async fn create_item(&self, item: &AgendaItem) -> Result<(), StorageError> {
        dispatch!(self, AgendaStore, create_item(item))
    }

    async fn get_item(&self, id: &str) -> Result<Option<AgendaItem>, StorageError> {
        dispatch!(self, AgendaStore, get_item(id))
    }

    async fn list_member_items(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<AgendaItem>, StorageError> {
        dispatch!(self, AgendaStore, list_member_items(team_member_id))
    }

    async fn update_item(
        &self,
        id: &str,
        update: &AgendaItemUpdate,
    ) -> Result<Option<AgendaItem>, StorageError> {
        dispatch!(self, AgendaStore, update_item(id, update))
    }

    async fn delete_item(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, AgendaStore, delete_item(id))
    }
}

// ── MeetingStore ─────────────────────────────────────────────────

#[async_trait]
impl MeetingStore for StorageBackend {
    async fn insert_session(&self, session: &MeetingSession) -> Result<(), StorageError> {
        dispatch!(self, MeetingStore, insert_session(session))
    }

    async fn get_open_session(
        &self,
        team_member_id: &str,
    ) -> Result<Option<MeetingSession>, StorageError> {
        dispatch!(self, MeetingStore, get_open_session(team_member_id))
    }

    async fn list_member_sessions(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<MeetingSession>, StorageError> {
        dispatch!(self, MeetingStore, list_member_sessions(team_member_id))
    }

    async fn end_open_session(
        &self,
        team_member_id: &str,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<MeetingSession>, StorageError> {
        dispatch!(self, MeetingStore, end_open_session(team_member_id, ended_at))
    }

    async fn add_session_items(
        &self,
        session_id: &str,
        agenda_item_ids: &[String],
        added_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        dispatch!(self, MeetingStore, add_session_items(session_id, agenda_item_ids, added_at))
    }

    async fn get_session_items(
        &self,
        session_id: &str,
    ) -> Result<Vec<AgendaItem>, StorageError> {
        dispatch!(self, MeetingStore, get_session_items(session_id))
    }

    async fn get_session_links(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionAgendaLink>, StorageError> {
        dispatch!(self, MeetingStore, get_session_links(session_id))
    }
}

// ── AuthStore ────────────────────────────────────────────────────

#[async_trait]
impl AuthStore for StorageBackend {
    async fn insert_auth_session(&self, session: &AuthSession) -> Result<(), StorageError> {
        dispatch!(self, AuthStore, insert_auth_session(session))
    }

    async fn get_auth_session(&self, token: &str) -> Result<Option<AuthSession>, StorageError> {
        dispatch!(self, AuthStore, get_auth_session(token))
    }

    async fn extend_auth_session(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, StorageError> {
        dispatch!(self, AuthStore, extend_auth_session(token, expires_at))
    }

    async fn delete_auth_session(&self, token: &str) -> Result<bool, StorageError> {
        dispatch!(self, AuthStore, delete_auth_session(token))
    }

    async fn purge_expired_sessions(&self, now: DateTime<Utc>) -> Result<usize, StorageError> {
        dispatch!(self, AuthStore, purge_expired_sessions(now))
    }
}
