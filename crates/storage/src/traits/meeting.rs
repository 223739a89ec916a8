use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tandem_core::{AgendaItem, MeetingSession, SessionAgendaLink};

use crate::error::StorageError;

/// Meeting session lifecycle and snapshot membership.
#[async_trait]
pub trait MeetingStore: Send + Sync {
    /// Insert a new session row.
    ///
    /// The open-session partial unique index turns a concurrent double start
    /// into `StorageError::Conflict` instead of a second open session.
    async fn insert_session(&self, session: &MeetingSession) -> Result<(), StorageError>;

    /// The open session for a member, if any. Most recent by `started_at`
    /// when backend data is inconsistent.
    async fn get_open_session(
        &self,
        team_member_id: &str,
    ) -> Result<Option<MeetingSession>, StorageError>;

    /// All sessions for a member, newest first.
    async fn list_member_sessions(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<MeetingSession>, StorageError>;

    /// Close the member's open session, setting `ended_at` once.
    /// Returns the closed session, or `None` if no session was open.
    async fn end_open_session(
        &self,
        team_member_id: &str,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<MeetingSession>, StorageError>;

    /// Append agenda items to a session's snapshot, in slice order.
    /// All rows share `added_at`; positions continue from the current max.
    async fn add_session_items(
        &self,
        session_id: &str,
        agenda_item_ids: &[String],
        added_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// The snapshot's agenda items, ordered by `added_at` then `position`.
    /// Items deleted since the snapshot was taken no longer appear.
    async fn get_session_items(&self, session_id: &str)
        -> Result<Vec<AgendaItem>, StorageError>;

    /// Raw snapshot membership rows, in read order.
    async fn get_session_links(
        &self,
        session_id: &str,
    ) -> Result<Vec<SessionAgendaLink>, StorageError>;
}
