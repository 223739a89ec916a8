use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tandem_core::{relevant_now_open, AgendaItem, AuthUser, MeetingSession};
use tandem_storage::traits::{AgendaStore, MeetingStore};
use tandem_storage::{StorageBackend, StorageError};

use crate::error::ServiceError;
use crate::ownership::member_owned_by;

/// Meeting session lifecycle and the agenda snapshot rule.
///
/// Starting a session freezes the set of agenda items that are relevant at
/// that moment; later edits never re-derive it. `today` is passed in so one
/// calendar-day definition holds per request.
pub struct MeetingService {
    storage: Arc<StorageBackend>,
}

impl MeetingService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Start a session for a member and snapshot their relevant open items.
    ///
    /// Fails with `Conflict` if a session is already open; the storage
    /// layer's unique index makes this race-safe under concurrent starts.
    pub async fn start_session(
        &self,
        user: &AuthUser,
        member_id: &str,
        today: NaiveDate,
    ) -> Result<MeetingSession, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;

        let now = Utc::now();
        let session = MeetingSession {
            id: uuid::Uuid::new_v4().to_string(),
            team_member_id: member_id.to_owned(),
            started_at: now,
            ended_at: None,
        };
        self.storage.insert_session(&session).await.map_err(|e| match e {
            StorageError::Conflict(_) => ServiceError::Conflict(
                "a meeting session is already open for this member".to_owned(),
            ),
            other => ServiceError::Storage(other),
        })?;

        let mut relevant: Vec<AgendaItem> = self
            .storage
            .list_member_items(member_id)
            .await?
            .into_iter()
            .filter(|item| relevant_now_open(item, today))
            .collect();
        // One shared added_at for the batch; insertion order (and the
        // position tie-breaker) comes from item age, oldest first.
        relevant.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let ids: Vec<String> = relevant.into_iter().map(|item| item.id).collect();
        self.storage.add_session_items(&session.id, &ids, now).await?;

        Ok(session)
    }

    /// End the member's open session. The snapshot rows stay behind as the
    /// permanent record of what was discussed.
    pub async fn end_session(
        &self,
        user: &AuthUser,
        member_id: &str,
    ) -> Result<MeetingSession, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        self.storage.end_open_session(member_id, Utc::now()).await?.ok_or_else(|| {
            ServiceError::NotFound { entity: "open meeting session", id: member_id.to_owned() }
        })
    }

    pub async fn active_session(
        &self,
        user: &AuthUser,
        member_id: &str,
    ) -> Result<Option<MeetingSession>, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        Ok(self.storage.get_open_session(member_id).await?)
    }

    /// The active session's agenda items in `added_at`-ascending order, the
    /// ordering contract the UI renders. Empty when no session is open.
    pub async fn active_session_items(
        &self,
        user: &AuthUser,
        member_id: &str,
    ) -> Result<Vec<AgendaItem>, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        match self.storage.get_open_session(member_id).await? {
            Some(session) => Ok(self.storage.get_session_items(&session.id).await?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn list_sessions(
        &self,
        user: &AuthUser,
        member_id: &str,
    ) -> Result<Vec<MeetingSession>, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        Ok(self.storage.list_member_sessions(member_id).await?)
    }
}
