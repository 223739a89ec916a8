use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tandem_core::{AgendaItem, AgendaItemUpdate, AuthUser};
use tandem_storage::traits::{AgendaStore, MeetingStore};
use tandem_storage::StorageBackend;

use crate::error::ServiceError;
use crate::ownership::{item_owned_by, member_owned_by};

/// Agenda item CRUD, owner-scoped.
pub struct AgendaService {
    storage: Arc<StorageBackend>,
}

impl AgendaService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_items(
        &self,
        user: &AuthUser,
        member_id: &str,
    ) -> Result<Vec<AgendaItem>, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        Ok(self.storage.list_member_items(member_id).await?)
    }

    /// Create an agenda item.
    ///
    /// If a meeting session is open for this member the new item is also
    /// appended to the session's snapshot, bypassing the relevance predicate
    /// even when scheduled in the future. This is the only way an active
    /// snapshot grows.
    pub async fn create_item(
        &self,
        user: &AuthUser,
        member_id: &str,
        content: &str,
        scheduled_date: Option<NaiveDate>,
    ) -> Result<AgendaItem, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        let content = content.trim();
        if content.is_empty() {
            return Err(ServiceError::InvalidInput("agenda item content is required".to_owned()));
        }

        let now = Utc::now();
        let item = AgendaItem {
            id: uuid::Uuid::new_v4().to_string(),
            team_member_id: member_id.to_owned(),
            content: content.to_owned(),
            completed: false,
            scheduled_date,
            created_at: now,
        };
        self.storage.create_item(&item).await?;

        if let Some(session) = self.storage.get_open_session(member_id).await? {
            self.storage.add_session_items(&session.id, &[item.id.clone()], now).await?;
        }

        Ok(item)
    }

    pub async fn update_item(
        &self,
        user: &AuthUser,
        item_id: &str,
        update: &AgendaItemUpdate,
    ) -> Result<AgendaItem, ServiceError> {
        item_owned_by(&self.storage, user, item_id).await?;
        self.storage.update_item(item_id, update).await?.ok_or_else(|| {
            ServiceError::NotFound { entity: "agenda item", id: item_id.to_owned() }
        })
    }

    pub async fn toggle_item(
        &self,
        user: &AuthUser,
        item_id: &str,
        completed: bool,
    ) -> Result<AgendaItem, ServiceError> {
        self.update_item(
            user,
            item_id,
            &AgendaItemUpdate { completed: Some(completed), ..Default::default() },
        )
        .await
    }

    pub async fn delete_item(&self, user: &AuthUser, item_id: &str) -> Result<(), ServiceError> {
        item_owned_by(&self.storage, user, item_id).await?;
        self.storage.delete_item(item_id).await?;
        Ok(())
    }
}
