use async_trait::async_trait;
use tandem_core::{AgendaItem, AgendaItemUpdate};

use crate::error::StorageError;

/// Agenda item CRUD.
#[async_trait]
pub trait AgendaStore: Send + Sync {
    /// Insert a new agenda item.
    async fn create_item(&self, item: &AgendaItem) -> Result<(), StorageError>;

    /// Get agenda item by ID.
    async fn get_item(&self, id: &str) -> Result<Option<AgendaItem>, StorageError>;

    /// All agenda items for a member, newest first.
    async fn list_member_items(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<AgendaItem>, StorageError>;

    /// Apply a partial update. Returns the updated item, or `None` if absent.
    async fn update_item(
        &self,
        id: &str,
        update: &AgendaItemUpdate,
    ) -> Result<Option<AgendaItem>, StorageError>;

    /// Delete agenda item. Returns `true` if a row was deleted.
    /// Session snapshot links to the item go with it.
    async fn delete_item(&self, id: &str) -> Result<bool, StorageError>;
}
