//! AgendaStore implementation for PgStorage.

use async_trait::async_trait;
use tandem_core::{AgendaItem, AgendaItemUpdate};

use super::{row_to_item, PgStorage, ITEM_COLUMNS};
use crate::error::StorageError;
use crate::traits::AgendaStore;

#[async_trait]
impl AgendaStore for PgStorage {
    async fn create_item(&self, item: &AgendaItem) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO agenda_items ({ITEM_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)"
        ))
        .bind(&item.id)
        .bind(&item.team_member_id)
        .bind(&item.content)
        .bind(item.completed)
        .bind(item.scheduled_date)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<Option<AgendaItem>, StorageError> {
        let row = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM agenda_items WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_item(&r)).transpose()
    }

    async fn list_member_items(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<AgendaItem>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ITEM_COLUMNS} FROM agenda_items
             WHERE team_member_id = $1 ORDER BY created_at DESC"
        ))
        .bind(team_member_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_item).collect()
    }

    async fn update_item(
        &self,
        id: &str,
        update: &AgendaItemUpdate,
    ) -> Result<Option<AgendaItem>, StorageError> {
        let row = sqlx::query(&format!("SELECT {ITEM_COLUMNS} FROM agenda_items WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let mut item = row_to_item(&row)?;

        if let Some(content) = &update.content {
            item.content = content.clone();
        }
        if let Some(completed) = update.completed {
            item.completed = completed;
        }
        if let Some(scheduled_date) = update.scheduled_date {
            item.scheduled_date = scheduled_date;
        }

        sqlx::query(
            "UPDATE agenda_items SET content = $1, completed = $2, scheduled_date = $3 WHERE id = $4",
        )
        .bind(&item.content)
        .bind(item.completed)
        .bind(item.scheduled_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(Some(item))
    }

    async fn delete_item(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM agenda_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
