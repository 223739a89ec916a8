//! AgendaStore implementation for SQLite.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::params;
use tandem_core::{AgendaItem, AgendaItemUpdate};

use super::{date_to_sql, lock_conn, log_row_error, row_to_item, Storage, ITEM_COLUMNS};
use crate::error::StorageError;
use crate::traits::AgendaStore;

#[async_trait]
impl AgendaStore for Storage {
    async fn create_item(&self, item: &AgendaItem) -> Result<(), StorageError> {
        let conn = lock_conn(self.conn())?;
        conn.execute(
            &format!("INSERT INTO agenda_items ({ITEM_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
            params![
                item.id,
                item.team_member_id,
                item.content,
                item.completed,
                date_to_sql(item.scheduled_date),
                item.created_at.with_timezone(&Utc).to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<Option<AgendaItem>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt =
            conn.prepare(&format!("SELECT {ITEM_COLUMNS} FROM agenda_items WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(row_to_item(row)?)),
            None => Ok(None),
        }
    }

    async fn list_member_items(
        &self,
        team_member_id: &str,
    ) -> Result<Vec<AgendaItem>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM agenda_items WHERE team_member_id = ?1 ORDER BY created_at DESC"
        ))?;
        let items = stmt
            .query_map(params![team_member_id], row_to_item)?
            .filter_map(log_row_error)
            .collect();
        Ok(items)
    }

    async fn update_item(
        &self,
        id: &str,
        update: &AgendaItemUpdate,
    ) -> Result<Option<AgendaItem>, StorageError> {
        // Read-apply-write under one lock; the guard makes it atomic enough
        // for a single-connection backend.
        let conn = lock_conn(self.conn())?;
        let mut stmt =
            conn.prepare(&format!("SELECT {ITEM_COLUMNS} FROM agenda_items WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let mut item = row_to_item(row)?;
        drop(rows);
        drop(stmt);

        if let Some(content) = &update.content {
            item.content = content.clone();
        }
        if let Some(completed) = update.completed {
            item.completed = completed;
        }
        if let Some(scheduled_date) = update.scheduled_date {
            item.scheduled_date = scheduled_date;
        }

        conn.execute(
            "UPDATE agenda_items SET content = ?1, completed = ?2, scheduled_date = ?3 WHERE id = ?4",
            params![item.content, item.completed, date_to_sql(item.scheduled_date), id],
        )?;
        Ok(Some(item))
    }

    async fn delete_item(&self, id: &str) -> Result<bool, StorageError> {
        let conn = lock_conn(self.conn())?;
        let deleted = conn.execute("DELETE FROM agenda_items WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
