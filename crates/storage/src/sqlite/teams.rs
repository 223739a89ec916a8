//! TeamStore and MemberStore implementations for SQLite.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::params;
use tandem_core::{MemberProfile, Team, TeamMember};

use super::{
    lock_conn, log_row_error, row_to_member, row_to_team, Storage, MEMBER_COLUMNS, TEAM_COLUMNS,
};
use crate::error::StorageError;
use crate::traits::{MemberStore, TeamStore};

#[async_trait]
impl TeamStore for Storage {
    async fn create_team(&self, team: &Team) -> Result<(), StorageError> {
        let conn = lock_conn(self.conn())?;
        conn.execute(
            "INSERT INTO teams (id, name, owner_user_id, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                team.id,
                team.name,
                team.owner_user_id,
                team.created_at.with_timezone(&Utc).to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    async fn get_team(&self, id: &str) -> Result<Option<Team>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt =
            conn.prepare(&format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(row_to_team(row)?)),
            None => Ok(None),
        }
    }

    async fn list_teams_for_owner(
        &self,
        owner_user_id: &str,
    ) -> Result<Vec<Team>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE owner_user_id = ?1 ORDER BY created_at DESC"
        ))?;
        let teams = stmt
            .query_map(params![owner_user_id], row_to_team)?
            .filter_map(log_row_error)
            .collect();
        Ok(teams)
    }

    async fn delete_team(&self, id: &str) -> Result<bool, StorageError> {
        let conn = lock_conn(self.conn())?;
        let deleted = conn.execute("DELETE FROM teams WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

#[async_trait]
impl MemberStore for Storage {
    async fn create_member(&self, member: &TeamMember) -> Result<(), StorageError> {
        let conn = lock_conn(self.conn())?;
        conn.execute(
            &format!("INSERT INTO team_members ({MEMBER_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"),
            params![
                member.id,
                member.team_id,
                member.name,
                member.role,
                member.current_focus,
                member.growth_goals,
                member.one_on_one_themes,
                member.feedback_preferences,
                member.profile_raw_input,
                member.created_at.with_timezone(&Utc).to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    async fn get_member(&self, id: &str) -> Result<Option<TeamMember>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt =
            conn.prepare(&format!("SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(row_to_member(row)?)),
            None => Ok(None),
        }
    }

    async fn list_team_members(&self, team_id: &str) -> Result<Vec<TeamMember>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE team_id = ?1 ORDER BY created_at DESC"
        ))?;
        let members = stmt
            .query_map(params![team_id], row_to_member)?
            .filter_map(log_row_error)
            .collect();
        Ok(members)
    }

    async fn delete_member(&self, id: &str) -> Result<bool, StorageError> {
        let conn = lock_conn(self.conn())?;
        let deleted = conn.execute("DELETE FROM team_members WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    async fn update_member_profile(
        &self,
        id: &str,
        profile: &MemberProfile,
        raw_input: Option<&str>,
    ) -> Result<Option<TeamMember>, StorageError> {
        let conn = lock_conn(self.conn())?;
        let updated = conn.execute(
            "UPDATE team_members SET role = ?1, current_focus = ?2, growth_goals = ?3,
                    one_on_one_themes = ?4, feedback_preferences = ?5, profile_raw_input = ?6
             WHERE id = ?7",
            params![
                profile.role,
                profile.current_focus,
                profile.growth_goals,
                profile.one_on_one_themes,
                profile.feedback_preferences,
                raw_input,
                id,
            ],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        let mut stmt =
            conn.prepare(&format!("SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(row_to_member(row)?)),
            None => Ok(None),
        }
    }
}
