//! TeamStore and MemberStore implementations for PgStorage.

use async_trait::async_trait;
use tandem_core::{MemberProfile, Team, TeamMember};

use super::{row_to_member, row_to_team, PgStorage, MEMBER_COLUMNS, TEAM_COLUMNS};
use crate::error::StorageError;
use crate::traits::{MemberStore, TeamStore};

#[async_trait]
impl TeamStore for PgStorage {
    async fn create_team(&self, team: &Team) -> Result<(), StorageError> {
        sqlx::query(&format!("INSERT INTO teams ({TEAM_COLUMNS}) VALUES ($1, $2, $3, $4)"))
            .bind(&team.id)
            .bind(&team.name)
            .bind(&team.owner_user_id)
            .bind(team.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_team(&self, id: &str) -> Result<Option<Team>, StorageError> {
        let row = sqlx::query(&format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_team(&r)).transpose()
    }

    async fn list_teams_for_owner(
        &self,
        owner_user_id: &str,
    ) -> Result<Vec<Team>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE owner_user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_team).collect()
    }

    async fn delete_team(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl MemberStore for PgStorage {
    async fn create_member(&self, member: &TeamMember) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO team_members ({MEMBER_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
        ))
        .bind(&member.id)
        .bind(&member.team_id)
        .bind(&member.name)
        .bind(&member.role)
        .bind(&member.current_focus)
        .bind(&member.growth_goals)
        .bind(&member.one_on_one_themes)
        .bind(&member.feedback_preferences)
        .bind(&member.profile_raw_input)
        .bind(member.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_member(&self, id: &str) -> Result<Option<TeamMember>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_member(&r)).transpose()
    }

    async fn list_team_members(&self, team_id: &str) -> Result<Vec<TeamMember>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE team_id = $1 ORDER BY created_at DESC"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_member).collect()
    }

    async fn delete_member(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_member_profile(
        &self,
        id: &str,
        profile: &MemberProfile,
        raw_input: Option<&str>,
    ) -> Result<Option<TeamMember>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE team_members SET role = $1, current_focus = $2, growth_goals = $3,
                    one_on_one_themes = $4, feedback_preferences = $5, profile_raw_input = $6
             WHERE id = $7
             RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(&profile.role)
        .bind(&profile.current_focus)
        .bind(&profile.growth_goals)
        .bind(&profile.one_on_one_themes)
        .bind(&profile.feedback_preferences)
        .bind(raw_input)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_member(&r)).transpose()
    }
}
