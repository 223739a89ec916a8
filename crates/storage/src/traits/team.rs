use async_trait::async_trait;
use tandem_core::{MemberProfile, Team, TeamMember};

use crate::error::StorageError;

/// Team CRUD. Deleting a team cascades to its members.
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Insert a new team.
    async fn create_team(&self, team: &Team) -> Result<(), StorageError>;

    /// Get team by ID.
    async fn get_team(&self, id: &str) -> Result<Option<Team>, StorageError>;

    /// All teams owned by a user, newest first.
    async fn list_teams_for_owner(&self, owner_user_id: &str) -> Result<Vec<Team>, StorageError>;

    /// Delete team. Returns `true` if a row was deleted.
    async fn delete_team(&self, id: &str) -> Result<bool, StorageError>;
}

/// Team member CRUD. Deleting a member cascades to agenda items and sessions.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Insert a new member.
    async fn create_member(&self, member: &TeamMember) -> Result<(), StorageError>;

    /// Get member by ID.
    async fn get_member(&self, id: &str) -> Result<Option<TeamMember>, StorageError>;

    /// All members of a team, newest first.
    async fn list_team_members(&self, team_id: &str) -> Result<Vec<TeamMember>, StorageError>;

    /// Delete member. Returns `true` if a row was deleted.
    async fn delete_member(&self, id: &str) -> Result<bool, StorageError>;

    /// Overwrite the five profile fields and the raw input they came from.
    /// Returns the updated member, or `None` if the member does not exist.
    async fn update_member_profile(
        &self,
        id: &str,
        profile: &MemberProfile,
        raw_input: Option<&str>,
    ) -> Result<Option<TeamMember>, StorageError>;
}
