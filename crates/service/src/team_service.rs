use std::sync::Arc;

use chrono::Utc;
use tandem_core::{AuthUser, MemberProfile, MemberWithAgenda, Team, TeamMember};
use tandem_storage::traits::{AgendaStore, MemberStore, TeamStore};
use tandem_storage::StorageBackend;

use crate::error::ServiceError;
use crate::ownership::{member_owned_by, team_owned_by};

/// Team and member CRUD, owner-scoped.
pub struct TeamService {
    storage: Arc<StorageBackend>,
}

impl TeamService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_teams(&self, user: &AuthUser) -> Result<Vec<Team>, ServiceError> {
        Ok(self.storage.list_teams_for_owner(&user.user_id).await?)
    }

    pub async fn get_team(&self, user: &AuthUser, team_id: &str) -> Result<Team, ServiceError> {
        team_owned_by(&self.storage, user, team_id).await
    }

    pub async fn create_team(&self, user: &AuthUser, name: &str) -> Result<Team, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidInput("team name is required".to_owned()));
        }
        let team = Team {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            owner_user_id: user.user_id.clone(),
            created_at: Utc::now(),
        };
        self.storage.create_team(&team).await?;
        Ok(team)
    }

    pub async fn delete_team(&self, user: &AuthUser, team_id: &str) -> Result<(), ServiceError> {
        team_owned_by(&self.storage, user, team_id).await?;
        self.storage.delete_team(team_id).await?;
        Ok(())
    }

    /// Members of a team with their agenda items, as the team view renders them.
    pub async fn list_members(
        &self,
        user: &AuthUser,
        team_id: &str,
    ) -> Result<Vec<MemberWithAgenda>, ServiceError> {
        team_owned_by(&self.storage, user, team_id).await?;
        let members = self.storage.list_team_members(team_id).await?;
        let mut result = Vec::with_capacity(members.len());
        for member in members {
            let agenda_items = self.storage.list_member_items(&member.id).await?;
            result.push(MemberWithAgenda { member, agenda_items });
        }
        Ok(result)
    }

    pub async fn create_member(
        &self,
        user: &AuthUser,
        team_id: &str,
        name: &str,
    ) -> Result<TeamMember, ServiceError> {
        team_owned_by(&self.storage, user, team_id).await?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidInput("member name is required".to_owned()));
        }
        let member = TeamMember {
            id: uuid::Uuid::new_v4().to_string(),
            team_id: team_id.to_owned(),
            name: name.to_owned(),
            role: None,
            current_focus: None,
            growth_goals: None,
            one_on_one_themes: None,
            feedback_preferences: None,
            profile_raw_input: None,
            created_at: Utc::now(),
        };
        self.storage.create_member(&member).await?;
        Ok(member)
    }

    pub async fn get_member(
        &self,
        user: &AuthUser,
        member_id: &str,
    ) -> Result<TeamMember, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await
    }

    pub async fn delete_member(
        &self,
        user: &AuthUser,
        member_id: &str,
    ) -> Result<(), ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        self.storage.delete_member(member_id).await?;
        Ok(())
    }

    /// Overwrite a member's profile fields with the (possibly edited)
    /// extraction result, keeping the raw notes they came from.
    pub async fn update_member_profile(
        &self,
        user: &AuthUser,
        member_id: &str,
        profile: &MemberProfile,
        raw_input: Option<&str>,
    ) -> Result<TeamMember, ServiceError> {
        member_owned_by(&self.storage, user, member_id).await?;
        self.storage
            .update_member_profile(member_id, profile, raw_input)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                entity: "team member",
                id: member_id.to_owned(),
            })
    }
}
