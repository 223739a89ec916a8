//! Ownership checks shared across services.
//!
//! Every mutation traverses the foreign-key chain back to the authenticated
//! user before touching anything: agenda item -> member -> team -> owner.
//! Missing links fail as `NotFound`; a team owned by someone else fails as
//! `AccessDenied`.

use tandem_core::{AgendaItem, AuthUser, Team, TeamMember};
use tandem_storage::traits::{AgendaStore, MemberStore, TeamStore};
use tandem_storage::StorageBackend;

use crate::error::ServiceError;

pub(crate) async fn team_owned_by(
    storage: &StorageBackend,
    user: &AuthUser,
    team_id: &str,
) -> Result<Team, ServiceError> {
    let Some(team) = storage.get_team(team_id).await? else {
        return Err(ServiceError::NotFound { entity: "team", id: team_id.to_owned() });
    };
    if team.owner_user_id != user.user_id {
        return Err(ServiceError::AccessDenied { entity: "team", id: team_id.to_owned() });
    }
    Ok(team)
}

pub(crate) async fn member_owned_by(
    storage: &StorageBackend,
    user: &AuthUser,
    member_id: &str,
) -> Result<TeamMember, ServiceError> {
    let Some(member) = storage.get_member(member_id).await? else {
        return Err(ServiceError::NotFound { entity: "team member", id: member_id.to_owned() });
    };
    team_owned_by(storage, user, &member.team_id).await.map_err(|e| match e {
        // The member is visible but its team isn't the caller's.
        ServiceError::AccessDenied { .. } => {
            ServiceError::AccessDenied { entity: "team member", id: member_id.to_owned() }
        }
        other => other,
    })?;
    Ok(member)
}

pub(crate) async fn item_owned_by(
    storage: &StorageBackend,
    user: &AuthUser,
    item_id: &str,
) -> Result<AgendaItem, ServiceError> {
    let Some(item) = storage.get_item(item_id).await? else {
        return Err(ServiceError::NotFound { entity: "agenda item", id: item_id.to_owned() });
    };
    member_owned_by(storage, user, &item.team_member_id).await.map_err(|e| match e {
        ServiceError::AccessDenied { .. } => {
            ServiceError::AccessDenied { entity: "agenda item", id: item_id.to_owned() }
        }
        other => other,
    })?;
    Ok(item)
}
