use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team owned by exactly one user. Deleting a team cascades to its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub owner_user_id: String,
    pub created_at: DateTime<Utc>,
}

/// A direct report within a team, with optional AI-extracted profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub role: Option<String>,
    pub current_focus: Option<String>,
    pub growth_goals: Option<String>,
    pub one_on_one_themes: Option<String>,
    pub feedback_preferences: Option<String>,
    pub profile_raw_input: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    /// The structured profile fields, detached from identity columns.
    #[must_use]
    pub fn profile(&self) -> MemberProfile {
        MemberProfile {
            role: self.role.clone(),
            current_focus: self.current_focus.clone(),
            growth_goals: self.growth_goals.clone(),
            one_on_one_themes: self.one_on_one_themes.clone(),
            feedback_preferences: self.feedback_preferences.clone(),
        }
    }
}

/// The five structured profile fields extracted from free-text manager notes.
///
/// Every field is optional; an absent field is an explicit `None`, never an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub role: Option<String>,
    pub current_focus: Option<String>,
    pub growth_goals: Option<String>,
    pub one_on_one_themes: Option<String>,
    pub feedback_preferences: Option<String>,
}

impl MemberProfile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.current_focus.is_none()
            && self.growth_goals.is_none()
            && self.one_on_one_themes.is_none()
            && self.feedback_preferences.is_none()
    }
}

/// A member together with their agenda items, as the team detail view loads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberWithAgenda {
    #[serde(flatten)]
    pub member: TeamMember,
    pub agenda_items: Vec<crate::AgendaItem>,
}
