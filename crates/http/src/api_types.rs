//! Request and response shapes for the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use tandem_core::{AgendaItem, AgendaItemUpdate, MeetingSession, MemberProfile};

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTeamRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateMemberRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateAgendaItemRequest {
    pub content: String,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
}

/// Partial agenda item update. An absent `scheduled_date` leaves the date
/// alone; an explicit `null` clears it.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UpdateAgendaItemRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub scheduled_date: Option<Option<NaiveDate>>,
}

impl UpdateAgendaItemRequest {
    pub(crate) fn into_update(self) -> AgendaItemUpdate {
        AgendaItemUpdate {
            content: self.content,
            completed: self.completed,
            scheduled_date: self.scheduled_date,
        }
    }
}

/// Distinguishes a missing field (outer `None`) from an explicit `null`
/// (inner `None`), which plain `Option<Option<T>>` deserialization flattens.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractProfileRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateProfileRequest {
    #[serde(flatten)]
    pub profile: MemberProfile,
    #[serde(default)]
    pub profile_raw_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeletedResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignOutResponse {
    pub signed_out: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct MeetingAgendaResponse {
    pub session: Option<MeetingSession>,
    pub items: Vec<AgendaItem>,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
