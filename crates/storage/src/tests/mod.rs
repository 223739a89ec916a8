//! Test utilities and module declarations for storage tests.

use chrono::{DateTime, NaiveDate, Utc};
use tandem_core::{AgendaItem, MeetingSession, Team, TeamMember};
use tempfile::TempDir;

use crate::Storage;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_team(id: &str, owner_user_id: &str) -> Team {
    Team {
        id: id.to_owned(),
        name: format!("Team {id}"),
        owner_user_id: owner_user_id.to_owned(),
        created_at: Utc::now(),
    }
}

pub fn create_test_member(id: &str, team_id: &str) -> TeamMember {
    TeamMember {
        id: id.to_owned(),
        team_id: team_id.to_owned(),
        name: format!("Member {id}"),
        role: None,
        current_focus: None,
        growth_goals: None,
        one_on_one_themes: None,
        feedback_preferences: None,
        profile_raw_input: None,
        created_at: Utc::now(),
    }
}

pub fn create_test_item(
    id: &str,
    team_member_id: &str,
    completed: bool,
    scheduled_date: Option<NaiveDate>,
) -> AgendaItem {
    AgendaItem {
        id: id.to_owned(),
        team_member_id: team_member_id.to_owned(),
        content: format!("Item {id}"),
        completed,
        scheduled_date,
        created_at: Utc::now(),
    }
}

pub fn create_test_session(id: &str, team_member_id: &str) -> MeetingSession {
    MeetingSession {
        id: id.to_owned(),
        team_member_id: team_member_id.to_owned(),
        started_at: Utc::now(),
        ended_at: None,
    }
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

mod agenda_tests;
mod auth_tests;
mod team_tests;
