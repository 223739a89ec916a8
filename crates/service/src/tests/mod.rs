//! Test utilities and module declarations for service tests.

use std::sync::Arc;

use chrono::NaiveDate;
use tandem_core::{AuthUser, Team, TeamMember};
use tandem_storage::StorageBackend;
use tempfile::TempDir;

use crate::{AgendaService, AuthService, MeetingService, TeamService};

pub struct Ctx {
    pub storage: Arc<StorageBackend>,
    pub teams: TeamService,
    pub agenda: AgendaService,
    pub meetings: MeetingService,
    pub auth: AuthService,
}

pub fn setup() -> (Ctx, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage =
        Arc::new(StorageBackend::new_sqlite(&temp_dir.path().join("test.db")).unwrap());
    let ctx = Ctx {
        storage: storage.clone(),
        teams: TeamService::new(storage.clone()),
        agenda: AgendaService::new(storage.clone()),
        meetings: MeetingService::new(storage.clone()),
        auth: AuthService::new(storage),
    };
    (ctx, temp_dir)
}

pub fn user(id: &str) -> AuthUser {
    AuthUser { user_id: id.to_owned() }
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// One team with one member, owned by `user-1`.
pub async fn seeded_member(ctx: &Ctx) -> (Team, TeamMember) {
    let owner = user("user-1");
    let team = ctx.teams.create_team(&owner, "Platform").await.unwrap();
    let member = ctx.teams.create_member(&owner, &team.id, "Sarah").await.unwrap();
    (team, member)
}

mod agenda_tests;
mod auth_tests;
mod meeting_tests;
mod profile_tests;
