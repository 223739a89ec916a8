//! HTTP API server for tandem.

pub mod api_error;
mod api_types;
mod auth;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use tandem_service::{AgendaService, AuthService, MeetingService, ProfileService, TeamService};

pub use api_types::VersionResponse;
pub use auth::CurrentUser;

/// Shared application state for all HTTP handlers.
///
/// Services are constructed once at process start around a single storage
/// backend and LLM client, then injected here; no per-request clients.
pub struct AppState {
    pub auth: AuthService,
    pub teams: TeamService,
    pub agenda: AgendaService,
    pub meetings: MeetingService,
    pub profile: ProfileService,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/profile/extract", post(handlers::profile::extract_profile))
        .route("/api/teams", get(handlers::teams::list_teams).post(handlers::teams::create_team))
        .route(
            "/api/teams/{id}",
            get(handlers::teams::get_team).delete(handlers::teams::delete_team),
        )
        .route(
            "/api/teams/{id}/members",
            get(handlers::members::list_members).post(handlers::members::create_member),
        )
        .route(
            "/api/members/{id}",
            get(handlers::members::get_member).delete(handlers::members::delete_member),
        )
        .route("/api/members/{id}/profile", put(handlers::members::update_member_profile))
        .route(
            "/api/members/{id}/agenda",
            get(handlers::agenda::list_items).post(handlers::agenda::create_item),
        )
        .route(
            "/api/agenda/{id}",
            put(handlers::agenda::update_item).delete(handlers::agenda::delete_item),
        )
        .route("/api/members/{id}/meeting/start", post(handlers::meetings::start_meeting))
        .route("/api/members/{id}/meeting/end", post(handlers::meetings::end_meeting))
        .route("/api/members/{id}/meeting/agenda", get(handlers::meetings::get_meeting_agenda))
        .route("/api/members/{id}/meetings", get(handlers::meetings::list_meetings))
        .route("/api/auth/signout", post(handlers::auth::sign_out))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
