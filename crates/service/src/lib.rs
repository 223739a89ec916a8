//! Service layer for tandem
//!
//! Centralizes business logic between HTTP handlers and storage/llm: every
//! operation is scoped to the authenticated user's own teams before any
//! read or write goes through.

mod agenda_service;
mod auth_service;
mod error;
mod meeting_service;
mod ownership;
mod profile_service;
mod team_service;

#[cfg(test)]
mod tests;

pub use agenda_service::AgendaService;
pub use auth_service::{AuthService, AUTH_TOKEN_TTL_SECS, REFRESH_WINDOW_SECS};
pub use error::ServiceError;
pub use meeting_service::MeetingService;
pub use profile_service::ProfileService;
pub use team_service::TeamService;
