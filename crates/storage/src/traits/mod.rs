//! Storage backend trait abstraction
//!
//! Async domain traits for storage operations, one per aggregate, so the
//! service layer stays independent of the active backend.

pub mod agenda;
pub mod auth;
pub mod meeting;
pub mod team;

pub use agenda::AgendaStore;
pub use auth::AuthStore;
pub use meeting::MeetingStore;
pub use team::{MemberStore, TeamStore};
