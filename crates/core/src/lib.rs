//! Core types for tandem
//!
//! This crate contains domain types shared across all other crates.

mod agenda;
mod auth;
mod env_config;
mod json_utils;
mod meeting;
mod team;

pub use agenda::*;
pub use auth::*;
pub use env_config::*;
pub use json_utils::*;
pub use meeting::*;
pub use team::*;
