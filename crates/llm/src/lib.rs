//! LLM adapter for profile extraction from free-text manager notes.

mod ai_types;
mod client;
mod error;
mod profile;

#[cfg(test)]
mod profile_tests;

pub use client::{LlmClient, DEFAULT_MODEL};
pub use error::LlmError;
pub use profile::PROFILE_SYSTEM_PROMPT;
