use std::sync::Arc;

use tandem_core::MemberProfile;
use tandem_llm::LlmClient;

use crate::error::ServiceError;

/// Pass-through to the completion API for profile extraction.
pub struct ProfileService {
    llm: Arc<LlmClient>,
}

impl ProfileService {
    #[must_use]
    pub const fn new(llm: Arc<LlmClient>) -> Self {
        Self { llm }
    }

    /// Extract the five profile fields from free-text manager notes.
    ///
    /// Empty text is rejected before the remote call; remote or parse
    /// failures surface as a single `ExternalService` error, untried.
    pub async fn extract(&self, text: &str) -> Result<MemberProfile, ServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ServiceError::InvalidInput("text input is required".to_owned()));
        }
        Ok(self.llm.extract_profile(text).await?)
    }
}
