//! Profile extraction: free-text manager notes in, five structured fields out.

use tandem_core::{optional_text, strip_markdown_json, MemberProfile};

use crate::ai_types::{ChatRequest, Message, ResponseFormat};
use crate::client::{truncate, LlmClient};
use crate::error::LlmError;

/// Fixed instruction prompt for the extraction call.
pub const PROFILE_SYSTEM_PROMPT: &str = "You are an assistant that extracts structured profile information about a team member from a manager's description.

Extract the following fields from the text. If a field is not mentioned or cannot be inferred, return null for that field.

Return a JSON object with these exact fields:
- role: Their job title or role (string or null)
- current_focus: What projects or initiatives they're currently working on (string or null)
- growth_goals: What the manager wants to help them achieve or develop (string or null)
- one_on_one_themes: Key topics or themes for 1:1 meetings (string or null)
- feedback_preferences: How they prefer to receive feedback (string or null)

Be concise but capture the key information. Keep each field to 1-2 sentences max.";

const PROFILE_TEMPERATURE: f32 = 0.3;

impl LlmClient {
    /// Extract a structured member profile from free-text notes.
    ///
    /// Fields the model omits, nulls, or leaves empty come back as `None`.
    ///
    /// # Errors
    /// Any remote failure or unparseable response; the caller maps all of
    /// them onto one generic extraction failure.
    pub async fn extract_profile(&self, text: &str) -> Result<MemberProfile, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message { role: "system".to_owned(), content: PROFILE_SYSTEM_PROMPT.to_owned() },
                Message { role: "user".to_owned(), content: text.to_owned() },
            ],
            response_format: ResponseFormat { format_type: "json_object".to_owned() },
            temperature: PROFILE_TEMPERATURE,
        };

        let content = self.chat_completion(&request).await?;
        parse_profile_content(&content)
    }
}

/// Parse the model's JSON payload into a profile, normalizing every field
/// through `optional_text` so ambiguous shapes never reach the domain.
pub(crate) fn parse_profile_content(content: &str) -> Result<MemberProfile, LlmError> {
    let content = strip_markdown_json(content);
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| LlmError::JsonParse {
            context: format!("profile response (content: {})", truncate(content, 300)),
            source: e,
        })?;

    let field = |name: &str| value.get(name).and_then(optional_text);

    Ok(MemberProfile {
        role: field("role"),
        current_focus: field("current_focus"),
        growth_goals: field("growth_goals"),
        one_on_one_themes: field("one_on_one_themes"),
        feedback_preferences: field("feedback_preferences"),
    })
}
