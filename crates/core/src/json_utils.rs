//! JSON utility functions shared across crates.

/// Strip markdown code block wrappers from JSON content.
///
/// Handles `` ```json ... ``` ``, `` ``` ... ``` ``, and other language identifiers.
#[must_use]
pub fn strip_markdown_json(content: &str) -> &str {
    let trimmed = content.trim();
    if trimmed.starts_with("```") && trimmed.ends_with("```") {
        let without_prefix = trimmed.strip_prefix("```").unwrap_or(trimmed);
        let without_suffix = without_prefix.strip_suffix("```").unwrap_or(without_prefix);
        return without_suffix
            .split_once('\n')
            .map_or_else(|| without_suffix.trim(), |(_, rest)| rest.trim());
    }
    trimmed
}

/// Normalize an ambiguously shaped JSON value into a single optional string.
///
/// Remote responses sometimes carry a field as a plain string, sometimes as a
/// one-element list, sometimes as null or an empty string. All of those
/// collapse here, at the data boundary, so ambiguous shapes never leak into
/// domain types.
#[must_use]
pub fn optional_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        serde_json::Value::Array(items) => items.first().and_then(optional_text),
        other => {
            tracing::warn!(shape = %other, "unexpected JSON shape for text field");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_block() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_markdown_json(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_plain_block() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_markdown_json(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_no_block() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_markdown_json(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_whitespace() {
        let input = "  ```json\n{\"key\": \"value\"}\n```  ";
        assert_eq!(strip_markdown_json(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn plain_string_passes_through() {
        assert_eq!(optional_text(&json!("Senior Engineer")), Some("Senior Engineer".to_owned()));
    }

    #[test]
    fn null_and_empty_normalize_to_none() {
        assert_eq!(optional_text(&json!(null)), None);
        assert_eq!(optional_text(&json!("")), None);
        assert_eq!(optional_text(&json!("   ")), None);
    }

    #[test]
    fn singleton_list_collapses_to_element() {
        assert_eq!(optional_text(&json!(["Tech lead track"])), Some("Tech lead track".to_owned()));
        assert_eq!(optional_text(&json!([])), None);
    }

    #[test]
    fn non_text_shapes_normalize_to_none() {
        assert_eq!(optional_text(&json!(42)), None);
        assert_eq!(optional_text(&json!({"nested": true})), None);
    }
}
