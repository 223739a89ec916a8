use crate::profile::parse_profile_content;
use crate::LlmError;

#[test]
fn all_fields_present() {
    let content = r#"{
  "role": "Staff Engineer",
  "current_focus": "Platform migration",
  "growth_goals": "Move into a tech lead role",
  "one_on_one_themes": "Technical challenges",
  "feedback_preferences": "Direct and written"
}"#;
    let profile = parse_profile_content(content).unwrap();
    assert_eq!(profile.role.as_deref(), Some("Staff Engineer"));
    assert_eq!(profile.growth_goals.as_deref(), Some("Move into a tech lead role"));
    assert!(!profile.is_empty());
}

#[test]
fn missing_and_null_fields_normalize_to_none() {
    let content = r#"{"role": "Designer", "current_focus": null}"#;
    let profile = parse_profile_content(content).unwrap();
    assert_eq!(profile.role.as_deref(), Some("Designer"));
    assert_eq!(profile.current_focus, None);
    assert_eq!(profile.growth_goals, None);
    assert_eq!(profile.one_on_one_themes, None);
    assert_eq!(profile.feedback_preferences, None);
}

#[test]
fn empty_strings_normalize_to_none() {
    let content = r#"{"role": "", "current_focus": "   "}"#;
    let profile = parse_profile_content(content).unwrap();
    assert!(profile.is_empty());
}

#[test]
fn singleton_list_field_collapses_to_its_element() {
    let content = r#"{"one_on_one_themes": ["Career growth"]}"#;
    let profile = parse_profile_content(content).unwrap();
    assert_eq!(profile.one_on_one_themes.as_deref(), Some("Career growth"));
}

#[test]
fn markdown_fenced_json_is_accepted() {
    let content = "```json\n{\"role\": \"PM\"}\n```";
    let profile = parse_profile_content(content).unwrap();
    assert_eq!(profile.role.as_deref(), Some("PM"));
}

#[test]
fn non_json_content_is_a_parse_error() {
    let err = parse_profile_content("Sorry, I can't help with that.").unwrap_err();
    assert!(matches!(err, LlmError::JsonParse { .. }));
}

#[test]
fn empty_object_yields_empty_profile() {
    let profile = parse_profile_content("{}").unwrap();
    assert!(profile.is_empty());
}
