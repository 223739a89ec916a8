use super::{create_test_member, create_test_storage, create_test_team};
use crate::traits::{MemberStore, TeamStore};
use tandem_core::MemberProfile;

#[tokio::test]
async fn test_create_and_get_team() {
    let (storage, _temp_dir) = create_test_storage();
    let team = create_test_team("team-1", "user-1");

    storage.create_team(&team).await.unwrap();

    let retrieved = storage.get_team("team-1").await.unwrap().unwrap();
    assert_eq!(retrieved.id, "team-1");
    assert_eq!(retrieved.owner_user_id, "user-1");
    assert_eq!(retrieved.name, "Team team-1");
}

#[tokio::test]
async fn test_list_teams_scoped_to_owner_newest_first() {
    let (storage, _temp_dir) = create_test_storage();
    storage.create_team(&create_test_team("team-a", "user-1")).await.unwrap();
    storage.create_team(&create_test_team("team-b", "user-1")).await.unwrap();
    storage.create_team(&create_test_team("team-c", "user-2")).await.unwrap();

    let teams = storage.list_teams_for_owner("user-1").await.unwrap();
    let ids: Vec<&str> = teams.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["team-b", "team-a"]);
}

#[tokio::test]
async fn test_delete_team_cascades_to_members() {
    let (storage, _temp_dir) = create_test_storage();
    storage.create_team(&create_test_team("team-1", "user-1")).await.unwrap();
    storage.create_member(&create_test_member("member-1", "team-1")).await.unwrap();

    assert!(storage.delete_team("team-1").await.unwrap());

    assert!(storage.get_team("team-1").await.unwrap().is_none());
    assert!(storage.get_member("member-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_team_returns_false() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(!storage.delete_team("no-such-team").await.unwrap());
}

#[tokio::test]
async fn test_update_member_profile_overwrites_all_fields() {
    let (storage, _temp_dir) = create_test_storage();
    storage.create_team(&create_test_team("team-1", "user-1")).await.unwrap();
    storage.create_member(&create_test_member("member-1", "team-1")).await.unwrap();

    let profile = MemberProfile {
        role: Some("Senior Engineer".to_owned()),
        current_focus: Some("Checkout redesign".to_owned()),
        growth_goals: None,
        one_on_one_themes: Some("Technical challenges".to_owned()),
        feedback_preferences: Some("Direct".to_owned()),
    };
    let updated = storage
        .update_member_profile("member-1", &profile, Some("Sarah leads the checkout redesign"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.role.as_deref(), Some("Senior Engineer"));
    assert_eq!(updated.growth_goals, None);
    assert_eq!(
        updated.profile_raw_input.as_deref(),
        Some("Sarah leads the checkout redesign")
    );

    // A second extraction replaces the previous profile wholesale.
    let replacement = MemberProfile { role: Some("Tech Lead".to_owned()), ..Default::default() };
    let updated = storage
        .update_member_profile("member-1", &replacement, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.role.as_deref(), Some("Tech Lead"));
    assert_eq!(updated.current_focus, None);
    assert_eq!(updated.profile_raw_input, None);
}

#[tokio::test]
async fn test_update_profile_for_missing_member_returns_none() {
    let (storage, _temp_dir) = create_test_storage();
    let result = storage
        .update_member_profile("ghost", &MemberProfile::default(), None)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_team_members_newest_first() {
    let (storage, _temp_dir) = create_test_storage();
    storage.create_team(&create_test_team("team-1", "user-1")).await.unwrap();
    storage.create_member(&create_test_member("member-a", "team-1")).await.unwrap();
    storage.create_member(&create_test_member("member-b", "team-1")).await.unwrap();

    let members = storage.list_team_members("team-1").await.unwrap();
    let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["member-b", "member-a"]);
}
