use super::{create_test_item, create_test_member, create_test_storage, create_test_team, day};
use crate::traits::{AgendaStore, MemberStore, TeamStore};
use tandem_core::AgendaItemUpdate;

async fn storage_with_member() -> (crate::Storage, tempfile::TempDir) {
    let (storage, temp_dir) = create_test_storage();
    storage.create_team(&create_test_team("team-1", "user-1")).await.unwrap();
    storage.create_member(&create_test_member("member-1", "team-1")).await.unwrap();
    (storage, temp_dir)
}

#[tokio::test]
async fn test_create_and_get_item_roundtrips_scheduled_date() {
    let (storage, _temp_dir) = storage_with_member().await;
    let item = create_test_item("item-1", "member-1", false, Some(day("2025-06-20")));
    storage.create_item(&item).await.unwrap();

    let retrieved = storage.get_item("item-1").await.unwrap().unwrap();
    assert_eq!(retrieved.scheduled_date, Some(day("2025-06-20")));
    assert!(!retrieved.completed);
}

#[tokio::test]
async fn test_update_item_partial_fields() {
    let (storage, _temp_dir) = storage_with_member().await;
    let item = create_test_item("item-1", "member-1", false, Some(day("2025-06-20")));
    storage.create_item(&item).await.unwrap();

    // Toggling completion leaves content and schedule untouched.
    let updated = storage
        .update_item("item-1", &AgendaItemUpdate { completed: Some(true), ..Default::default() })
        .await
        .unwrap()
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.scheduled_date, Some(day("2025-06-20")));
    assert_eq!(updated.content, "Item item-1");

    // Clearing the date is distinct from leaving it alone.
    let updated = storage
        .update_item(
            "item-1",
            &AgendaItemUpdate { scheduled_date: Some(None), ..Default::default() },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.scheduled_date, None);
    assert!(updated.completed);
}

#[tokio::test]
async fn test_update_missing_item_returns_none() {
    let (storage, _temp_dir) = storage_with_member().await;
    let result = storage.update_item("ghost", &AgendaItemUpdate::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_member_items_newest_first() {
    let (storage, _temp_dir) = storage_with_member().await;
    storage.create_item(&create_test_item("item-a", "member-1", false, None)).await.unwrap();
    storage.create_item(&create_test_item("item-b", "member-1", false, None)).await.unwrap();

    let items = storage.list_member_items("member-1").await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["item-b", "item-a"]);
}

#[tokio::test]
async fn test_delete_item() {
    let (storage, _temp_dir) = storage_with_member().await;
    storage.create_item(&create_test_item("item-1", "member-1", false, None)).await.unwrap();

    assert!(storage.delete_item("item-1").await.unwrap());
    assert!(storage.get_item("item-1").await.unwrap().is_none());
    assert!(!storage.delete_item("item-1").await.unwrap());
}

#[tokio::test]
async fn test_delete_member_cascades_to_items() {
    let (storage, _temp_dir) = storage_with_member().await;
    storage.create_item(&create_test_item("item-1", "member-1", false, None)).await.unwrap();

    assert!(storage.delete_member("member-1").await.unwrap());
    assert!(storage.get_item("item-1").await.unwrap().is_none());
}
