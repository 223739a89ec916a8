use super::{day, seeded_member, setup, user};
use crate::ServiceError;
use tandem_core::AgendaItemUpdate;

#[tokio::test]
async fn snapshot_takes_undated_and_due_items_skips_future_and_completed() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");
    let today = day("2025-06-15");

    let a = ctx.agenda.create_item(&owner, &member.id, "A undated", None).await.unwrap();
    let b = ctx
        .agenda
        .create_item(&owner, &member.id, "B yesterday", Some(day("2025-06-14")))
        .await
        .unwrap();
    ctx.agenda
        .create_item(&owner, &member.id, "C tomorrow", Some(day("2025-06-16")))
        .await
        .unwrap();
    let d = ctx
        .agenda
        .create_item(&owner, &member.id, "D today", Some(day("2025-06-15")))
        .await
        .unwrap();
    ctx.agenda.toggle_item(&owner, &d.id, true).await.unwrap();

    ctx.meetings.start_session(&owner, &member.id, today).await.unwrap();

    let items = ctx.meetings.active_session_items(&owner, &member.id).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec![a.id.as_str(), b.id.as_str()]);
}

#[tokio::test]
async fn item_added_during_session_is_included_despite_future_date() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");
    let today = day("2025-06-15");

    let a = ctx.agenda.create_item(&owner, &member.id, "A undated", None).await.unwrap();
    ctx.meetings.start_session(&owner, &member.id, today).await.unwrap();

    // Scheduled next week: the predicate would exclude it, the explicit add wins.
    let e = ctx
        .agenda
        .create_item(&owner, &member.id, "E next week", Some(day("2025-06-22")))
        .await
        .unwrap();

    let items = ctx.meetings.active_session_items(&owner, &member.id).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec![a.id.as_str(), e.id.as_str()]);
}

#[tokio::test]
async fn snapshot_is_frozen_against_later_edits() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    let a = ctx.agenda.create_item(&owner, &member.id, "A", None).await.unwrap();
    let b = ctx.agenda.create_item(&owner, &member.id, "B", None).await.unwrap();
    ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap();

    // Completing one item and pushing the other into the future does not
    // shrink the snapshot.
    ctx.agenda.toggle_item(&owner, &a.id, true).await.unwrap();
    ctx.agenda
        .update_item(
            &owner,
            &b.id,
            &AgendaItemUpdate {
                scheduled_date: Some(Some(day("2030-01-01"))),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let items = ctx.meetings.active_session_items(&owner, &member.id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].completed);
    assert_eq!(items[1].scheduled_date, Some(day("2030-01-01")));
}

#[tokio::test]
async fn deleting_an_item_removes_it_from_the_active_session() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    let a = ctx.agenda.create_item(&owner, &member.id, "A", None).await.unwrap();
    let b = ctx.agenda.create_item(&owner, &member.id, "B", None).await.unwrap();
    ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap();

    ctx.agenda.delete_item(&owner, &a.id).await.unwrap();

    let items = ctx.meetings.active_session_items(&owner, &member.id).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec![b.id.as_str()]);
}

#[tokio::test]
async fn snapshot_orders_by_item_age_oldest_first() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    let first = ctx.agenda.create_item(&owner, &member.id, "first", None).await.unwrap();
    let second = ctx.agenda.create_item(&owner, &member.id, "second", None).await.unwrap();
    let third = ctx.agenda.create_item(&owner, &member.id, "third", None).await.unwrap();

    ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap();

    let items = ctx.meetings.active_session_items(&owner, &member.id).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str(), third.id.as_str()]);
}

#[tokio::test]
async fn double_start_is_a_conflict() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap();
    let err = ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn end_session_closes_once_then_not_found() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap();
    let closed = ctx.meetings.end_session(&owner, &member.id).await.unwrap();
    assert!(closed.ended_at.is_some());

    let err = ctx.meetings.end_session(&owner, &member.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn end_without_start_is_not_found() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    let err = ctx.meetings.end_session(&owner, &member.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn closed_session_leaves_no_active_items() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    ctx.agenda.create_item(&owner, &member.id, "A", None).await.unwrap();
    ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap();
    ctx.meetings.end_session(&owner, &member.id).await.unwrap();

    assert!(ctx.meetings.active_session(&owner, &member.id).await.unwrap().is_none());
    assert!(ctx.meetings.active_session_items(&owner, &member.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn new_session_after_close_starts_from_current_relevance() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    let a = ctx.agenda.create_item(&owner, &member.id, "A", None).await.unwrap();
    ctx.meetings.start_session(&owner, &member.id, day("2025-06-15")).await.unwrap();
    ctx.meetings.end_session(&owner, &member.id).await.unwrap();

    // A is completed between the two sessions, so the second snapshot is
    // independent of the first.
    ctx.agenda.toggle_item(&owner, &a.id, true).await.unwrap();
    let b = ctx.agenda.create_item(&owner, &member.id, "B", None).await.unwrap();
    ctx.meetings.start_session(&owner, &member.id, day("2025-06-16")).await.unwrap();

    let items = ctx.meetings.active_session_items(&owner, &member.id).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec![b.id.as_str()]);

    let sessions = ctx.meetings.list_sessions(&owner, &member.id).await.unwrap();
    assert_eq!(sessions.len(), 2);
}

#[tokio::test]
async fn another_users_member_is_off_limits() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let intruder = user("user-2");

    let err =
        ctx.meetings.start_session(&intruder, &member.id, day("2025-06-15")).await.unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied { .. }));

    let err = ctx.meetings.active_session_items(&intruder, &member.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied { .. }));
}
