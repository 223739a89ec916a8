use super::{day, seeded_member, setup, user};
use crate::ServiceError;
use tandem_core::AgendaItemUpdate;

#[tokio::test]
async fn create_item_rejects_blank_content() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;

    let err = ctx.agenda.create_item(&user("user-1"), &member.id, "  ", None).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn create_item_outside_a_session_adds_no_snapshot_rows() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    ctx.agenda.create_item(&owner, &member.id, "A", Some(day("2025-06-20"))).await.unwrap();

    assert!(ctx.meetings.active_session(&owner, &member.id).await.unwrap().is_none());
    assert!(ctx.meetings.active_session_items(&owner, &member.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn item_content_is_trimmed() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    let item = ctx.agenda.create_item(&owner, &member.id, "  Discuss QBR  ", None).await.unwrap();
    assert_eq!(item.content, "Discuss QBR");
}

#[tokio::test]
async fn update_and_toggle_respect_ownership() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");
    let intruder = user("user-2");

    let item = ctx.agenda.create_item(&owner, &member.id, "A", None).await.unwrap();

    let err = ctx.agenda.toggle_item(&intruder, &item.id, true).await.unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied { .. }));

    let err = ctx.agenda.delete_item(&intruder, &item.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied { .. }));

    let toggled = ctx.agenda.toggle_item(&owner, &item.id, true).await.unwrap();
    assert!(toggled.completed);
}

#[tokio::test]
async fn update_missing_item_is_not_found() {
    let (ctx, _tmp) = setup();
    seeded_member(&ctx).await;

    let err = ctx
        .agenda
        .update_item(&user("user-1"), "no-such-item", &AgendaItemUpdate::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn reschedule_and_clear_date() {
    let (ctx, _tmp) = setup();
    let (_, member) = seeded_member(&ctx).await;
    let owner = user("user-1");

    let item =
        ctx.agenda.create_item(&owner, &member.id, "A", Some(day("2025-06-20"))).await.unwrap();

    let updated = ctx
        .agenda
        .update_item(
            &owner,
            &item.id,
            &AgendaItemUpdate {
                scheduled_date: Some(Some(day("2025-07-01"))),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.scheduled_date, Some(day("2025-07-01")));

    let cleared = ctx
        .agenda
        .update_item(
            &owner,
            &item.id,
            &AgendaItemUpdate { scheduled_date: Some(None), ..Default::default() },
        )
        .await
        .unwrap();
    assert_eq!(cleared.scheduled_date, None);
}
