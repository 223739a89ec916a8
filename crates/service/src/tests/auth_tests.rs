use chrono::{Duration, Utc};
use tandem_storage::traits::AuthStore;

use super::setup;
use crate::{ServiceError, AUTH_TOKEN_TTL_SECS};

#[tokio::test]
async fn issue_then_verify_resolves_the_user() {
    let (ctx, _tmp) = setup();
    let now = Utc::now();

    let session = ctx.auth.issue("user-1", now).await.unwrap();
    let auth_user = ctx.auth.verify(&session.token, now).await.unwrap();
    assert_eq!(auth_user.user_id, "user-1");
}

#[tokio::test]
async fn unknown_token_is_unauthenticated() {
    let (ctx, _tmp) = setup();
    let err = ctx.auth.verify("no-such-token", Utc::now()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Unauthenticated));
}

#[tokio::test]
async fn expired_token_is_rejected_and_dropped() {
    let (ctx, _tmp) = setup();
    let now = Utc::now();

    let session = ctx.auth.issue("user-1", now).await.unwrap();
    let later = now + Duration::seconds(AUTH_TOKEN_TTL_SECS + 1);

    let err = ctx.auth.verify(&session.token, later).await.unwrap_err();
    assert!(matches!(err, ServiceError::Unauthenticated));
    assert!(ctx.storage.get_auth_session(&session.token).await.unwrap().is_none());
}

#[tokio::test]
async fn near_expiry_token_is_refreshed_transparently() {
    let (ctx, _tmp) = setup();
    let now = Utc::now();

    let session = ctx.auth.issue("user-1", now).await.unwrap();
    // 4 minutes to expiry: inside the 5-minute refresh window.
    let near_expiry = session.expires_at - Duration::minutes(4);

    ctx.auth.verify(&session.token, near_expiry).await.unwrap();

    let refreshed = ctx.storage.get_auth_session(&session.token).await.unwrap().unwrap();
    assert!(refreshed.expires_at > session.expires_at);
}

#[tokio::test]
async fn token_outside_refresh_window_keeps_its_expiry() {
    let (ctx, _tmp) = setup();
    let now = Utc::now();

    let session = ctx.auth.issue("user-1", now).await.unwrap();
    ctx.auth.verify(&session.token, now).await.unwrap();

    let unchanged = ctx.storage.get_auth_session(&session.token).await.unwrap().unwrap();
    assert_eq!(unchanged.expires_at, session.expires_at);
}

#[tokio::test]
async fn revoked_token_no_longer_verifies() {
    let (ctx, _tmp) = setup();
    let now = Utc::now();

    let session = ctx.auth.issue("user-1", now).await.unwrap();
    assert!(ctx.auth.revoke(&session.token).await.unwrap());

    let err = ctx.auth.verify(&session.token, now).await.unwrap_err();
    assert!(matches!(err, ServiceError::Unauthenticated));
}

#[tokio::test]
async fn issue_rejects_blank_user_id() {
    let (ctx, _tmp) = setup();
    let err = ctx.auth.issue("  ", Utc::now()).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}
