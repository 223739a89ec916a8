use chrono::{Duration, Utc};
use tandem_core::AuthSession;

use super::create_test_storage;
use crate::traits::AuthStore;

fn session(token: &str, user_id: &str, ttl_secs: i64) -> AuthSession {
    AuthSession {
        token: token.to_owned(),
        user_id: user_id.to_owned(),
        expires_at: Utc::now() + Duration::seconds(ttl_secs),
    }
}

#[tokio::test]
async fn test_insert_and_get_auth_session() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_auth_session(&session("tok-1", "user-1", 3600)).await.unwrap();

    let retrieved = storage.get_auth_session("tok-1").await.unwrap().unwrap();
    assert_eq!(retrieved.user_id, "user-1");
    assert!(storage.get_auth_session("tok-missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_extend_auth_session() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_auth_session(&session("tok-1", "user-1", 60)).await.unwrap();

    let new_expiry = Utc::now() + Duration::hours(1);
    assert!(storage.extend_auth_session("tok-1", new_expiry).await.unwrap());

    let retrieved = storage.get_auth_session("tok-1").await.unwrap().unwrap();
    assert!(retrieved.expires_at > Utc::now() + Duration::minutes(30));

    assert!(!storage.extend_auth_session("tok-missing", new_expiry).await.unwrap());
}

#[tokio::test]
async fn test_delete_auth_session() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_auth_session(&session("tok-1", "user-1", 3600)).await.unwrap();

    assert!(storage.delete_auth_session("tok-1").await.unwrap());
    assert!(storage.get_auth_session("tok-1").await.unwrap().is_none());
    assert!(!storage.delete_auth_session("tok-1").await.unwrap());
}

#[tokio::test]
async fn test_purge_expired_sessions() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_auth_session(&session("tok-live", "user-1", 3600)).await.unwrap();
    storage.insert_auth_session(&session("tok-dead", "user-1", -60)).await.unwrap();

    let purged = storage.purge_expired_sessions(Utc::now()).await.unwrap();
    assert_eq!(purged, 1);
    assert!(storage.get_auth_session("tok-live").await.unwrap().is_some());
    assert!(storage.get_auth_session("tok-dead").await.unwrap().is_none());
}
