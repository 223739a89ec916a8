use anyhow::Result;
use chrono::Utc;
use tandem_service::AuthService;

use super::open_storage;

pub(crate) async fn issue(user_id: &str) -> Result<()> {
    let auth = AuthService::new(open_storage()?);
    let session = auth.issue(user_id, Utc::now()).await?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}

pub(crate) async fn revoke(token: &str) -> Result<()> {
    let auth = AuthService::new(open_storage()?);
    let revoked = auth.revoke(token).await?;
    if revoked {
        println!("session revoked");
    } else {
        println!("no such session");
    }
    Ok(())
}

pub(crate) async fn purge() -> Result<()> {
    let auth = AuthService::new(open_storage()?);
    let purged = auth.purge_expired(Utc::now()).await?;
    println!("purged {purged} expired sessions");
    Ok(())
}
