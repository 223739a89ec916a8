pub(crate) mod auth;
pub(crate) mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tandem_core::AuthUser;
use tandem_service::TeamService;
use tandem_storage::StorageBackend;

pub(crate) fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("TANDEM_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tandem")
        .join("tandem.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn open_storage() -> Result<Arc<StorageBackend>> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    Ok(Arc::new(StorageBackend::new_sqlite(&db_path)?))
}

pub(crate) fn get_api_key() -> Result<String> {
    std::env::var("TANDEM_LLM_API_KEY")
        .map_err(|_| anyhow::anyhow!("TANDEM_LLM_API_KEY environment variable must be set"))
}

pub(crate) fn get_base_url() -> String {
    std::env::var("TANDEM_LLM_API_URL").unwrap_or_else(|_| "https://api.openai.com".to_string())
}

pub(crate) async fn teams(user_id: &str) -> Result<()> {
    let storage = open_storage()?;
    let teams = TeamService::new(storage)
        .list_teams(&AuthUser { user_id: user_id.to_owned() })
        .await?;
    println!("{}", serde_json::to_string_pretty(&teams)?);
    Ok(())
}
