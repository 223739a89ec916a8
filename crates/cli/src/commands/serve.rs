use std::sync::Arc;

use anyhow::Result;
use tandem_http::{create_router, AppState};
use tandem_llm::LlmClient;
use tandem_service::{AgendaService, AuthService, MeetingService, ProfileService, TeamService};

use super::{get_api_key, get_base_url, open_storage};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = open_storage()?;

    let llm = Arc::new(LlmClient::new(get_api_key()?, get_base_url())?);

    let state = Arc::new(AppState {
        auth: AuthService::new(storage.clone()),
        teams: TeamService::new(storage.clone()),
        agenda: AgendaService::new(storage.clone()),
        meetings: MeetingService::new(storage),
        profile: ProfileService::new(llm),
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
