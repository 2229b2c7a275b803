use anyhow::Result;
use api::{build_app, run_server, server_port_from_env, AppState};
use ask_gemini::GeminiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = GeminiConfig::from_env()?;
    log::info!("Forwarding /ask to {}", config.model);

    let state = AppState::new(config)?;
    let policy = state.orchestrator.policy();
    log::info!(
        "Upstream retries {} (max {} attempt(s))",
        if policy.retries() { "enabled" } else { "disabled" },
        policy.max_attempts
    );

    let app = build_app(state);
    run_server(app, server_port_from_env()).await
}
