mod handlers;
pub mod models;

use anyhow::Result;
use ask_gemini::{GeminiConfig, GeminiService, Orchestrator};
use axum::{
    routing::{get, post},
    Router,
};
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// The shim never retries: upstream failures go straight back to the caller.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let service = GeminiService::new(config)?;
        Ok(Self {
            orchestrator: Arc::new(Orchestrator::single_shot(service)),
        })
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub fn server_port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub async fn run_server(app: Router, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
