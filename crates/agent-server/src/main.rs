//! Travel-agent HTTP Server
//!
//! Axum-based server exposing the travel planner agent over REST.
//! Providers (Groq, OpenAI, Gemini) are selected per request; the
//! travel expense tools are registered once at startup.

mod handlers;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::ToolRegistry;
use agent_runtime::{Credentials, ProviderKind, Settings};

use crate::handlers::{health_check, query_handler};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Load static configuration. A missing file is not fatal: requests
    // will fail with a configuration_error naming the missing piece.
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("⚠ {}", e);
            tracing::warn!("  Continuing with empty settings - queries will fail until configured");
            Settings::default()
        }
    };

    // Resolve credentials once; the factory never reads the environment
    let credentials = Credentials::from_env();
    for kind in ProviderKind::all() {
        if credentials.get(kind).is_some() {
            tracing::info!("✓ {} credential present", kind);
        } else {
            tracing::warn!("⚠ {} not set - provider '{}' unavailable", kind.env_var(), kind);
        }
    }

    // Register travel tools
    let mut tools = ToolRegistry::new();
    travel_planner::register_tools(&mut tools);

    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    // Build application state
    let state = AppState::new(settings, credentials, tools);

    // CORS configuration (development posture: everything allowed)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/query", post(query_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 travel-agent server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  POST /query  - Ask the travel agent");

    axum::serve(listener, app).await?;

    Ok(())
}
