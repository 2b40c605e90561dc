//! HTTP Handlers
//!
//! The query handler resolves a provider, builds the agent, and invokes
//! it. Every failure is classified exactly once into one of three
//! response kinds: configuration_error (400), api_error (400), or
//! server_error (500).

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use agent_core::{provider::GenerationOptions, Agent, AgentConfig, AgentError};
use agent_runtime::{build_provider, ProviderKind};
use travel_planner::TRAVEL_PLANNER_PROMPT;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The traveler's question
    pub question: String,

    /// Provider to answer with; defaults to gemini
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Providers with a credential present
    pub providers_configured: Vec<String>,
}

const CONFIGURATION_ERROR: &str = "configuration_error";
const API_ERROR: &str = "api_error";
const SERVER_ERROR: &str = "server_error";

const DECOMMISSIONED_NOTE: &str =
    "The configured model has been decommissioned. Please update the model name in config/config.toml.";

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let providers_configured = ProviderKind::all()
        .into_iter()
        .filter(|kind| state.credentials.get(*kind).is_some())
        .map(|kind| kind.to_string())
        .collect();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        providers_configured,
    })
}

/// Main query endpoint
pub async fn query_handler(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, (StatusCode, Json<ErrorResponse>)> {
    tracing::info!(question = %payload.question, "Received query");

    let kind: ProviderKind = payload
        .provider
        .as_deref()
        .unwrap_or("gemini")
        .parse()
        .map_err(classify_error)?;

    let resolved =
        build_provider(kind, &state.settings, &state.credentials).map_err(classify_error)?;

    let config = AgentConfig {
        system_prompt: TRAVEL_PLANNER_PROMPT.into(),
        generation: GenerationOptions::for_model(resolved.model),
        ..Default::default()
    };
    let agent = Agent::new(resolved.provider, state.tools.clone(), config);

    // Bounded so one stuck vendor call cannot hold the request open forever
    let budget = Duration::from_secs(state.settings.server.request_timeout_secs);
    let answer = match tokio::time::timeout(budget, agent.ask(&payload.question)).await {
        Ok(result) => result.map_err(classify_error)?,
        Err(_) => {
            return Err(classify_error(AgentError::Other(format!(
                "Query timed out after {}s",
                budget.as_secs()
            ))));
        }
    };

    Ok(Json(QueryResponse { answer }))
}

/// Map an agent failure to its HTTP response, logging server-side detail
fn classify_error(err: AgentError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        AgentError::Config(msg) => {
            tracing::warn!("Configuration error: {}", msg);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: msg,
                    kind: CONFIGURATION_ERROR,
                }),
            )
        }
        AgentError::Api(msg) => {
            tracing::warn!("Vendor rejected request: {}", msg);
            let error = if msg.to_lowercase().contains("decommissioned") {
                DECOMMISSIONED_NOTE.to_string()
            } else {
                msg
            };
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error,
                    kind: API_ERROR,
                }),
            )
        }
        other => {
            tracing::error!("Error processing query: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: other.to_string(),
                    kind: SERVER_ERROR,
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::ToolRegistry;
    use agent_runtime::{Credentials, Settings};
    use axum::{
        body::Body,
        http::{header, Request},
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let mut tools = ToolRegistry::new();
        travel_planner::register_tools(&mut tools);
        AppState::new(Settings::default(), Credentials::default(), tools)
    }

    fn test_router() -> Router {
        Router::new()
            .route("/query", post(query_handler))
            .with_state(test_state())
    }

    async fn post_query(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/query")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[test]
    fn test_classify_config_error() {
        let (status, Json(body)) = classify_error(AgentError::Config("no key".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.kind, CONFIGURATION_ERROR);
        assert_eq!(body.error, "no key");
    }

    #[test]
    fn test_classify_api_error_rewrites_decommissioned() {
        let (status, Json(body)) =
            classify_error(AgentError::Api("model_decommissioned: llama2-70b".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.kind, API_ERROR);
        assert_eq!(body.error, DECOMMISSIONED_NOTE);
    }

    #[test]
    fn test_classify_api_error_keeps_other_messages() {
        let (_, Json(body)) = classify_error(AgentError::Api("invalid request shape".into()));
        assert_eq!(body.kind, API_ERROR);
        assert_eq!(body.error, "invalid request shape");
    }

    #[test]
    fn test_classify_everything_else_is_server_error() {
        let (status, Json(body)) = classify_error(AgentError::Provider("connection reset".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.kind, SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_query_without_credentials_is_configuration_error() {
        let (status, body) =
            post_query(serde_json::json!({"question": "Plan a 3-day trip to Paris"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "configuration_error");
        assert!(body["error"].as_str().unwrap().contains("GOOGLE_API_KEY"));
    }

    #[tokio::test]
    async fn test_each_provider_missing_credential_is_configuration_error() {
        for provider in ["groq", "openai", "gemini"] {
            let (status, body) =
                post_query(serde_json::json!({"question": "hi", "provider": provider})).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{provider}");
            assert_eq!(body["type"], "configuration_error", "{provider}");
        }
    }

    #[tokio::test]
    async fn test_unknown_provider_names_the_identifier() {
        let (status, body) =
            post_query(serde_json::json!({"question": "hi", "provider": "unknown"})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "configuration_error");
        assert!(body["error"].as_str().unwrap().contains("unknown"));
    }
}
