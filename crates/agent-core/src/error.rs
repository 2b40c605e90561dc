//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
///
/// The HTTP layer collapses these into three response classes:
/// `Config` is a deployment problem (400), `Api` is a call-time
/// rejection the vendor reported as a bad request (400), everything
/// else surfaces as a server error (500).
#[derive(Error, Debug)]
pub enum AgentError {
    /// Missing credential/model name, unsupported provider, or a
    /// constructor-time rejection from the vendor client
    #[error("Configuration error: {0}")]
    Config(String),

    /// Call-time bad-request rejection from the vendor API
    #[error("API error: {0}")]
    Api(String),

    /// Any other failure reported by the LLM provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool arguments failed validation
    #[error("Invalid tool argument: {0}")]
    ToolValidation(String),

    /// Maximum iterations reached in reasoning loop
    #[error("Maximum iterations ({0}) reached")]
    MaxIterations(usize),

    /// Parse error (e.g., tool call parsing)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// True for failures fixable only by correcting deployment configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, AgentError::Config(_))
    }
}

impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        AgentError::Other(err.to_string())
    }
}
