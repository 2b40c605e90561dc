//! Application State

use std::sync::Arc;

use agent_core::ToolRegistry;
use agent_runtime::{Credentials, Settings};

/// Shared application state
///
/// Everything here is read-only after startup; requests share it through
/// `Arc` and never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// Static configuration (model names, timeouts)
    pub settings: Arc<Settings>,

    /// API keys resolved from the environment at startup
    pub credentials: Arc<Credentials>,

    /// Tool registry with the travel tools
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(settings: Settings, credentials: Credentials, tools: ToolRegistry) -> Self {
        Self {
            settings: Arc::new(settings),
            credentials: Arc::new(credentials),
            tools: Arc::new(tools),
        }
    }
}
