//! Settings
//!
//! Static configuration loaded once at startup from `config/config.toml`
//! (path overridable via `CONFIG_PATH`). Read-only after load.

use std::path::Path;

use serde::Deserialize;

use agent_core::{AgentError, Result};

use crate::factory::ProviderKind;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Top-level settings document
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Settings {
    /// Per-provider model configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// Server tuning
    #[serde(default)]
    pub server: ServerSettings,
}

/// Model names, one table per supported provider
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub groq: ModelSettings,
    #[serde(default)]
    pub openai: ModelSettings,
    #[serde(default)]
    pub gemini: ModelSettings,
}

/// A single provider's model configuration
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ModelSettings {
    #[serde(default)]
    pub model_name: String,
}

/// Server tuning knobs
#[derive(Clone, Debug, Deserialize)]
pub struct ServerSettings {
    /// Upper bound on a single agent invocation
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load from `CONFIG_PATH` if set, otherwise the default location
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::from_path(&path)
    }

    /// Load and parse a TOML settings file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AgentError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&raw)
    }

    /// Parse settings from a TOML string
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| AgentError::Config(format!("Invalid config file: {}", e)))
    }

    /// Model name configured for a provider (empty string when absent)
    pub fn model_name(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Groq => &self.llm.groq.model_name,
            ProviderKind::Openai => &self.llm.openai.model_name,
            ProviderKind::Gemini => &self.llm.gemini.model_name,
        }
    }
}
