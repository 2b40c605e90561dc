//! Provider Factory
//!
//! Resolves a requested provider identifier into a ready chat client plus
//! its configured model name. Fails fast with a configuration error when
//! the credential or model name is absent, so a misconfigured deployment
//! is never reported as a vendor API fault.

use std::str::FromStr;
use std::sync::Arc;

use agent_core::{AgentError, LlmProvider, Result};

use crate::credentials::Credentials;
use crate::gemini::GeminiProvider;
use crate::openai::OpenAiCompatProvider;
use crate::settings::Settings;

/// Supported LLM vendors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Groq,
    Openai,
    Gemini,
}

impl ProviderKind {
    /// Environment variable carrying this provider's API key
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::Openai => "OPENAI_API_KEY",
            Self::Gemini => "GOOGLE_API_KEY",
        }
    }

    /// All supported kinds
    pub fn all() -> [Self; 3] {
        [Self::Groq, Self::Openai, Self::Gemini]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Groq => write!(f, "groq"),
            Self::Openai => write!(f, "openai"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "openai" => Ok(Self::Openai),
            "gemini" | "google" => Ok(Self::Gemini),
            other => Err(AgentError::Config(format!(
                "Unsupported model provider: {}",
                other
            ))),
        }
    }
}

/// A constructed provider together with its configured model name
pub struct ResolvedProvider {
    pub provider: Arc<dyn LlmProvider>,
    pub model: String,
}

impl std::fmt::Debug for ResolvedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedProvider")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .finish()
    }
}

/// Build a chat client for `kind`, or fail with a configuration error.
///
/// Checks, in order: credential present, model name configured, client
/// constructs. A fresh client is built per call; nothing is cached across
/// requests.
pub fn build_provider(
    kind: ProviderKind,
    settings: &Settings,
    credentials: &Credentials,
) -> Result<ResolvedProvider> {
    let api_key = credentials.get(kind).ok_or_else(|| {
        AgentError::Config(format!(
            "{} environment variable is not set. Please set it in your .env file or environment.",
            kind.env_var()
        ))
    })?;

    let model = settings.model_name(kind);
    if model.is_empty() {
        return Err(AgentError::Config(format!(
            "{} model name is not configured in config/config.toml",
            kind
        )));
    }

    let provider: Arc<dyn LlmProvider> = match kind {
        ProviderKind::Groq => Arc::new(OpenAiCompatProvider::groq(api_key)?),
        ProviderKind::Openai => Arc::new(OpenAiCompatProvider::openai(api_key)?),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(api_key)?),
    };

    tracing::info!(provider = %kind, model, "Provider ready");

    Ok(ResolvedProvider {
        provider,
        model: model.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_models() -> Settings {
        Settings::from_toml(
            r#"
[llm.groq]
model_name = "llama-3.3-70b-versatile"

[llm.openai]
model_name = "gpt-4o-mini"

[llm.gemini]
model_name = "gemini-2.0-flash"
"#,
        )
        .unwrap()
    }

    fn credentials_for_all() -> Credentials {
        Credentials {
            groq: Some("gk".into()),
            openai: Some("ok".into()),
            gemini: Some("gmk".into()),
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("groq".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
        assert_eq!("GEMINI".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);

        let err = "unknown".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_missing_credential_is_config_error() {
        let settings = settings_with_models();

        for kind in ProviderKind::all() {
            let err = build_provider(kind, &settings, &Credentials::default()).unwrap_err();
            assert!(matches!(err, AgentError::Config(_)), "{kind}");
            assert!(err.to_string().contains(kind.env_var()));
        }
    }

    #[test]
    fn test_missing_model_name_is_config_error() {
        let settings = Settings::default();
        let err = build_provider(ProviderKind::Gemini, &settings, &credentials_for_all()).unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
        assert!(err.to_string().contains("model name"));
    }

    #[test]
    fn test_all_providers_resolve() {
        let settings = settings_with_models();
        let creds = credentials_for_all();

        for kind in ProviderKind::all() {
            let resolved = build_provider(kind, &settings, &creds).unwrap();
            assert!(!resolved.model.is_empty());
        }

        let gemini = build_provider(ProviderKind::Gemini, &settings, &creds).unwrap();
        assert_eq!(gemini.provider.name(), "Gemini");
        assert_eq!(gemini.model, "gemini-2.0-flash");
    }
}
