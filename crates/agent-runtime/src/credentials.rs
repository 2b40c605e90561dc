//! Provider Credentials
//!
//! API keys resolved from the process environment once at startup and
//! passed into the provider factory as an explicit value, so the factory
//! itself never touches ambient process state.

use crate::factory::ProviderKind;

/// API keys for the supported providers
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub groq: Option<String>,
    pub openai: Option<String>,
    pub gemini: Option<String>,
}

impl Credentials {
    /// Read `GROQ_API_KEY`, `OPENAI_API_KEY` and `GOOGLE_API_KEY`.
    /// Empty or whitespace-only values count as absent.
    pub fn from_env() -> Self {
        Self {
            groq: read_env(ProviderKind::Groq.env_var()),
            openai: read_env(ProviderKind::Openai.env_var()),
            gemini: read_env(ProviderKind::Gemini.env_var()),
        }
    }

    /// Key for a provider, if configured
    pub fn get(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::Groq => self.groq.as_deref(),
            ProviderKind::Openai => self.openai.as_deref(),
            ProviderKind::Gemini => self.gemini.as_deref(),
        }
    }

    /// True when at least one provider has a key
    pub fn any_configured(&self) -> bool {
        self.groq.is_some() || self.openai.is_some() || self.gemini.is_some()
    }
}

fn read_env(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_kind() {
        let creds = Credentials {
            gemini: Some("key-123".into()),
            ..Default::default()
        };

        assert_eq!(creds.get(ProviderKind::Gemini), Some("key-123"));
        assert_eq!(creds.get(ProviderKind::Groq), None);
        assert!(creds.any_configured());
    }

    #[test]
    fn test_default_is_unconfigured() {
        assert!(!Credentials::default().any_configured());
    }
}
