//! Google Gemini Provider
//!
//! Implementation of `LlmProvider` over the Gemini `generateContent` API.
//! Gemini wants the system prompt as a separate `system_instruction` and
//! the API key as a query parameter rather than a bearer header.

use agent_core::{
    error::{AgentError, Result},
    message::{Message, Role},
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini chat client
pub struct GeminiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(GEMINI_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| AgentError::Config(format!("Failed to initialize Gemini client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Split messages into the system instruction and the content turns.
    /// Gemini only knows "user" and "model" roles; tool results go in as
    /// user turns the same way the agent loop injects them.
    fn convert_messages(messages: &[Message]) -> (Option<String>, Vec<GeminiContent>) {
        let mut system_text: Option<String> = None;
        let mut contents = Vec::new();

        for m in messages {
            match m.role {
                Role::System => {
                    let entry = system_text.get_or_insert_with(String::new);
                    if !entry.is_empty() {
                        entry.push('\n');
                    }
                    entry.push_str(&m.content);
                }
                Role::Assistant => contents.push(GeminiContent {
                    role: "model",
                    parts: vec![GeminiPart {
                        text: m.content.clone(),
                    }],
                }),
                Role::User | Role::Tool => contents.push(GeminiContent {
                    role: "user",
                    parts: vec![GeminiPart {
                        text: m.content.clone(),
                    }],
                }),
            }
        }

        (system_text, contents)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            options.model
        );

        let (system_text, contents) = Self::convert_messages(messages);

        let body = GenerateRequest {
            contents,
            system_instruction: system_text.map(|text| GeminiInstruction {
                parts: vec![GeminiPart { text }],
            }),
            generation_config: GeminiGenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_tokens,
                top_p: options.top_p,
            },
        };

        tracing::debug!(model = %options.model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Provider(format!("Gemini: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            if status == StatusCode::BAD_REQUEST {
                return Err(AgentError::Api(format!("Gemini: {}", detail)));
            }
            return Err(AgentError::Provider(format!(
                "Gemini returned {}: {}",
                status, detail
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Provider(format!("Gemini: invalid response: {}", e)))?;

        let content = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if content.is_empty() {
            return Err(AgentError::Provider(
                "Gemini: response contained no text".into(),
            ));
        }

        Ok(Completion {
            content,
            model: options.model.clone(),
            usage: parsed.usage_metadata.map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
            finish_reason: Some(FinishReason::Stop),
        })
    }
}

// Wire types

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiInstruction>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "topP")]
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
    #[serde(rename = "totalTokenCount", default)]
    total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_is_split_out() {
        let messages = vec![
            Message::system("Plan trips."),
            Message::user("Paris?"),
            Message::assistant("Sure."),
            Message::tool("[Tool 'x' returned]\n42", None),
        ];

        let (system, contents) = GeminiProvider::convert_messages(&messages);
        assert_eq!(system.as_deref(), Some("Plan trips."));
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[2].role, "user");
    }

    #[test]
    fn test_no_system_prompt() {
        let messages = vec![Message::user("Hi")];
        let (system, contents) = GeminiProvider::convert_messages(&messages);
        assert!(system.is_none());
        assert_eq!(contents.len(), 1);
    }
}
