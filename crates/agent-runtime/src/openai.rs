//! OpenAI-compatible Chat Provider
//!
//! Implementation of `LlmProvider` over the OpenAI chat-completions wire
//! format. Groq exposes the same API under a different base URL, so one
//! client covers both vendors.

use agent_core::{
    error::{AgentError, Result},
    message::{Message, Role},
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Chat-completions client for OpenAI and OpenAI-compatible vendors
pub struct OpenAiCompatProvider {
    name: &'static str,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a client for an arbitrary OpenAI-compatible endpoint
    pub fn new(
        name: &'static str,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| AgentError::Config(format!("Failed to initialize {} client: {}", name, e)))?;

        Ok(Self {
            name,
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Client bound to the hosted OpenAI API
    pub fn openai(api_key: impl Into<String>) -> Result<Self> {
        Self::new("OpenAI", OPENAI_BASE_URL, api_key)
    }

    /// Client bound to Groq's OpenAI-compatible API
    pub fn groq(api_key: impl Into<String>) -> Result<Self> {
        Self::new("Groq", GROQ_BASE_URL, api_key)
    }

    /// Convert agent messages to the chat-completions format
    fn convert_messages(messages: &[Message]) -> Vec<WireMessage> {
        messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                    Role::Tool => "user", // Tool results appear as user context
                };
                WireMessage {
                    role,
                    content: m.content.clone(),
                }
            })
            .collect()
    }

    fn convert_finish_reason(reason: Option<&str>) -> Option<FinishReason> {
        match reason {
            Some("stop") => Some(FinishReason::Stop),
            Some("length") => Some(FinishReason::Length),
            Some("tool_calls") => Some(FinishReason::ToolUse),
            Some("content_filter") => Some(FinishReason::ContentFilter),
            Some(_) => Some(FinishReason::Error),
            None => None,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = ChatRequest {
            model: options.model.clone(),
            messages: Self::convert_messages(messages),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
        };

        tracing::debug!(provider = self.name, model = %options.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Provider(format!("{}: {}", self.name, e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            // A 400 is a recognized vendor rejection (bad model, bad request
            // shape) rather than an infrastructure fault.
            if status == StatusCode::BAD_REQUEST {
                return Err(AgentError::Api(format!("{}: {}", self.name, detail)));
            }
            return Err(AgentError::Provider(format!(
                "{} returned {}: {}",
                self.name, status, detail
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::Provider(format!("{}: invalid response: {}", self.name, e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::Provider(format!("{}: response contained no choices", self.name)))?;

        Ok(Completion {
            content: choice.message.content.unwrap_or_default(),
            model: options.model.clone(),
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: Self::convert_finish_reason(choice.finish_reason.as_deref()),
        })
    }
}

// Wire types

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<WireUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_conversion() {
        let messages = vec![
            Message::system("You are helpful."),
            Message::user("Hello"),
            Message::tool("[Tool 'x' returned]\n42", None),
        ];

        let converted = OpenAiCompatProvider::convert_messages(&messages);
        assert_eq!(converted.len(), 3);
        assert_eq!(converted[0].role, "system");
        assert_eq!(converted[2].role, "user");
    }

    #[test]
    fn test_vendor_constructors() {
        let groq = OpenAiCompatProvider::groq("key").unwrap();
        assert_eq!(groq.name(), "Groq");
        assert!(groq.base_url.contains("api.groq.com"));

        let openai = OpenAiCompatProvider::openai("key").unwrap();
        assert_eq!(openai.name(), "OpenAI");
    }

    #[test]
    fn test_finish_reason_mapping() {
        assert_eq!(
            OpenAiCompatProvider::convert_finish_reason(Some("stop")),
            Some(FinishReason::Stop)
        );
        assert_eq!(
            OpenAiCompatProvider::convert_finish_reason(Some("tool_calls")),
            Some(FinishReason::ToolUse)
        );
        assert_eq!(OpenAiCompatProvider::convert_finish_reason(None), None);
    }
}
