//! # agent-runtime
//!
//! Runtime providers and configuration for the travel-agent system.
//!
//! ## Providers
//!
//! - **Groq** and **OpenAI**: one OpenAI-compatible chat client, different
//!   base URLs
//! - **Gemini**: Google `generateContent` client
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::{build_provider, Credentials, ProviderKind, Settings};
//!
//! let settings = Settings::load()?;
//! let credentials = Credentials::from_env();
//! let resolved = build_provider(ProviderKind::Gemini, &settings, &credentials)?;
//! ```

pub mod credentials;
pub mod factory;
pub mod gemini;
pub mod openai;
pub mod settings;

pub use credentials::Credentials;
pub use factory::{build_provider, ProviderKind, ResolvedProvider};
pub use gemini::GeminiProvider;
pub use openai::OpenAiCompatProvider;
pub use settings::Settings;

// Re-export core types for convenience
pub use agent_core::{Agent, AgentError, LlmProvider, Message, Result, Role, Tool, ToolRegistry};
