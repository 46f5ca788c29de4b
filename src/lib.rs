//! # testcase-gen
//!
//! Turns a natural-language requirement into a batch of structured test cases by
//! asking an OpenAI-compatible chat-completions endpoint (Groq or GitHub Models).
//!
//! ## Key Features
//!
//! - **Total API**: `generate` always returns a non-empty batch; failures become a
//!   single placeholder record whose `title` names what went wrong
//! - **Schema Variants**: Selenium + Pytest, or Pytest + Robot Framework + manual steps
//! - **Defensive Parsing**: code fences stripped, missing fields defaulted, non-object
//!   entries skipped
//! - **Injectable Transport**: the single HTTP exchange goes through [`ChatTransport`]
//! - **Exports**: JSON views and CSV spreadsheet export of a batch
//!
//! ## Example
//!
//! ```rust,no_run
//! use testcase_gen::{AdapterConfig, ProviderPreset, TestCaseGenerator};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AdapterConfig::for_provider(ProviderPreset::Groq)
//!     .with_auth_token("your-api-key");
//!
//! let generator = TestCaseGenerator::new(config);
//! let batch = generator.generate("Users can log in with email and password").await;
//!
//! for case in &batch {
//!     println!("{} [{}] {}", case.id, case.priority, case.title);
//! }
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod normalize;
pub mod prompt;
pub mod response_parser;
pub mod transport;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{AdapterConfig, ProviderPreset, DEFAULT_CASE_COUNT};
pub use error::{ErrorCategory, ErrorSeverity, GenResult, GenerationError, ParseStage};
pub use export::ExportError;
pub use generator::TestCaseGenerator;
pub use response_parser::ResponseParser;
pub use transport::{
    ChatCompletionRequest, ChatMessage, ChatRole, ChatTransport, HttpTransport, TransportError,
    TransportResponse,
};

pub use core_types::{ArtifactField, CodeArtifacts, SchemaVariant, TestCaseRecord, PLACEHOLDER_TYPE};
