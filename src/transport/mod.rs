//! Outbound transport for chat-completion requests
//!
//! The generator performs exactly one HTTP exchange per call, and it goes through
//! [`ChatTransport`] so it can be replaced in tests. The transport reports what
//! happened on the wire (a status and a body, or a [`TransportError`]) and leaves
//! all interpretation to the generator.
//!
//! - `types` - OpenAI-compatible request/response structures
//! - `http` - reqwest-backed [`HttpTransport`]

pub mod http;
pub mod types;

use std::time::Duration;
use thiserror::Error;

pub use http::HttpTransport;
pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatResponseMessage,
    ChatRole,
};

/// Network-level failure, before any HTTP response was obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout { timeout_seconds: u64 },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Request failed: {message}")]
    Other { message: String },
}

/// Raw HTTP outcome of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a chat-completion request to an endpoint
///
/// Implementations must not retry and must give up once `timeout` elapses,
/// reporting [`TransportError::Timeout`].
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(
        &self,
        endpoint_url: &str,
        auth_token: &str,
        request: &ChatCompletionRequest,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;
}
