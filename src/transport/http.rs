//! reqwest-backed transport

use super::{ChatCompletionRequest, ChatTransport, TransportError, TransportResponse};
use crate::logging::{log_debug, log_error};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// HTTP transport for OpenAI-compatible chat-completions endpoints
///
/// Holds a shared `reqwest::Client`; no other state, so one instance can serve
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (proxies, custom TLS roots)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build JSON and bearer authentication headers
    pub fn build_auth_headers(auth_token: &str) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {auth_token}")).map_err(|e| {
                TransportError::Other {
                    message: format!("Invalid credential format: {e}"),
                }
            })?,
        );

        Ok(headers)
    }

    /// Classify a reqwest failure, most specific first
    fn classify_error(error: reqwest::Error, timeout: Duration) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                timeout_seconds: timeout.as_secs(),
            }
        } else if error.is_connect() {
            TransportError::Connection {
                message: error.to_string(),
            }
        } else {
            TransportError::Other {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait::async_trait]
impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        endpoint_url: &str,
        auth_token: &str,
        request: &ChatCompletionRequest,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let headers = Self::build_auth_headers(auth_token)?;

        let response = self
            .client
            .post(endpoint_url)
            .headers(headers)
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    url = %endpoint_url,
                    error = %e,
                    "HTTP request failed"
                );
                Self::classify_error(e, timeout)
            })?;

        let status = response.status().as_u16();
        log_debug!(url = %endpoint_url, status = status, "Received HTTP response");

        let body = response.text().await.map_err(|e| {
            log_error!(
                url = %endpoint_url,
                error = %e,
                "Failed to read response body"
            );
            Self::classify_error(e, timeout)
        })?;

        Ok(TransportResponse { status, body })
    }
}
