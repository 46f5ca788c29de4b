//! Test helper utilities for unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::config::{AdapterConfig, ProviderPreset};
use crate::core_types::SchemaVariant;
use crate::generator::TestCaseGenerator;
use crate::transport::{
    ChatCompletionRequest, ChatTransport, MockChatTransport, TransportError, TransportResponse,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_ENDPOINT: &str = "https://llm.test.local/v1/chat/completions";

/// Preset configuration with a credential and a local endpoint
pub fn create_test_config(provider: ProviderPreset) -> AdapterConfig {
    AdapterConfig::for_provider(provider)
        .with_auth_token(TEST_TOKEN)
        .with_endpoint_url(TEST_ENDPOINT)
}

pub fn create_test_config_with_variant(variant: SchemaVariant) -> AdapterConfig {
    create_test_config(ProviderPreset::GithubModels).with_schema_variant(variant)
}

/// Success envelope whose first choice carries `content`
pub fn envelope_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Mock transport answering every call with `outcome`, expected exactly once
pub fn mock_transport_once(
    outcome: Result<TransportResponse, TransportError>,
) -> MockChatTransport {
    let mut transport = MockChatTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(move |_, _, _, _| outcome.clone());
    transport
}

pub fn generator_with(config: AdapterConfig, transport: MockChatTransport) -> TestCaseGenerator {
    TestCaseGenerator::with_transport(config, Arc::new(transport))
}

/// Generator whose single transport call returns HTTP 200 with `content`
pub fn generator_returning_content(config: AdapterConfig, content: &str) -> TestCaseGenerator {
    generator_with(
        config,
        mock_transport_once(Ok(TransportResponse::new(200, envelope_body(content)))),
    )
}

/// Arguments of one recorded `send` call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint_url: String,
    pub auth_token: String,
    pub request: ChatCompletionRequest,
    pub timeout: Duration,
}

/// Transport that records its arguments and replays a fixed outcome
pub struct RecordingTransport {
    outcome: Result<TransportResponse, TransportError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn new(outcome: Result<TransportResponse, TransportError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatTransport for RecordingTransport {
    async fn send(
        &self,
        endpoint_url: &str,
        auth_token: &str,
        request: &ChatCompletionRequest,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint_url: endpoint_url.to_string(),
            auth_token: auth_token.to_string(),
            request: request.clone(),
            timeout,
        });
        self.outcome.clone()
    }
}
