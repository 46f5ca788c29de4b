//! Test helper utilities for testcase-gen integration tests
//!
//! This module provides reusable fixtures for driving the real HTTP transport
//! against a wiremock server.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use serde_json::{json, Value};
use std::time::Duration;
use testcase_gen::{AdapterConfig, ProviderPreset, TestCaseGenerator};
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "integration-test-token";
pub const CHAT_PATH: &str = "/v1/chat/completions";

/// Preset configuration pointed at the mock server
pub fn config_for_server(server: &MockServer, provider: ProviderPreset) -> AdapterConfig {
    AdapterConfig::for_provider(provider)
        .with_auth_token(TEST_TOKEN)
        .with_endpoint_url(format!("{}{CHAT_PATH}", server.uri()))
        .with_request_timeout(Duration::from_secs(5))
}

pub fn generator_for_server(server: &MockServer, provider: ProviderPreset) -> TestCaseGenerator {
    TestCaseGenerator::new(config_for_server(server, provider))
}

/// Chat-completion success envelope carrying `content`
pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-integration",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200 }
    })
}

pub fn success_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(chat_completion_body(content))
}

/// A realistic five-case reply for the Pytest/Robot/manual variant
pub fn five_case_reply() -> String {
    let cases: Vec<Value> = (1..=5)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Login scenario {id}"),
                "description": "User attempts to log in",
                "input": "username and password",
                "expected_output": "Dashboard is shown",
                "priority": "High",
                "type": "Functional",
                "pytest_code": "def test_login():\n    assert login('demo', 'secret')",
                "robot_code": "*** Test Cases ***\nValid Login\n    Open Browser    https://example.com",
                "manual_steps": "1. Open the app\n2. Log in"
            })
        })
        .collect();
    Value::Array(cases).to_string()
}
