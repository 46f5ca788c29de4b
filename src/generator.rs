//! The test-case generation adapter
//!
//! [`TestCaseGenerator::generate`] is total: every failure along the pipeline is
//! turned into a one-record placeholder batch, so callers always get a non-empty
//! batch and never an error.

use crate::config::AdapterConfig;
use crate::core_types::TestCaseRecord;
use crate::error::{GenResult, GenerationError};
use crate::logging::{log_debug, log_info};
use crate::normalize::normalize_cases;
use crate::prompt;
use crate::response_parser::ResponseParser;
use crate::transport::{ChatTransport, HttpTransport};
use std::fmt;
use std::sync::Arc;

/// Turns a requirement into a batch of normalized test cases
///
/// Holds only read-only configuration and a shared transport, so a single
/// instance can serve concurrent callers.
#[derive(Clone)]
pub struct TestCaseGenerator {
    config: AdapterConfig,
    transport: Arc<dyn ChatTransport>,
}

impl fmt::Debug for TestCaseGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCaseGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TestCaseGenerator {
    /// Generator using the reqwest-backed transport
    ///
    /// The configuration is validated on every call; an unusable one yields a
    /// `Configuration Error` placeholder without touching the network.
    pub fn new(config: AdapterConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Generator using a caller-supplied transport
    pub fn with_transport(config: AdapterConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Generate a batch for `requirement`
    ///
    /// Performs at most one outbound request. On any failure the batch holds a
    /// single placeholder record whose `title` names the failure class.
    pub async fn generate(&self, requirement: &str) -> Vec<TestCaseRecord> {
        match self.try_generate(requirement).await {
            Ok(records) => records,
            Err(err) => err.into_placeholder_batch(&self.config),
        }
    }

    async fn try_generate(&self, requirement: &str) -> GenResult<Vec<TestCaseRecord>> {
        let provider = self.config.provider;

        // Credential gate, before anything touches the network
        let auth_token = self.config.credential().ok_or_else(|| {
            GenerationError::configuration_error(format!(
                "No API credential configured for {}. Set {} in the environment or .env file.",
                provider.display_name(),
                provider.credential_env_var()
            ))
        })?;
        self.config.validate()?;

        let request_id = uuid::Uuid::new_v4();
        let request = prompt::build_request(&self.config, requirement);

        log_debug!(
            request_id = %request_id,
            provider = %provider,
            model = %self.config.model,
            schema_variant = %self.config.schema_variant,
            requirement_length = requirement.len(),
            "Sending test case generation request"
        );

        let response = self
            .transport
            .send(
                &self.config.endpoint_url,
                auth_token,
                &request,
                self.config.request_timeout,
            )
            .await
            .map_err(GenerationError::transport)?;

        log_debug!(
            request_id = %request_id,
            status = response.status,
            body_length = response.body.len(),
            "Chat completion response received"
        );

        if !response.is_success() {
            return Err(GenerationError::provider_error(
                response.status,
                ResponseParser::error_message(response.status, &response.body),
            ));
        }

        let entries = ResponseParser::parse_success_body(&response.body)?;
        let received = entries.len();
        let records = normalize_cases(entries, self.config.schema_variant)?;

        log_info!(
            request_id = %request_id,
            provider = %provider,
            received = received,
            accepted = records.len(),
            "Generated test cases"
        );

        Ok(records)
    }
}
