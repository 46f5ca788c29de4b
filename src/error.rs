//! Error types for test-case generation.
//!
//! Every failure the adapter can hit is represented by [`GenerationError`]. Inside
//! the crate these errors travel through `?` like any other; at the public boundary
//! [`TestCaseGenerator::generate`](crate::TestCaseGenerator::generate) converts
//! them into a one-record placeholder batch, so callers never see them there.
//! Configuration loading is the only public API that returns them directly.
//!
//! # Error Types
//!
//! | Variant | Category | Placeholder title |
//! |---------|----------|-------------------|
//! | `Configuration` | Client | `Configuration Error` |
//! | `Transport(Timeout)` | Transient | `Timeout Error` |
//! | `Transport(Connection)` | Transient | `Connection Error` |
//! | `Transport(Other)` | External | `Request Exception` |
//! | `Provider` | External | provider specific, e.g. `API Error` |
//! | `Parse` | External | `JSON Parse Error` / `Response Structure Error` |
//! | `Schema` | External | `No Valid Test Cases` |

use crate::config::{AdapterConfig, ProviderPreset};
use crate::core_types::{ArtifactField, CodeArtifacts, TestCaseRecord};
use crate::logging::{log_error, log_warn};
use crate::transport::TransportError;
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The provider or the model output was at fault.
    External,

    /// The adapter was configured incorrectly (missing credential, bad values).
    Client,

    /// Network-level failure that may succeed on a later, separate call.
    Transient,
}

/// Severity level for logging decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed and needs attention (credentials, provider rejections).
    Error,

    /// Unexpected but recoverable, usually bad model output or a slow network.
    Warning,
}

/// Where in response handling a parse failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// Response body is not JSON at all
    Envelope,
    /// Body is JSON but lacks `choices[0].message.content`
    EnvelopeShape,
    /// Message content is not a JSON array
    Payload,
}

// ============================================================================
// Generation error
// ============================================================================

/// Convenient result type for generation internals and configuration loading.
pub type GenResult<T> = std::result::Result<T, GenerationError>;

/// Errors that can occur while generating a batch.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use testcase_gen::GenerationError;
///
/// let err = GenerationError::configuration_error("Missing API key");
/// assert_eq!(err.to_string(), "Configuration error: Missing API key");
/// ```
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Adapter configuration is unusable, including a missing credential.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// No HTTP response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider answered with a non-2xx status.
    #[error("Provider returned HTTP {status}: {message}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// The response or its content could not be decoded.
    #[error("Response parsing failed: {message}")]
    Parse {
        stage: ParseStage,
        message: String,
    },

    /// The decoded array held no usable test case.
    #[error("No valid test cases in response ({rejected} entries rejected)")]
    Schema {
        /// Number of entries dropped during normalization.
        rejected: usize,
    },
}

impl GenerationError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration { .. } => ErrorCategory::Client,
            Self::Transport(TransportError::Timeout { .. })
            | Self::Transport(TransportError::Connection { .. }) => ErrorCategory::Transient,
            Self::Transport(TransportError::Other { .. }) => ErrorCategory::External,
            Self::Provider { .. } => ErrorCategory::External,
            Self::Parse { .. } => ErrorCategory::External,
            Self::Schema { .. } => ErrorCategory::External,
        }
    }

    /// Get the error severity for logging.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration { .. } => ErrorSeverity::Error,
            Self::Transport(TransportError::Other { .. }) => ErrorSeverity::Error,
            Self::Transport(_) => ErrorSeverity::Warning,
            Self::Provider { .. } => ErrorSeverity::Error,
            Self::Parse { .. } => ErrorSeverity::Warning,
            Self::Schema { .. } => ErrorSeverity::Warning,
        }
    }

    /// Title of the placeholder record standing in for this error.
    pub fn title(&self, provider: ProviderPreset) -> &'static str {
        match self {
            Self::Configuration { .. } => "Configuration Error",
            Self::Transport(TransportError::Timeout { .. }) => "Timeout Error",
            Self::Transport(TransportError::Connection { .. }) => "Connection Error",
            Self::Transport(TransportError::Other { .. }) => "Request Exception",
            Self::Provider { .. } => provider.api_error_title(),
            Self::Parse {
                stage: ParseStage::EnvelopeShape,
                ..
            } => "Response Structure Error",
            Self::Parse { .. } => "JSON Parse Error",
            Self::Schema { .. } => "No Valid Test Cases",
        }
    }

    /// Diagnostic text of the placeholder record.
    pub fn description(&self, config: &AdapterConfig) -> String {
        let service = config.provider.display_name();
        match self {
            Self::Configuration { message } => message.clone(),
            Self::Transport(TransportError::Timeout { timeout_seconds }) => {
                format!("Request to {service} timed out after {timeout_seconds} seconds")
            }
            Self::Transport(TransportError::Connection { .. }) => {
                format!("Could not connect to {service}. Check your internet connection.")
            }
            Self::Transport(TransportError::Other { message }) => message.clone(),
            Self::Provider { message, .. } => message.clone(),
            Self::Parse {
                stage: ParseStage::EnvelopeShape,
                message,
            } => format!("Unexpected response structure: {message}"),
            Self::Parse { message, .. } => {
                format!("Could not parse API response as JSON: {message}")
            }
            Self::Schema { .. } => "No valid test cases were generated by the model".to_string(),
        }
    }

    /// Note placed in an artifact field of the placeholder record.
    fn unavailable_note(&self, field: ArtifactField, title: &str) -> String {
        match (self, field) {
            (Self::Configuration { .. }, ArtifactField::ManualSteps) => {
                "No manual steps available - credential missing".to_string()
            }
            (Self::Configuration { .. }, code) => {
                format!("No {} code available - credential missing", code.label())
            }
            (Self::Schema { .. }, _) => "No valid test cases generated".to_string(),
            (_, ArtifactField::ManualSteps) => format!("{title} - No manual steps available"),
            _ => format!("{title} - No code available"),
        }
    }

    /// Convert into the one-record batch handed to callers in place of a result.
    pub fn into_placeholder_batch(self, config: &AdapterConfig) -> Vec<TestCaseRecord> {
        let title = self.title(config.provider);
        let description = self.description(config);
        let artifacts = CodeArtifacts::build(config.schema_variant, |field| {
            field.unavailable(&self.unavailable_note(field, title))
        });
        vec![TestCaseRecord::placeholder(title, description, artifacts)]
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Adapter configuration invalid"
        );
        Self::Configuration { message }
    }

    pub fn transport(error: TransportError) -> Self {
        match &error {
            TransportError::Other { message } => log_error!(
                error_type = "transport_error",
                message = %message,
                "Chat completion request failed"
            ),
            other => log_warn!(
                error_type = "transport_error",
                error = %other,
                "Chat completion request did not complete"
            ),
        }
        Self::Transport(error)
    }

    pub fn provider_error(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "provider_error",
            status = status,
            message = %message,
            "Provider rejected chat completion request"
        );
        Self::Provider { status, message }
    }

    pub fn parse_error(stage: ParseStage, message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "parse_error",
            stage = ?stage,
            message = %message,
            "Provider response could not be decoded"
        );
        Self::Parse { stage, message }
    }

    pub fn no_valid_test_cases(rejected: usize) -> Self {
        log_warn!(
            error_type = "schema_error",
            rejected = rejected,
            "Model output contained no valid test cases"
        );
        Self::Schema { rejected }
    }
}
