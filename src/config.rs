//! Adapter configuration
//!
//! [`AdapterConfig`] carries everything one generation call needs: endpoint,
//! credential, model parameters, timeout and the schema variant. The two supported
//! hosted endpoints are selected through [`ProviderPreset`], which only supplies
//! defaults; every field stays overridable.

use crate::core_types::SchemaVariant;
use crate::error::{GenResult, GenerationError};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Number of test cases the prompt asks for unless configured otherwise
pub const DEFAULT_CASE_COUNT: usize = 5;

/// Hosted chat-completions endpoint the adapter talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderPreset {
    /// Groq OpenAI-compatible endpoint
    Groq,
    /// GitHub Models (Azure inference) endpoint
    #[default]
    GithubModels,
}

impl ProviderPreset {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::GithubModels => "github_models",
        }
    }

    /// Name used in user-facing diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Groq => "Groq API",
            Self::GithubModels => "GitHub Models API",
        }
    }

    /// Environment variable holding the bearer credential
    pub fn credential_env_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::GithubModels => "GITHUB_TOKEN",
        }
    }

    /// Title of the placeholder record for non-2xx responses
    pub fn api_error_title(self) -> &'static str {
        match self {
            Self::Groq => "API Error",
            Self::GithubModels => "GitHub Models API Error",
        }
    }

    pub fn default_endpoint_url(self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai/v1/chat/completions",
            Self::GithubModels => "https://models.inference.ai.azure.com/chat/completions",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Self::Groq => "llama3-70b-8192",
            Self::GithubModels => "gpt-4.1",
        }
    }

    pub fn default_temperature(self) -> f64 {
        match self {
            Self::Groq => 0.3,
            Self::GithubModels => 0.7,
        }
    }

    pub fn default_timeout(self) -> Duration {
        match self {
            Self::Groq => Duration::from_secs(30),
            Self::GithubModels => Duration::from_secs(60),
        }
    }

    pub fn default_schema_variant(self) -> SchemaVariant {
        match self {
            Self::Groq => SchemaVariant::SeleniumPytest,
            Self::GithubModels => SchemaVariant::PytestRobotManual,
        }
    }
}

impl fmt::Display for ProviderPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderPreset {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "github_models" | "github" => Ok(Self::GithubModels),
            other => Err(GenerationError::configuration_error(format!(
                "Unsupported provider: {other}. Supported providers: groq, github_models"
            ))),
        }
    }
}

/// Configuration of one test-case generation adapter
#[derive(Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub provider: ProviderPreset,
    pub endpoint_url: String,
    /// Bearer credential; absence is handled by the generator, not by validation
    #[serde(skip_serializing, default)]
    pub auth_token: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub request_timeout: Duration,
    pub schema_variant: SchemaVariant,
    pub case_count: usize,
}

impl fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("provider", &self.provider)
            .field("endpoint_url", &self.endpoint_url)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "<redacted>"),
            )
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("request_timeout", &self.request_timeout)
            .field("schema_variant", &self.schema_variant)
            .field("case_count", &self.case_count)
            .finish()
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::for_provider(ProviderPreset::default())
    }
}

impl AdapterConfig {
    /// Preset defaults for `provider`, without a credential
    pub fn for_provider(provider: ProviderPreset) -> Self {
        Self {
            provider,
            endpoint_url: provider.default_endpoint_url().to_string(),
            auth_token: None,
            model: provider.default_model().to_string(),
            temperature: provider.default_temperature(),
            max_output_tokens: 6000,
            request_timeout: provider.default_timeout(),
            schema_variant: provider.default_schema_variant(),
            case_count: DEFAULT_CASE_COUNT,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = url.into();
        self
    }

    pub fn with_schema_variant(mut self, variant: SchemaVariant) -> Self {
        self.schema_variant = variant;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Usable credential, treating blank strings as absent
    pub fn credential(&self) -> Option<&str> {
        self.auth_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Validate the configuration values
    ///
    /// A missing credential is not an error here: the generator answers it with a
    /// configuration placeholder instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Configuration`] if:
    /// - The endpoint URL is empty
    /// - Temperature is outside `0.0..=2.0`
    /// - The token budget, timeout or case count is zero
    pub fn validate(&self) -> GenResult<()> {
        if self.endpoint_url.trim().is_empty() {
            return Err(GenerationError::configuration_error(
                "Endpoint URL is required",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(GenerationError::configuration_error(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(GenerationError::configuration_error(
                "max_output_tokens must be greater than zero",
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(GenerationError::configuration_error(
                "Request timeout must be greater than zero",
            ));
        }
        if self.case_count == 0 {
            return Err(GenerationError::configuration_error(
                "case_count must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Load `.env` from the working directory (if present), then read the environment
    ///
    /// # Errors
    ///
    /// Same as [`AdapterConfig::from_env`].
    pub fn from_dotenv() -> GenResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => log_debug!(path = %path.display(), "Loaded .env file"),
            Err(e) => log_debug!(error = %e, "No .env file loaded"),
        }
        Self::from_env()
    }

    /// Load configuration from environment variables
    /// This is the ONLY method that should access environment variables
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Configuration`] if:
    /// - `TESTGEN_PROVIDER` names an unknown provider
    /// - A numeric override cannot be parsed
    /// - `TESTGEN_SCHEMA_VARIANT` names an unknown variant
    /// - The resulting configuration fails [`AdapterConfig::validate`]
    pub fn from_env() -> GenResult<Self> {
        let provider = match std::env::var("TESTGEN_PROVIDER") {
            Ok(name) => name.parse::<ProviderPreset>()?,
            Err(_) => ProviderPreset::default(),
        };

        log_debug!(
            target_provider = %provider,
            "Loading adapter configuration from environment"
        );

        let mut config = Self::for_provider(provider);
        config.auth_token = std::env::var(provider.credential_env_var())
            .ok()
            .filter(|token| !token.trim().is_empty());

        if let Ok(url) = std::env::var("TESTGEN_ENDPOINT_URL") {
            config.endpoint_url = url;
        }
        if let Ok(model) = std::env::var("TESTGEN_MODEL") {
            config.model = model;
        }
        if let Some(temperature) = Self::parse_env::<f64>("TESTGEN_TEMPERATURE")? {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = Self::parse_env::<u32>("TESTGEN_MAX_TOKENS")? {
            config.max_output_tokens = max_tokens;
        }
        if let Some(secs) = Self::parse_env::<u64>("TESTGEN_TIMEOUT_SECS")? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(count) = Self::parse_env::<usize>("TESTGEN_CASE_COUNT")? {
            config.case_count = count;
        }
        if let Ok(variant) = std::env::var("TESTGEN_SCHEMA_VARIANT") {
            config.schema_variant = variant
                .parse::<SchemaVariant>()
                .map_err(GenerationError::configuration_error)?;
        }

        config.validate()?;

        log_debug!(
            provider = %config.provider,
            endpoint_url = %config.endpoint_url,
            model = %config.model,
            schema_variant = %config.schema_variant,
            has_auth_token = config.auth_token.is_some(),
            "Adapter configuration loaded and validated"
        );

        Ok(config)
    }

    /// Parse an optional environment variable
    fn parse_env<T>(key: &str) -> GenResult<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match std::env::var(key) {
            Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
                GenerationError::configuration_error(format!("Invalid value for {key}: {e}"))
            }),
            Err(_) => Ok(None),
        }
    }
}
