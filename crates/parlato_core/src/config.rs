//! Environment-sourced skill configuration.
//!
//! Populated once at cold start, read-only afterwards. Handlers
//! receive the configuration explicitly rather than reading the
//! process environment ad hoc.

use derive_builder::Builder;
use derive_getters::Getters;
use parlato_error::{ConfigError, ParlatoResult};

/// Default generation model when `MODEL` is unset.
pub const DEFAULT_MODEL: &str = "text-davinci-003";
/// Default sampling temperature when `TEMPERATURE` is unset.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
/// Default output token limit when `MAX_TOKENS` is unset.
pub const DEFAULT_MAX_TOKENS: u32 = 3000;
/// Default chat channel when `SLACK_CHANNEL` is unset.
pub const DEFAULT_CHANNEL: &str = "#chatgpt";

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";
const IMAGES_URL: &str = "https://api.openai.com/v1/images/generations";

/// Process-wide skill configuration.
///
/// # Examples
///
/// ```
/// use parlato_core::SkillConfig;
///
/// let config = SkillConfig::builder()
///     .api_key("sk-test")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "text-davinci-003");
/// assert_eq!(*config.max_tokens(), 3000);
/// ```
#[derive(Debug, Clone, Getters, Builder)]
#[builder(setter(into))]
pub struct SkillConfig {
    /// Generation API key
    api_key: String,
    /// Generation API organization, if any
    #[builder(default)]
    organization: Option<String>,
    /// Generation model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Sampling temperature, 0.0 to 2.0
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Maximum output tokens, positive
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Completion endpoint URL
    #[builder(default = "COMPLETIONS_URL.to_string()")]
    completions_url: String,
    /// Image-generation endpoint URL
    #[builder(default = "IMAGES_URL.to_string()")]
    images_url: String,
    /// Chat webhook URL, absent when relaying is disabled
    #[builder(default)]
    slack_url: Option<String>,
    /// Chat channel the webhook posts to
    #[builder(default = "DEFAULT_CHANNEL.to_string()")]
    slack_channel: String,
}

impl SkillConfig {
    /// Returns a builder for constructing a configuration.
    pub fn builder() -> SkillConfigBuilder {
        SkillConfigBuilder::default()
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_API_ORG`, `MODEL`,
    /// `TEMPERATURE`, `MAX_TOKENS`, `SLACK_URL`, `SLACK_CHANNEL`, and
    /// optional `OPENAI_COMPLETIONS_URL` / `OPENAI_IMAGES_URL`
    /// endpoint overrides.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the API key is missing, a numeric
    /// variable fails to parse, or a value falls outside its valid
    /// range.
    #[tracing::instrument]
    pub fn from_env() -> ParlatoResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::new("OPENAI_API_KEY is not set"))?;

        let temperature = match std::env::var("TEMPERATURE") {
            Ok(raw) => raw.parse::<f32>().map_err(|e| {
                ConfigError::new(format!("Failed to parse TEMPERATURE '{}': {}", raw, e))
            })?,
            Err(_) => DEFAULT_TEMPERATURE,
        };

        let max_tokens = match std::env::var("MAX_TOKENS") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::new(format!("Failed to parse MAX_TOKENS '{}': {}", raw, e))
            })?,
            Err(_) => DEFAULT_MAX_TOKENS,
        };

        let config = Self {
            api_key,
            organization: std::env::var("OPENAI_API_ORG").ok(),
            model: std::env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature,
            max_tokens,
            completions_url: std::env::var("OPENAI_COMPLETIONS_URL")
                .unwrap_or_else(|_| COMPLETIONS_URL.to_string()),
            images_url: std::env::var("OPENAI_IMAGES_URL")
                .unwrap_or_else(|_| IMAGES_URL.to_string()),
            slack_url: std::env::var("SLACK_URL").ok(),
            slack_channel: std::env::var("SLACK_CHANNEL")
                .unwrap_or_else(|_| DEFAULT_CHANNEL.to_string()),
        };

        config.validate()?;
        tracing::debug!(
            model = %config.model,
            temperature = config.temperature,
            max_tokens = config.max_tokens,
            channel = %config.slack_channel,
            relay_configured = config.slack_url.is_some(),
            "Loaded skill configuration"
        );
        Ok(config)
    }

    /// Validates value ranges.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when temperature falls outside 0.0-2.0
    /// or the token limit is zero.
    pub fn validate(&self) -> ParlatoResult<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(format!(
                "TEMPERATURE must be within 0.0-2.0, got {}",
                self.temperature
            ))
            .into());
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::new("MAX_TOKENS must be positive").into());
        }
        Ok(())
    }
}
