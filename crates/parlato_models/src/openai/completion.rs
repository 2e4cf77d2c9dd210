//! Text-completion client.

use crate::openai::dto::{CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use parlato_core::{SkillConfig, TextGenerator};
use parlato_error::{GenerationError, ParlatoResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the legacy text-completion endpoint.
///
/// Posts `{model, prompt, max_tokens, temperature}` and extracts the
/// first returned choice's text.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    organization: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    url: String,
}

impl CompletionClient {
    /// Creates a completion client from the skill configuration.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: &SkillConfig) -> Self {
        debug!(
            model = %config.model(),
            url = %config.completions_url(),
            "Created completion client"
        );

        Self {
            client: Client::new(),
            api_key: config.api_key().clone(),
            organization: config.organization().clone(),
            model: config.model().clone(),
            temperature: *config.temperature(),
            max_tokens: *config.max_tokens(),
            url: config.completions_url().clone(),
        }
    }

    /// Generates a completion for the prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the response cannot be parsed.
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = CompletionRequest::builder()
            .model(self.model.clone())
            .prompt(prompt)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .build()
            .map_err(|e| GenerationError::Builder(format!("Failed to build request: {}", e)))?;

        debug!(model = %self.model, "Sending completion request");

        let mut builder = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key));
        if let Some(org) = &self.organization {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder.json(&request).send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            GenerationError::Http(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = completion.choices.len(), "Received completion");

        completion
            .choices
            .first()
            .map(|choice| choice.text.clone())
            .ok_or_else(|| GenerationError::ResponseParsing("No choices in response".to_string()))
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for CompletionClient {
    async fn complete(&self, prompt: &str) -> ParlatoResult<String> {
        Ok(self.generate(prompt).await?)
    }
}
