//! Image-generation client.

use crate::openai::dto::{ImageRequest, ImageResponse};
use async_trait::async_trait;
use parlato_core::{ImageGenerator, SkillConfig};
use parlato_error::{GenerationError, ParlatoResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Images requested per call.
const IMAGE_COUNT: u8 = 1;
/// Fixed image dimensions.
const IMAGE_SIZE: &str = "1024x1024";
/// Hosted-URL response format.
const RESPONSE_FORMAT: &str = "url";

/// Client for the image-generation endpoint.
///
/// Posts `{prompt, n: 1, size: "1024x1024", response_format: "url"}`
/// and extracts the first returned image URL.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    organization: Option<String>,
    url: String,
}

impl ImageClient {
    /// Creates an image client from the skill configuration.
    #[instrument(skip(config))]
    pub fn new(config: &SkillConfig) -> Self {
        debug!(url = %config.images_url(), "Created image client");

        Self {
            client: Client::new(),
            api_key: config.api_key().clone(),
            organization: config.organization().clone(),
            url: config.images_url().clone(),
        }
    }

    /// Generates one image for the prompt, returning its hosted URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the response cannot be parsed.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ImageRequest::builder()
            .prompt(prompt)
            .n(IMAGE_COUNT)
            .size(IMAGE_SIZE)
            .response_format(RESPONSE_FORMAT)
            .build()
            .map_err(|e| GenerationError::Builder(format!("Failed to build request: {}", e)))?;

        debug!(size = IMAGE_SIZE, "Sending image request");

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

        let images: ImageResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(images = images.data.len(), "Received image response");

        images
            .data
            .first()
            .map(|datum| datum.url.clone())
            .ok_or_else(|| GenerationError::ResponseParsing("No images in response".to_string()))
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn render(&self, prompt: &str) -> ParlatoResult<String> {
        Ok(self.generate(prompt).await?)
    }
}
