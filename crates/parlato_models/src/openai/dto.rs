//! Data transfer objects for the generation API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Legacy completion request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Literal prompt text
    prompt: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl CompletionRequest {
    /// Creates a new builder for CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// A candidate completion in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// The completion text
    pub text: String,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Completion endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Candidate completions, first entry is used
    pub choices: Vec<CompletionChoice>,
}

/// Image-generation request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Literal prompt text
    prompt: String,
    /// Number of images requested
    n: u8,
    /// Image dimensions, e.g. "1024x1024"
    size: String,
    /// Response format, "url" for hosted images
    response_format: String,
}

impl ImageRequest {
    /// Creates a new builder for ImageRequest.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// A generated image descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDatum {
    /// Hosted URL of the generated image
    pub url: String,
}

/// Image endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    /// Generated image descriptors, first entry is used
    pub data: Vec<ImageDatum>,
}
