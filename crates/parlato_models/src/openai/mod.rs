//! OpenAI generation API clients.
//!
//! The completion client uses the legacy completions endpoint (plain
//! prompt in, first choice text out); the image client uses the image
//! generation endpoint with a URL response format.

mod completion;
mod dto;
mod image;

pub use completion::CompletionClient;
pub use dto::{CompletionRequest, CompletionResponse, ImageRequest, ImageResponse};
pub use image::ImageClient;
