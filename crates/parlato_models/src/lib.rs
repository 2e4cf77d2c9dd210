//! Generation API clients for the parlato voice skill backend.
//!
//! Two thin callers over the generation API: one posts a
//! text-completion request and extracts the first choice's text, one
//! posts an image-generation request and extracts the first image
//! URL. Both implement the interface traits from `parlato_core`.

mod openai;

pub use openai::{
    CompletionClient, CompletionRequest, CompletionResponse, ImageClient, ImageRequest,
    ImageResponse,
};
