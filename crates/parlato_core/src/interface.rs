//! Interface traits for the outbound clients.
//!
//! Handlers depend on these seams rather than concrete clients, so
//! tests can substitute mocks without network access.

use crate::{ChatMessage, Delivery};
use async_trait::async_trait;
use parlato_error::ParlatoResult;

/// Text-completion backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a completion for the prompt, returning the first
    /// candidate's text.
    async fn complete(&self, prompt: &str) -> ParlatoResult<String>;
}

/// Image-generation backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates one image for the prompt, returning its URL.
    async fn render(&self, prompt: &str) -> ParlatoResult<String>;
}

/// Team chat webhook relay.
#[async_trait]
pub trait ChatRelay: Send + Sync {
    /// Posts the message, reporting the delivery outcome.
    ///
    /// Returns `Err` only when no delivery attempt completed; a
    /// non-success HTTP status is `Ok(Delivery::Failed(..))`.
    async fn post(&self, message: &ChatMessage) -> ParlatoResult<Delivery>;
}
