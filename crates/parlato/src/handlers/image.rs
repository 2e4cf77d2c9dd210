//! Image handler: generate an image and post it to the team chat
//! webhook.

use crate::handlers::{QUESTION_SLOT, require_slot};
use crate::skill::{RE_PROMPT, RequestHandler};
use async_trait::async_trait;
use parlato_core::{ChatMessage, ChatRelay, ImageGenerator, RequestEnvelope, SpeechResponse};
use parlato_error::{ParlatoResult, RelayError};
use std::sync::Arc;
use tracing::debug;

/// Intent name for the image variant.
pub const IMAGE_INTENT: &str = "ImageHandler";

/// Handler for the image-generation intent.
pub struct ImageIntentHandler {
    image: Arc<dyn ImageGenerator>,
    relay: Arc<dyn ChatRelay>,
    channel: String,
}

impl ImageIntentHandler {
    /// Creates the handler with its image and relay backends.
    pub fn new(image: Arc<dyn ImageGenerator>, relay: Arc<dyn ChatRelay>, channel: String) -> Self {
        Self {
            image,
            relay,
            channel,
        }
    }
}

#[async_trait]
impl RequestHandler for ImageIntentHandler {
    fn name(&self) -> &'static str {
        "image"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_intent_name(IMAGE_INTENT)
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        // The full question is the prompt; no trigger-word stripping.
        let question = require_slot(envelope, QUESTION_SLOT)?;
        debug!(prompt = %question, "Forwarding image prompt");

        let url = self.image.render(question).await?;

        let message = ChatMessage::builder()
            .header(question)
            .image_url(url)
            .channel(self.channel.clone())
            .build()
            .map_err(|e| RelayError::Payload(format!("Failed to build message: {}", e)))?;

        let delivery = self.relay.post(&message).await?;

        Ok(SpeechResponse::builder()
            .speak(format!("{} sending to slack", delivery.word()))
            .ask(RE_PROMPT)
            .should_end_session(false)
            .build())
    }
}
