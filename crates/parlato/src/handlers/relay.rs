//! Chat-relay handler: generate a completion and post it to the
//! team chat webhook.

use crate::handlers::{QUESTION_SLOT, require_slot};
use crate::skill::{RE_PROMPT, RequestHandler};
use async_trait::async_trait;
use parlato_core::{ChatMessage, ChatRelay, RequestEnvelope, SpeechResponse, TextGenerator};
use parlato_error::{ParlatoResult, RelayError};
use std::sync::Arc;
use tracing::debug;

/// Intent name for the chat-relay variant.
pub const SLACK_INTENT: &str = "ChatGPTSlackHandler";

/// Handler for the chat-relay intent.
///
/// Registered before the generic generation handler, which would
/// otherwise also match the shared `ChatGPT` prefix.
pub struct SlackIntentHandler {
    text: Arc<dyn TextGenerator>,
    relay: Arc<dyn ChatRelay>,
    channel: String,
}

impl SlackIntentHandler {
    /// Creates the handler with its generation and relay backends.
    pub fn new(text: Arc<dyn TextGenerator>, relay: Arc<dyn ChatRelay>, channel: String) -> Self {
        Self {
            text,
            relay,
            channel,
        }
    }
}

/// Drops the first whitespace-delimited token.
///
/// The leading word is an addressee name, e.g. "Slack me about the
/// weather" forwards "me about the weather".
fn strip_addressee(question: &str) -> String {
    question
        .split_whitespace()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl RequestHandler for SlackIntentHandler {
    fn name(&self) -> &'static str {
        "slack-relay"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_intent_name(SLACK_INTENT)
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        let question = require_slot(envelope, QUESTION_SLOT)?;
        let prompt = strip_addressee(question);
        debug!(prompt = %prompt, "Forwarding relay prompt");

        let completion = self.text.complete(&prompt).await?;

        let message = ChatMessage::builder()
            .header(prompt)
            .body(completion)
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
