//! Generic generation handler.

use crate::handlers::{QUESTION_SLOT, require_slot};
use crate::skill::{RE_PROMPT, RequestHandler};
use async_trait::async_trait;
use parlato_core::{RequestEnvelope, SpeechResponse, TextGenerator};
use parlato_error::ParlatoResult;
use std::sync::Arc;
use tracing::debug;

/// Intent name prefix the generic handler matches on.
pub const INTENT_PREFIX: &str = "ChatGPT";

const INTENT_SUFFIX: &str = "Intent";

/// Handler for generation intents.
///
/// Matches any intent name starting with `ChatGPT`; must be
/// registered after the more specific chat-relay handler, which
/// shares the prefix.
pub struct GenerationHandler {
    text: Arc<dyn TextGenerator>,
}

impl GenerationHandler {
    /// Creates the handler with a text-generation backend.
    pub fn new(text: Arc<dyn TextGenerator>) -> Self {
        Self { text }
    }

    /// Derives the literal prompt from the intent naming contract.
    ///
    /// An intent named `ChatGPT{Trigger}Intent` contributes
    /// `{Trigger}` as a prefix word: `ChatGPTDefineIntent` with
    /// question "entropy" yields "Define entropy". Names outside the
    /// contract, including the bare `ChatGPTIntent`, contribute no
    /// trigger word and the question is forwarded as-is.
    fn derive_prompt(intent_name: &str, question: &str) -> String {
        let trigger = intent_name
            .strip_prefix(INTENT_PREFIX)
            .and_then(|rest| rest.strip_suffix(INTENT_SUFFIX))
            .unwrap_or("");

        if trigger.is_empty() {
            question.to_string()
        } else {
            format!("{} {}", trigger, question)
        }
    }
}

#[async_trait]
impl RequestHandler for GenerationHandler {
    fn name(&self) -> &'static str {
        "generation"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_request_type("IntentRequest")
            && envelope.intent_name().starts_with(INTENT_PREFIX)
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        let question = require_slot(envelope, QUESTION_SLOT)?;
        let prompt = Self::derive_prompt(envelope.intent_name(), question);
        debug!(intent = %envelope.intent_name(), prompt = %prompt, "Forwarding prompt");

        let speech = self.text.complete(&prompt).await?;

        Ok(SpeechResponse::builder()
            .speak(speech)
            .ask(RE_PROMPT)
            .should_end_session(false)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_word_joins_question() {
        assert_eq!(
            GenerationHandler::derive_prompt("ChatGPTDefineIntent", "entropy"),
            "Define entropy"
        );
    }

    #[test]
    fn bare_intent_forwards_question_unchanged() {
        assert_eq!(
            GenerationHandler::derive_prompt("ChatGPTIntent", "what is entropy"),
            "what is entropy"
        );
    }

    #[test]
    fn name_outside_contract_contributes_no_trigger() {
        assert_eq!(
            GenerationHandler::derive_prompt("ChatGPTSlackHandler", "hello"),
            "hello"
        );
    }
}
