//! Fixed-response handlers: no external calls, static or
//! template-derived speech.

use crate::skill::RequestHandler;
use async_trait::async_trait;
use parlato_core::{RequestEnvelope, SpeechResponse};
use parlato_error::ParlatoResult;

const GREETING: &str = "ChatGPT here";
const HELP: &str = "You can say hello to me! How can I help?";
const GOODBYE: &str = "Goodbye!";

/// Handler for skill launch.
pub struct LaunchHandler;

#[async_trait]
impl RequestHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_request_type("LaunchRequest")
    }

    async fn handle(&self, _envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        Ok(SpeechResponse::builder()
            .speak(GREETING)
            .ask(GREETING)
            .build())
    }
}

/// Handler for the platform help intent.
pub struct HelpHandler;

#[async_trait]
impl RequestHandler for HelpHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_intent_name("AMAZON.HelpIntent")
    }

    async fn handle(&self, _envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        Ok(SpeechResponse::builder().speak(HELP).ask(HELP).build())
    }
}

/// Single handler for the cancel and stop intents.
pub struct CancelStopHandler;

#[async_trait]
impl RequestHandler for CancelStopHandler {
    fn name(&self) -> &'static str {
        "cancel-stop"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_intent_name("AMAZON.CancelIntent")
            || envelope.is_intent_name("AMAZON.StopIntent")
    }

    async fn handle(&self, _envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        // No re-prompt: the session ends here.
        Ok(SpeechResponse::builder().speak(GOODBYE).build())
    }
}

/// Handler for session end. Any cleanup would go here; there is none.
pub struct SessionEndedHandler;

#[async_trait]
impl RequestHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session-ended"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_request_type("SessionEndedRequest")
    }

    async fn handle(&self, _envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        Ok(SpeechResponse::empty())
    }
}

/// Catch-all echoing the matched intent name.
///
/// Used for interaction-model testing and debugging; it must stay
/// last in the chain so it never shadows a custom intent handler.
pub struct ReflectorHandler;

#[async_trait]
impl RequestHandler for ReflectorHandler {
    fn name(&self) -> &'static str {
        "reflector"
    }

    fn can_handle(&self, envelope: &RequestEnvelope) -> bool {
        envelope.is_request_type("IntentRequest")
    }

    async fn handle(&self, envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        let speech = format!("You just triggered {}.", envelope.intent_name());
        Ok(SpeechResponse::builder().speak(speech).build())
    }
}
