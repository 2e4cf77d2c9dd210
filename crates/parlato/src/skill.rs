//! The skill dispatcher.
//!
//! An ordered handler chain evaluated in registration order: the
//! first handler whose predicate matches the envelope handles it.
//! Registration order is the documented precedence — more specific
//! intent handlers go before the generic prefix handler, and the
//! reflector goes last so it never shadows a custom handler.

use crate::handlers::{
    CancelStopHandler, GenerationHandler, HelpHandler, ImageIntentHandler, LaunchHandler,
    ReflectorHandler, SessionEndedHandler, SlackIntentHandler,
};
use async_trait::async_trait;
use parlato_core::{
    ChatMessage, ChatRelay, Delivery, ImageGenerator, RequestEnvelope, SkillConfig,
    SpeechResponse, TextGenerator,
};
use parlato_error::{ParlatoResult, RelayError, UnhandledRequestError};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Fixed re-prompt spoken when the session stays open.
pub const RE_PROMPT: &str = "Do you have any other questions?";

/// Fixed apology spoken when a handler fails.
pub const APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// One entry in the handler chain.
///
/// `can_handle` tests request type or intent name; `handle` composes
/// the speech response, with any error surfacing to the skill's
/// global apology path.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Handler name for logging.
    fn name(&self) -> &'static str;

    /// Whether this handler takes the request.
    fn can_handle(&self, envelope: &RequestEnvelope) -> bool;

    /// Composes the response for a matched request.
    async fn handle(&self, envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse>;
}

/// The skill entry point: an ordered chain of request handlers.
pub struct Skill {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl Skill {
    /// Returns a builder for assembling a handler chain.
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    /// Assembles the standard handler chain in documented precedence:
    /// launch, chat-relay intent, image intent, generic generation
    /// intent, help, cancel/stop, session-end, reflector.
    pub fn with_default_handlers(
        config: &SkillConfig,
        text: Arc<dyn TextGenerator>,
        image: Arc<dyn ImageGenerator>,
        relay: Arc<dyn ChatRelay>,
    ) -> Self {
        let channel = config.slack_channel().clone();
        Self::builder()
            .add_handler(LaunchHandler)
            .add_handler(SlackIntentHandler::new(
                text.clone(),
                relay.clone(),
                channel.clone(),
            ))
            .add_handler(ImageIntentHandler::new(image, relay, channel))
            .add_handler(GenerationHandler::new(text))
            .add_handler(HelpHandler)
            .add_handler(CancelStopHandler)
            .add_handler(SessionEndedHandler)
            .add_handler(ReflectorHandler)
            .build()
    }

    /// Selects and runs the first matching handler.
    ///
    /// # Errors
    ///
    /// Returns `UnhandledRequestError` when no handler matches, or
    /// whatever error the matched handler raised.
    #[instrument(skip(self, envelope), fields(request_type = %envelope.request_type(), intent = %envelope.intent_name()))]
    pub async fn dispatch(&self, envelope: &RequestEnvelope) -> ParlatoResult<SpeechResponse> {
        for handler in &self.handlers {
            if handler.can_handle(envelope) {
                debug!(handler = handler.name(), "Dispatching request");
                return handler.handle(envelope).await;
            }
        }

        let intent = match envelope.intent_name() {
            "" => None,
            name => Some(name.to_string()),
        };
        Err(UnhandledRequestError::new(envelope.request_type(), intent).into())
    }

    /// Handles one platform invocation.
    ///
    /// Any error from dispatch or a handler is logged and converted
    /// into the fixed apology with a re-prompt, keeping the session
    /// open. The user always receives a voice response.
    pub async fn handle_request(&self, envelope: &RequestEnvelope) -> SpeechResponse {
        match self.dispatch(envelope).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    error = %e,
                    request_type = %envelope.request_type(),
                    intent = %envelope.intent_name(),
                    "Handler failed, speaking apology"
                );
                SpeechResponse::builder().speak(APOLOGY).ask(APOLOGY).build()
            }
        }
    }
}

/// Builder collecting handlers in registration order.
#[derive(Default)]
pub struct SkillBuilder {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl SkillBuilder {
    /// Appends a handler to the chain. Order matters.
    pub fn add_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Builds the skill.
    pub fn build(self) -> Skill {
        Skill {
            handlers: self.handlers,
        }
    }
}

/// Relay stand-in used when no webhook URL is configured.
///
/// Chat-relay and image intents then surface the configuration gap
/// through the normal apology path instead of failing at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredRelay;

#[async_trait]
impl ChatRelay for UnconfiguredRelay {
    async fn post(&self, _message: &ChatMessage) -> ParlatoResult<Delivery> {
        Err(RelayError::NotConfigured("SLACK_URL is not set".to_string()).into())
    }
}
