//! Request handlers for the skill's intents.

mod fixed;
mod generation;
mod image;
mod relay;

pub use fixed::{
    CancelStopHandler, HelpHandler, LaunchHandler, ReflectorHandler, SessionEndedHandler,
};
pub use generation::{GenerationHandler, INTENT_PREFIX};
pub use image::{IMAGE_INTENT, ImageIntentHandler};
pub use relay::{SLACK_INTENT, SlackIntentHandler};

use parlato_core::RequestEnvelope;
use parlato_error::{MissingSlotError, ParlatoResult};

/// Slot carrying the user's free-text utterance.
pub const QUESTION_SLOT: &str = "question";

/// Reads a required slot value, erroring when absent or empty.
fn require_slot<'a>(envelope: &'a RequestEnvelope, slot: &str) -> ParlatoResult<&'a str> {
    match envelope.slot(slot) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(MissingSlotError::new(envelope.intent_name(), slot).into()),
    }
}
