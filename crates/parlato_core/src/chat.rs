//! Chat message types for the webhook relay.

use derive_builder::Builder;
use derive_getters::Getters;

/// A message destined for the team chat webhook.
///
/// Constructed per request, sent once, discarded.
///
/// # Examples
///
/// ```
/// use parlato_core::ChatMessage;
///
/// let message = ChatMessage::builder()
///     .header("what is entropy")
///     .body("A measure of disorder.".to_string())
///     .channel("#chatgpt")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.header(), "what is entropy");
/// assert!(message.image_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Builder)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Header text, rendered capitalized
    header: String,
    /// Optional body text
    #[builder(default)]
    body: Option<String>,
    /// Optional image URL
    #[builder(default)]
    image_url: Option<String>,
    /// Destination channel
    channel: String,
}

impl ChatMessage {
    /// Returns a builder for constructing a message.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }
}

/// Outcome of one webhook delivery attempt.
///
/// A non-success HTTP status is a reported failure, not an error;
/// handlers speak the corresponding word to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Webhook accepted the message (HTTP 200)
    Success,
    /// Webhook rejected the message with this status
    Failed(u16),
}

impl Delivery {
    /// The word spoken to the user for this outcome.
    pub fn word(&self) -> &'static str {
        match self {
            Delivery::Success => "success",
            Delivery::Failed(_) => "failed",
        }
    }
}
