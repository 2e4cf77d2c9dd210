//! Inbound request envelope types.
//!
//! The voice platform delivers one JSON envelope per invocation. The
//! envelope is immutable for the duration of the request; handlers
//! only read from it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named capture group within an intent's utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Slot {
    /// Slot name as echoed by the platform
    #[serde(default)]
    pub name: Option<String>,
    /// Captured value, absent when the user gave none
    #[serde(default)]
    pub value: Option<String>,
}

/// A classified user request with named slot values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent name, e.g. "ChatGPTDefineIntent"
    pub name: String,
    /// Slot name to slot value mapping
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// The request portion of the platform envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Request type: "LaunchRequest", "IntentRequest", or "SessionEndedRequest"
    #[serde(rename = "type")]
    pub request_type: String,
    /// Present only for intent requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

/// One inbound platform invocation.
///
/// # Examples
///
/// ```
/// use parlato_core::RequestEnvelope;
///
/// let envelope = RequestEnvelope::intent(
///     "ChatGPTIntent",
///     [("question", "what is entropy")],
/// );
///
/// assert_eq!(envelope.request_type(), "IntentRequest");
/// assert_eq!(envelope.intent_name(), "ChatGPTIntent");
/// assert_eq!(envelope.slot("question"), Some("what is entropy"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Envelope schema version
    #[serde(default)]
    pub version: Option<String>,
    /// The request payload
    pub request: Request,
}

impl RequestEnvelope {
    /// Builds a launch request envelope.
    pub fn launch() -> Self {
        Self {
            version: Some("1.0".to_string()),
            request: Request {
                request_type: "LaunchRequest".to_string(),
                intent: None,
            },
        }
    }

    /// Builds an intent request envelope with the given slot values.
    pub fn intent<'a>(
        name: impl Into<String>,
        slots: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let slots = slots
            .into_iter()
            .map(|(slot_name, value)| {
                (
                    slot_name.to_string(),
                    Slot {
                        name: Some(slot_name.to_string()),
                        value: Some(value.to_string()),
                    },
                )
            })
            .collect();

        Self {
            version: Some("1.0".to_string()),
            request: Request {
                request_type: "IntentRequest".to_string(),
                intent: Some(Intent {
                    name: name.into(),
                    slots,
                }),
            },
        }
    }

    /// Builds a session-ended request envelope.
    pub fn session_ended() -> Self {
        Self {
            version: Some("1.0".to_string()),
            request: Request {
                request_type: "SessionEndedRequest".to_string(),
                intent: None,
            },
        }
    }

    /// Returns the request type, e.g. "IntentRequest".
    pub fn request_type(&self) -> &str {
        &self.request.request_type
    }

    /// Returns the intent name, or the empty string for non-intent requests.
    pub fn intent_name(&self) -> &str {
        self.request
            .intent
            .as_ref()
            .map(|intent| intent.name.as_str())
            .unwrap_or("")
    }

    /// Returns the value of the named slot, if the intent carries one.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.request
            .intent
            .as_ref()
            .and_then(|intent| intent.slots.get(name))
            .and_then(|slot| slot.value.as_deref())
    }

    /// Tests the request type for equality.
    pub fn is_request_type(&self, request_type: &str) -> bool {
        self.request.request_type == request_type
    }

    /// Tests the intent name for equality.
    pub fn is_intent_name(&self, name: &str) -> bool {
        self.intent_name() == name
    }
}
