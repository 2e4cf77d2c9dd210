//! Speech response types and platform serialization.

use serde::{Deserialize, Serialize};

/// A synthesized-speech response composed by a handler.
///
/// Constructed per request through [`ResponseBuilder`], returned to
/// the platform, not retained.
///
/// # Examples
///
/// ```
/// use parlato_core::SpeechResponse;
///
/// let response = SpeechResponse::builder()
///     .speak("ChatGPT here")
///     .ask("ChatGPT here")
///     .build();
///
/// assert_eq!(response.speech(), Some("ChatGPT here"));
/// assert!(!response.should_end_session());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechResponse {
    speech: Option<String>,
    reprompt: Option<String>,
    should_end_session: bool,
}

impl SpeechResponse {
    /// Returns a builder for composing a response.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// An empty response: no speech, no re-prompt, session ends.
    pub fn empty() -> Self {
        Self {
            speech: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Spoken text, if any.
    pub fn speech(&self) -> Option<&str> {
        self.speech.as_deref()
    }

    /// Re-prompt text issued when the session stays open.
    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt.as_deref()
    }

    /// Whether the session ends after this response.
    pub fn should_end_session(&self) -> bool {
        self.should_end_session
    }
}

/// Fluent builder for [`SpeechResponse`].
///
/// Mirrors the platform SDK's response builder: `speak` sets the
/// spoken text, `ask` sets the re-prompt and keeps the session open.
/// Without an `ask` the session ends after one turn.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    speech: Option<String>,
    reprompt: Option<String>,
    end_session: Option<bool>,
}

impl ResponseBuilder {
    /// Sets the spoken text.
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech = Some(text.into());
        self
    }

    /// Sets the re-prompt text and keeps the session open.
    pub fn ask(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    /// Overrides the session-continuation flag.
    pub fn should_end_session(mut self, end: bool) -> Self {
        self.end_session = Some(end);
        self
    }

    /// Builds the response.
    pub fn build(self) -> SpeechResponse {
        // A re-prompt implies the platform expects further input.
        let should_end_session = self.end_session.unwrap_or(self.reprompt.is_none());
        SpeechResponse {
            speech: self.speech,
            reprompt: self.reprompt,
            should_end_session,
        }
    }
}

/// Plain-text speech markup as the platform expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    /// Speech markup type, always "PlainText"
    #[serde(rename = "type")]
    pub speech_type: String,
    /// The text to synthesize
    pub text: String,
}

impl OutputSpeech {
    fn plain(text: &str) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.to_string(),
        }
    }
}

/// Re-prompt wrapper in the platform response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reprompt {
    /// The re-prompt speech
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
}

/// The response body of the platform envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Spoken output, omitted for an empty response
    #[serde(rename = "outputSpeech", skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    /// Re-prompt, present only when the session stays open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    /// Whether the session ends after this turn
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

/// The outbound platform envelope returned to the voice platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Envelope schema version
    pub version: String,
    /// The response payload
    pub response: ResponseBody,
}

impl From<&SpeechResponse> for ResponseEnvelope {
    fn from(response: &SpeechResponse) -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: response.speech().map(OutputSpeech::plain),
                reprompt: response.reprompt().map(|text| Reprompt {
                    output_speech: OutputSpeech::plain(text),
                }),
                should_end_session: response.should_end_session(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_keeps_session_open() {
        let response = SpeechResponse::builder()
            .speak("hello")
            .ask("anything else?")
            .build();
        assert!(!response.should_end_session());
        assert_eq!(response.reprompt(), Some("anything else?"));
    }

    #[test]
    fn speak_without_ask_ends_session() {
        let response = SpeechResponse::builder().speak("Goodbye!").build();
        assert!(response.should_end_session());
        assert_eq!(response.reprompt(), None);
    }

    #[test]
    fn empty_response_serializes_without_speech() {
        let envelope = ResponseEnvelope::from(&SpeechResponse::empty());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["version"], "1.0");
        assert!(json["response"].get("outputSpeech").is_none());
        assert_eq!(json["response"]["shouldEndSession"], true);
    }

    #[test]
    fn platform_envelope_shape() {
        let response = SpeechResponse::builder()
            .speak("ChatGPT here")
            .ask("ChatGPT here")
            .build();
        let envelope = ResponseEnvelope::from(&response);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(json["response"]["outputSpeech"]["text"], "ChatGPT here");
        assert_eq!(
            json["response"]["reprompt"]["outputSpeech"]["text"],
            "ChatGPT here"
        );
        assert_eq!(json["response"]["shouldEndSession"], false);
    }
}
