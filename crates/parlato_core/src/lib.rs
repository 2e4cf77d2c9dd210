//! Core data types for the parlato voice skill backend.
//!
//! This crate provides the platform data model shared across the
//! parlato workspace: the inbound request envelope, the speech
//! response and its platform serialization, environment-sourced
//! configuration, and the interface traits the outbound clients
//! implement.

mod chat;
mod config;
mod envelope;
mod interface;
mod response;
mod telemetry;

pub use chat::{ChatMessage, ChatMessageBuilder, Delivery};
pub use config::{
    DEFAULT_CHANNEL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, SkillConfig,
    SkillConfigBuilder,
};
pub use envelope::{Intent, Request, RequestEnvelope, Slot};
pub use interface::{ChatRelay, ImageGenerator, TextGenerator};
pub use response::{
    OutputSpeech, Reprompt, ResponseBody, ResponseBuilder, ResponseEnvelope, SpeechResponse,
};
pub use telemetry::init_telemetry;
