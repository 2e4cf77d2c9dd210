//! Voice-assistant skill backend.
//!
//! Receives platform request envelopes, dispatches them through an
//! ordered handler chain, and composes synthesized-speech responses.
//! Utterances are forwarded to a text or image generation API and
//! optionally relayed to a team chat webhook.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use parlato::Skill;
//! use parlato_core::{RequestEnvelope, SkillConfig};
//! use parlato_models::{CompletionClient, ImageClient};
//! use parlato_social::SlackRelay;
//!
//! # async fn run() -> parlato_error::ParlatoResult<()> {
//! let config = SkillConfig::from_env()?;
//! let skill = Skill::with_default_handlers(
//!     &config,
//!     Arc::new(CompletionClient::new(&config)),
//!     Arc::new(ImageClient::new(&config)),
//!     Arc::new(SlackRelay::new(&config)?),
//! );
//!
//! let envelope = RequestEnvelope::launch();
//! let response = skill.handle_request(&envelope).await;
//! assert_eq!(response.speech(), Some("ChatGPT here"));
//! # Ok(())
//! # }
//! ```

pub mod handlers;
mod skill;

pub use skill::{APOLOGY, RE_PROMPT, RequestHandler, Skill, SkillBuilder, UnconfiguredRelay};
