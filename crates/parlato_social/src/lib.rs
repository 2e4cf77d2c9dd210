//! Slack webhook relay for the parlato voice skill backend.
//!
//! Renders chat messages to Slack Block Kit payloads and delivers
//! them to an incoming webhook over TLS. A non-200 webhook status is
//! reported as a failed delivery, not an error; transport failures
//! propagate.

mod slack;

pub use slack::{Block, SlackRelay, TextObject, WebhookPayload, capitalize};
