//! Slack webhook integration.

mod blocks;
mod relay;

pub use blocks::{Block, TextObject, WebhookPayload, capitalize};
pub use relay::SlackRelay;
