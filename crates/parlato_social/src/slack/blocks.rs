//! Slack Block Kit payload construction.

use parlato_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// A text object inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    /// Text markup type: "plain_text" or "mrkdwn"
    #[serde(rename = "type")]
    pub text_type: String,
    /// The text content
    pub text: String,
}

impl TextObject {
    /// Plain-text object, used by header blocks.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text".to_string(),
            text: text.into(),
        }
    }

    /// Markdown object, used by section blocks.
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            text_type: "mrkdwn".to_string(),
            text: text.into(),
        }
    }
}

/// A Block Kit display block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Header text, rendered prominently
    Header {
        /// Plain-text header content
        text: TextObject,
    },
    /// Horizontal divider
    Divider,
    /// Body text section
    Section {
        /// Markdown body content
        text: TextObject,
    },
    /// Hosted image
    Image {
        /// Image URL
        image_url: String,
        /// Accessibility text
        alt_text: String,
    },
}

/// The JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Destination channel
    pub channel: String,
    /// Display blocks in render order
    pub blocks: Vec<Block>,
}

impl From<&ChatMessage> for WebhookPayload {
    /// Renders a chat message: capitalized header, divider, then the
    /// optional body section and optional image block.
    fn from(message: &ChatMessage) -> Self {
        let header = capitalize(message.header());
        let mut blocks = vec![
            Block::Header {
                text: TextObject::plain(header.clone()),
            },
            Block::Divider,
        ];

        if let Some(body) = message.body() {
            blocks.push(Block::Section {
                text: TextObject::mrkdwn(body.clone()),
            });
        }

        if let Some(url) = message.image_url() {
            blocks.push(Block::Image {
                image_url: url.clone(),
                alt_text: header,
            });
        }

        Self {
            channel: message.channel().clone(),
            blocks,
        }
    }
}

/// Capitalizes the first character and lowercases the remainder.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
