//! Webhook delivery client.

use crate::slack::WebhookPayload;
use async_trait::async_trait;
use parlato_core::{ChatMessage, ChatRelay, Delivery, SkillConfig};
use parlato_error::{ParlatoResult, RelayError};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client posting chat messages to a Slack incoming webhook.
///
/// Every message goes through the same TLS send path whether it
/// carries an image, a body, or both. Certificate verification comes
/// from the rustls trust store; there is no insecure fallback.
#[derive(Debug, Clone)]
pub struct SlackRelay {
    client: Client,
    url: String,
}

impl SlackRelay {
    /// Creates a relay from the skill configuration.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::NotConfigured` when no webhook URL is set.
    #[instrument(skip(config))]
    pub fn new(config: &SkillConfig) -> Result<Self, RelayError> {
        let url = config
            .slack_url()
            .clone()
            .ok_or_else(|| RelayError::NotConfigured("SLACK_URL is not set".to_string()))?;

        debug!("Created Slack relay");
        Ok(Self {
            client: Client::new(),
            url,
        })
    }

    /// Posts the message to the webhook.
    ///
    /// Returns `Delivery::Failed` for any non-200 status; the caller
    /// reports the outcome word to the user.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Http` when the request itself fails.
    #[instrument(skip(self, message), fields(channel = %message.channel()))]
    pub async fn send(&self, message: &ChatMessage) -> Result<Delivery, RelayError> {
        let payload = WebhookPayload::from(message);

        debug!(blocks = payload.blocks.len(), "Posting webhook message");

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Webhook request failed");
                RelayError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            error!(status, body = %body, "Webhook rejected message");
            return Ok(Delivery::Failed(status));
        }

        debug!("Webhook accepted message");
        Ok(Delivery::Success)
    }
}

#[async_trait]
impl ChatRelay for SlackRelay {
    async fn post(&self, message: &ChatMessage) -> ParlatoResult<Delivery> {
        Ok(self.send(message).await?)
    }
}
