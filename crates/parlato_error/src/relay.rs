//! Errors from the chat webhook relay.

/// Errors delivering a message to the chat webhook.
///
/// A non-success HTTP status from the webhook is not an error — the
/// relay reports it as a failed delivery so handlers can speak a
/// "failed" word to the user. These variants cover the cases where no
/// delivery attempt completed at all.
#[derive(Debug, Clone, derive_more::Display)]
pub enum RelayError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// No webhook URL configured
    #[display("Webhook not configured: {}", _0)]
    NotConfigured(String),

    /// Failed to serialize the message payload
    #[display("Payload serialization failed: {}", _0)]
    Payload(String),
}

impl std::error::Error for RelayError {}
