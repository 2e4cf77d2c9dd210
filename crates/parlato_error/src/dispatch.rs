//! Dispatcher error types.

/// No registered handler matched the incoming request.
///
/// With the reflector registered last this cannot occur for intent
/// requests; seeing it means the handler chain was misconfigured.
#[derive(Debug, Clone)]
pub struct UnhandledRequestError {
    /// Request type of the unmatched request
    pub request_type: String,
    /// Intent name, if the request carried one
    pub intent_name: Option<String>,
}

impl UnhandledRequestError {
    /// Create a new UnhandledRequestError for the given request.
    pub fn new(request_type: impl Into<String>, intent_name: Option<String>) -> Self {
        Self {
            request_type: request_type.into(),
            intent_name,
        }
    }
}

impl std::fmt::Display for UnhandledRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.intent_name {
            Some(name) => write!(
                f,
                "Unhandled Request: no handler for {} intent {}",
                self.request_type, name
            ),
            None => write!(
                f,
                "Unhandled Request: no handler for {}",
                self.request_type
            ),
        }
    }
}

impl std::error::Error for UnhandledRequestError {}
