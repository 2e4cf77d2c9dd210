//! Error types for the parlato voice skill backend.
//!
//! This crate provides the foundation error types used throughout the
//! parlato workspace.

mod config;
mod dispatch;
mod generation;
mod relay;
mod slot;

pub use config::ConfigError;
pub use dispatch::UnhandledRequestError;
pub use generation::GenerationError;
pub use relay::RelayError;
pub use slot::MissingSlotError;

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From)]
pub enum ParlatoErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Text or image generation API error
    Generation(GenerationError),
    /// Chat webhook delivery error
    Relay(RelayError),
    /// No registered handler matched the request
    Unhandled(UnhandledRequestError),
    /// A required intent slot was absent
    MissingSlot(MissingSlotError),
}

impl std::fmt::Display for ParlatoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParlatoErrorKind::Config(e) => write!(f, "{}", e),
            ParlatoErrorKind::Generation(e) => write!(f, "{}", e),
            ParlatoErrorKind::Relay(e) => write!(f, "{}", e),
            ParlatoErrorKind::Unhandled(e) => write!(f, "{}", e),
            ParlatoErrorKind::MissingSlot(e) => write!(f, "{}", e),
        }
    }
}

/// Parlato error with kind discrimination.
#[derive(Debug, Clone)]
pub struct ParlatoError(Box<ParlatoErrorKind>);

impl ParlatoError {
    /// Create a new error from a kind.
    pub fn new(kind: ParlatoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ParlatoErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ParlatoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parlato Error: {}", self.0)
    }
}

impl std::error::Error for ParlatoError {}

// Generic From implementation for any type that converts to ParlatoErrorKind
impl<T> From<T> for ParlatoError
where
    T: Into<ParlatoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for parlato operations.
pub type ParlatoResult<T> = std::result::Result<T, ParlatoError>;
