//! Slot error types.

/// A handler's required slot was absent or empty.
#[derive(Debug, Clone)]
pub struct MissingSlotError {
    /// Intent that was missing the slot
    pub intent: String,
    /// Name of the missing slot
    pub slot: String,
}

impl MissingSlotError {
    /// Create a new MissingSlotError for the given intent and slot.
    pub fn new(intent: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            slot: slot.into(),
        }
    }
}

impl std::fmt::Display for MissingSlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Missing Slot: intent {} has no value for slot {}",
            self.intent, self.slot
        )
    }
}

impl std::error::Error for MissingSlotError {}
