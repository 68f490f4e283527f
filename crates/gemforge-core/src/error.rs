//! Error types for GemForge

use thiserror::Error;

use crate::domain::{GemId, SlotKey};

/// Main error type for GemForge boundary checks.
///
/// The allocation search itself never fails; these errors are produced while
/// parsing names and validating requests before a solve.
#[derive(Debug, Error)]
pub enum GemforgeError {
    /// Slot configuration outside the grade's rules
    #[error("Invalid slot {slot}: {reason}")]
    InvalidSlot { slot: SlotKey, reason: String },

    /// Gem record with out-of-range values
    #[error("Invalid gem {id}: {reason}")]
    InvalidGem { id: GemId, reason: String },

    /// Two gems share the same id
    #[error("Duplicate gem id {0}")]
    DuplicateGem(GemId),

    /// No active slot or no gem to allocate
    #[error("Nothing to allocate: {0}")]
    EmptyRequest(String),

    /// Unrecognized textual name for an enumerated value
    #[error("Unknown {what} '{value}'")]
    UnknownName { what: &'static str, value: String },
}

impl GemforgeError {
    pub(crate) fn unknown(what: &'static str, value: &str) -> Self {
        GemforgeError::UnknownName {
            what,
            value: value.to_string(),
        }
    }
}

/// Result type alias for GemForge operations
pub type Result<T> = std::result::Result<T, GemforgeError>;
