//! Wire-level error payloads

use serde::{Deserialize, Serialize};

/// Error body returned by the ordering API
///
/// Rejected mutations carry a human-readable `message`; views surface it
/// verbatim when present and fall back to a generic text otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
