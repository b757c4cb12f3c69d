#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Terminal result of one polling run.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The probe message appeared; `mailbox` is the folder it was found in
    /// and `body` the full retrieved content.
    Found { mailbox: String, body: String },
    /// The whole poll budget elapsed without a match.
    NotFound,
}

impl PollOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
