#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Status code and response text captured from the transmission step.
///
/// Diagnostic only: a successful submission does not guarantee delivery,
/// so this never decides the overall probe outcome.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub code: String,
    pub message: String,
}

impl SendResult {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
