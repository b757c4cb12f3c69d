//! Probe message composition.

use uuid::Uuid;

use crate::config::ProbeConfig;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Uniquely-tagged message correlating one probe run.
///
/// The token embedded in the subject is the correlation key used during the
/// IMAP search; a fresh UUID per run keeps concurrent and historical runs
/// from being confused with each other.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeMessage {
    pub token: String,
    pub subject: String,
    pub from: String,
    pub to: String,
    pub body: String,
    pub message_id: String,
}

/// Build the probe message for this run. Pure construction, no I/O.
pub fn compose(config: &ProbeConfig) -> ProbeMessage {
    let token = Uuid::new_v4().to_string();
    let subject = format!("{}{token}", config.smtp.subject_prefix);
    let from = config.smtp.from.clone();
    let to = config.smtp.to.clone();
    let body = format!(
        "This message is to test the delivery of email to {to}, from {from}. \
         It can be safely ignored."
    );
    let message_id = format!("<{token}@{}>", sender_domain(&from));

    ProbeMessage {
        token,
        subject,
        from,
        to,
        body,
        message_id,
    }
}

fn sender_domain(from: &str) -> &str {
    from.split_once('@').map_or("localhost", |(_, domain)| domain)
}
