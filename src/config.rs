//! Immutable probe configuration.
//!
//! One [`ProbeConfig`] is built at startup (by the CLI) and passed
//! explicitly to every component; nothing reads configuration from globals.

use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Outbound SMTP submission endpoint.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpEndpoint {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub to: String,
    pub subject_prefix: String,
}

impl SmtpEndpoint {
    /// Credentials are used only when both halves are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}

/// IMAP endpoint polled for the probe message.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImapEndpoint {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub inbox_folder: String,
    pub spam_folder: String,
}

impl ImapEndpoint {
    /// Folders in sweep order: inbox first, then spam, so a message filed
    /// in both is reported from the inbox.
    pub fn folders(&self) -> [String; 2] {
        [self.inbox_folder.clone(), self.spam_folder.clone()]
    }
}

/// Complete input for one probe run. Read-only after construction.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub smtp: SmtpEndpoint,
    pub imap: ImapEndpoint,
    pub poll_interval_secs: u64,
    pub max_wait_secs: u64,
    pub verbosity: u8,
}

impl ProbeConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }
}
