#![forbid(unsafe_code)]
//! mailtrip_lib — email round-trip monitoring probe (MVP)

pub mod config;
pub mod imap_poll;
pub mod message;
pub mod probe;
pub mod report;
pub mod smtp_send;

pub use config::{ImapEndpoint, ProbeConfig, SmtpEndpoint};
pub use imap_poll::{
    ImapPollError, MailboxSearch, PollOutcome, Sleeper, ThreadSleeper, TlsInbox, poll_for,
};
pub use message::{ProbeMessage, compose};
pub use probe::run_probe;
pub use report::{ProbeReport, Status, classify, poll_failure, send_failure};
pub use smtp_send::{OutboundTransport, SendResult, SmtpRelay, SmtpSendError};
