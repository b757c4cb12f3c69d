//! Inbox polling.
//!
//! [`poll_for`] sweeps the configured mailboxes (inbox first, then spam)
//! over a fixed budget, searching for the probe message through the
//! [`MailboxSearch`] seam. The real implementation [`TlsInbox`] keeps one
//! authenticated IMAP session alive for the whole loop. A transport fault
//! here is an [`ImapPollError`] (UNKNOWN), never a "not found" outcome.

mod error;
mod poller;
mod session;
mod types;

pub use error::ImapPollError;
pub use poller::{Sleeper, ThreadSleeper, poll_for};
pub use session::{MailboxSearch, TlsInbox};
pub use types::PollOutcome;
