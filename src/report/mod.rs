//! Outcome classification and Nagios plugin output.
//!
//! The decision table: found in the inbox folder is OK, found in the spam
//! folder is WARNING, budget exhausted is CRITICAL, a send failure is
//! CRITICAL, and any transport fault while polling is UNKNOWN.

mod classify;
mod types;

pub use classify::{classify, poll_failure, send_failure};
pub use types::{ProbeReport, Status};

#[cfg(test)]
mod tests;
