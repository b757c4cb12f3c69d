//! One-shot probe orchestration.

use std::time::Instant;

use tracing::debug;

use crate::config::ProbeConfig;
use crate::imap_poll::{ImapPollError, MailboxSearch, Sleeper, poll_for};
use crate::message::ProbeMessage;
use crate::report::{self, ProbeReport};
use crate::smtp_send::OutboundTransport;

/// Run the whole probe: submit the message, poll the mailboxes, classify.
///
/// The inbox side is created lazily through `connect`, so a send failure
/// terminates the run without ever touching the IMAP server. The returned
/// report carries exactly one of the four monitoring statuses.
pub fn run_probe<T, S, F, W>(
    config: &ProbeConfig,
    message: &ProbeMessage,
    transport: &T,
    connect: F,
    sleeper: &mut W,
) -> ProbeReport
where
    T: OutboundTransport + ?Sized,
    S: MailboxSearch,
    F: FnOnce() -> Result<S, ImapPollError>,
    W: Sleeper + ?Sized,
{
    let send = match transport.send(message) {
        Ok(send) => send,
        Err(err) => return report::send_failure(&err),
    };
    let sent_at = Instant::now();
    debug!(code = %send.code, token = %message.token, "message submitted");

    let mut searcher = match connect() {
        Ok(searcher) => searcher,
        Err(err) => return report::poll_failure(&err),
    };

    let outcome = match poll_for(
        &mut searcher,
        sleeper,
        message,
        &config.imap.folders(),
        config.poll_interval(),
        config.max_wait(),
    ) {
        Ok(outcome) => outcome,
        Err(err) => return report::poll_failure(&err),
    };

    let round_trip_secs = sent_at.elapsed().as_secs_f64().round() as u64;
    report::classify(config, &send, &outcome, round_trip_secs)
}
