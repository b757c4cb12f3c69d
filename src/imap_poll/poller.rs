use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::imap_poll::error::ImapPollError;
use crate::imap_poll::session::MailboxSearch;
use crate::imap_poll::types::PollOutcome;
use crate::message::ProbeMessage;

/// Injection point for the inter-sweep wait, so the loop can be tested
/// without real sleeps.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the calling thread; the probe is strictly sequential.
#[derive(Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Sweep `mailboxes` in order until the probe message shows up or the
/// budget elapses.
///
/// The sweep count is `floor(max_wait / poll_interval)`; a partial final
/// interval is not attempted. Within a sweep the mailboxes are visited in
/// the given order, so the inbox wins over spam when both hold a match.
/// The first match returns immediately without scanning further. Each
/// unsuccessful sweep is followed by one `poll_interval` sleep.
pub fn poll_for<S, W>(
    searcher: &mut S,
    sleeper: &mut W,
    message: &ProbeMessage,
    mailboxes: &[String],
    poll_interval: Duration,
    max_wait: Duration,
) -> Result<PollOutcome, ImapPollError>
where
    S: MailboxSearch + ?Sized,
    W: Sleeper + ?Sized,
{
    for sweep in 0..sweep_count(max_wait, poll_interval) {
        for mailbox in mailboxes {
            debug!(sweep, %mailbox, "checking for message");
            if let Some(body) = searcher.search(mailbox, &message.subject, &message.from)? {
                debug!(sweep, %mailbox, "found message");
                return Ok(PollOutcome::Found {
                    mailbox: mailbox.clone(),
                    body,
                });
            }
        }
        sleeper.sleep(poll_interval);
    }
    Ok(PollOutcome::NotFound)
}

pub(crate) fn sweep_count(max_wait: Duration, poll_interval: Duration) -> u64 {
    let interval = poll_interval.as_secs();
    if interval == 0 {
        return 0;
    }
    max_wait.as_secs() / interval
}
