use crate::config::ProbeConfig;
use crate::imap_poll::{ImapPollError, PollOutcome};
use crate::report::types::{ProbeReport, Status};
use crate::smtp_send::{SendResult, SmtpSendError};

/// Classify a concluded run: send succeeded and polling finished without a
/// transport fault.
pub fn classify(
    config: &ProbeConfig,
    send: &SendResult,
    outcome: &PollOutcome,
    round_trip_secs: u64,
) -> ProbeReport {
    match outcome {
        PollOutcome::Found { mailbox, body } => {
            let status = if mailbox == &config.imap.inbox_folder {
                Status::Ok
            } else {
                Status::Warning
            };
            ProbeReport {
                status,
                summary: format!(
                    "Email arrived in {mailbox}, message round trip took {round_trip_secs} seconds"
                ),
                perf_data: Some(format!("rtt={round_trip_secs}")),
                details: vec![
                    smtp_log(config, send),
                    format!(
                        "IMAP server {}:{} contains message in {mailbox}:\n\n{body}",
                        config.imap.server, config.imap.port
                    ),
                ],
            }
        }
        PollOutcome::NotFound => {
            let mut report = ProbeReport::new(
                Status::Critical,
                format!(
                    "Email message not received within timeout of {} seconds",
                    config.max_wait_secs
                ),
            );
            report.details.push(smtp_log(config, send));
            report
        }
    }
}

/// Send-side failure: an infrastructure fault on the sending side, harder
/// than a delivery failure. Polling is never attempted.
pub fn send_failure(err: &SmtpSendError) -> ProbeReport {
    ProbeReport::new(Status::Critical, format!("Failed to send email: {err}"))
}

/// Transport fault while connecting to or searching the inbox, distinct
/// from "not found after the full wait".
pub fn poll_failure(err: &ImapPollError) -> ProbeReport {
    ProbeReport::new(Status::Unknown, format!("an error occurred: {err}"))
}

fn smtp_log(config: &ProbeConfig, send: &SendResult) -> String {
    format!(
        "SMTP server {}:{} said: {} {}",
        config.smtp.server, config.smtp.port, send.code, send.message
    )
}
