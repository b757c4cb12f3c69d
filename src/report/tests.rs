use super::classify::{classify, poll_failure, send_failure};
use super::types::{ProbeReport, Status};
use crate::config::{ImapEndpoint, ProbeConfig, SmtpEndpoint};
use crate::imap_poll::{ImapPollError, PollOutcome};
use crate::smtp_send::{SendResult, SmtpSendError};

fn config() -> ProbeConfig {
    ProbeConfig {
        smtp: SmtpEndpoint {
            server: "smtp.example.com".to_string(),
            port: 587,
            username: Some("probe".to_string()),
            password: Some("hunter2".to_string()),
            from: "probe@example.com".to_string(),
            to: "inbox@example.net".to_string(),
            subject_prefix: "Email monitoring ".to_string(),
        },
        imap: ImapEndpoint {
            server: "imap.example.net".to_string(),
            port: 993,
            username: "inbox@example.net".to_string(),
            password: "hunter2".to_string(),
            inbox_folder: "INBOX".to_string(),
            spam_folder: "Spam".to_string(),
        },
        poll_interval_secs: 5,
        max_wait_secs: 600,
        verbosity: 0,
    }
}

fn send_result() -> SendResult {
    SendResult::new("250", "2.0.0 OK: queued")
}

#[test]
fn exit_codes_follow_the_monitoring_convention() {
    assert_eq!(Status::Ok.exit_code(), 0);
    assert_eq!(Status::Warning.exit_code(), 1);
    assert_eq!(Status::Critical.exit_code(), 2);
    assert_eq!(Status::Unknown.exit_code(), 3);
}

#[test]
fn found_in_inbox_is_ok_with_perf_data() {
    let outcome = PollOutcome::Found {
        mailbox: "INBOX".to_string(),
        body: "Subject: Email monitoring abc\r\n\r\nbody".to_string(),
    };
    let report = classify(&config(), &send_result(), &outcome, 12);

    assert_eq!(report.status, Status::Ok);
    assert_eq!(
        report.summary,
        "Email arrived in INBOX, message round trip took 12 seconds"
    );
    assert_eq!(report.perf_data.as_deref(), Some("rtt=12"));
    assert_eq!(
        report.details[0],
        "SMTP server smtp.example.com:587 said: 250 2.0.0 OK: queued"
    );
    assert!(report.details[1].starts_with("IMAP server imap.example.net:993 contains message in INBOX:"));
    assert!(report.details[1].contains("Email monitoring abc"));
}

#[test]
fn found_in_spam_is_warning() {
    let outcome = PollOutcome::Found {
        mailbox: "Spam".to_string(),
        body: String::new(),
    };
    let report = classify(&config(), &send_result(), &outcome, 30);

    assert_eq!(report.status, Status::Warning);
    assert!(report.to_string().starts_with("WARNING - Email arrived in Spam"));
}

#[test]
fn custom_spam_folder_name_still_warns() {
    let mut config = config();
    config.imap.spam_folder = "Junk".to_string();
    let outcome = PollOutcome::Found {
        mailbox: "Junk".to_string(),
        body: String::new(),
    };
    let report = classify(&config, &send_result(), &outcome, 3);
    assert_eq!(report.status, Status::Warning);
}

#[test]
fn not_found_is_critical_with_the_timeout_summary() {
    let report = classify(&config(), &send_result(), &PollOutcome::NotFound, 0);

    assert_eq!(report.status, Status::Critical);
    assert_eq!(
        report.summary,
        "Email message not received within timeout of 600 seconds"
    );
    assert!(report.perf_data.is_none());
    assert_eq!(report.details.len(), 1);
    assert!(report.details[0].starts_with("SMTP server smtp.example.com:587 said:"));
}

#[test]
fn send_failure_is_critical() {
    let source = "not an address".parse::<lettre::Address>().unwrap_err();
    let err = SmtpSendError::Address {
        address: "not an address".to_string(),
        source,
    };
    let report = send_failure(&err);

    assert_eq!(report.status, Status::Critical);
    assert!(report.summary.starts_with("Failed to send email:"));
    assert!(report.to_string().starts_with("CRITICAL - Failed to send email:"));
}

#[test]
fn poll_fault_is_unknown_not_critical() {
    let err = ImapPollError::Command {
        mailbox: "INBOX".to_string(),
        source: imap::error::Error::Bad("simulated".to_string()),
    };
    let report = poll_failure(&err);

    assert_eq!(report.status, Status::Unknown);
    assert!(report.to_string().starts_with("UNKNOWN - an error occurred:"));
}

#[test]
fn display_renders_status_perf_data_and_details() {
    let report = ProbeReport {
        status: Status::Ok,
        summary: "all good".to_string(),
        perf_data: Some("rtt=4".to_string()),
        details: vec!["line one".to_string(), "line two".to_string()],
    };
    assert_eq!(report.to_string(), "OK - all good | rtt=4\nline one\nline two");
}

#[test]
fn display_without_perf_data_is_a_single_line() {
    let report = ProbeReport::new(Status::Critical, "Failed to send email: boom");
    assert_eq!(report.to_string(), "CRITICAL - Failed to send email: boom");
}
