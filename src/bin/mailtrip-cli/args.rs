use clap::Parser;
use mailtrip_lib::{ImapEndpoint, ProbeConfig, SmtpEndpoint};

/// Monitor an email round trip: send a tagged message over SMTP and wait
/// for it to show up over IMAP (Nagios plugin conventions).
#[derive(Debug, Parser)]
#[command(name = "mailtrip-cli")]
pub struct Cli {
    /// SMTP server address
    #[arg(long)]
    pub smtp_server: String,

    /// SMTP server port
    #[arg(long, default_value_t = 587)]
    pub smtp_port: u16,

    /// SMTP username
    #[arg(long)]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[arg(long)]
    pub smtp_password: Option<String>,

    /// FROM address to use for sending
    #[arg(long)]
    pub smtp_from: String,

    /// TO address to use for sending
    #[arg(long)]
    pub smtp_to: String,

    /// Optional prefix for the message's Subject header
    #[arg(long, default_value = "Email monitoring ")]
    pub subject_prefix: String,

    /// SMTP debug level (non-zero enables transport-level logs)
    #[arg(long, default_value_t = 0)]
    pub smtp_debuglevel: u8,

    /// IMAP server address
    #[arg(long)]
    pub imap_server: String,

    /// IMAP server port
    #[arg(long, default_value_t = 993)]
    pub imap_port: u16,

    /// IMAP username
    #[arg(long)]
    pub imap_username: String,

    /// IMAP password
    #[arg(long)]
    pub imap_password: String,

    /// IMAP INBOX folder
    #[arg(long, default_value = "INBOX")]
    pub imap_inbox_folder: String,

    /// IMAP Spam folder
    #[arg(long, default_value = "Spam")]
    pub imap_spam_folder: String,

    /// IMAP polling interval (seconds)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub imap_poll_interval: u64,

    /// Maximum time (seconds) to wait for message
    #[arg(long, default_value_t = 600)]
    pub max_wait: u64,

    /// increase output verbosity
    #[arg(short = 'v', long = "verbosity", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    #[cfg(test)]
    fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    pub fn into_config(self) -> ProbeConfig {
        ProbeConfig {
            smtp: SmtpEndpoint {
                server: self.smtp_server,
                port: self.smtp_port,
                username: self.smtp_username,
                password: self.smtp_password,
                from: self.smtp_from,
                to: self.smtp_to,
                subject_prefix: self.subject_prefix,
            },
            imap: ImapEndpoint {
                server: self.imap_server,
                port: self.imap_port,
                username: self.imap_username,
                password: self.imap_password,
                inbox_folder: self.imap_inbox_folder,
                spam_folder: self.imap_spam_folder,
            },
            poll_interval_secs: self.imap_poll_interval,
            max_wait_secs: self.max_wait,
            verbosity: self.verbosity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;

    fn required() -> Vec<&'static str> {
        vec![
            "mailtrip-cli",
            "--smtp-server",
            "smtp.example.com",
            "--smtp-from",
            "probe@example.com",
            "--smtp-to",
            "inbox@example.net",
            "--imap-server",
            "imap.example.net",
            "--imap-username",
            "inbox@example.net",
            "--imap-password",
            "hunter2",
        ]
    }

    #[test]
    fn zero_poll_interval_is_rejected_at_parse_time() {
        let mut args = required();
        args.extend(["--imap-poll-interval", "0"]);
        let err = Cli::try_parse_from(args).expect_err("0 must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn defaults_match_the_monitoring_contract() {
        let cli = Cli::try_parse_from(required()).expect("required flags suffice");
        let config = cli.into_config();
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.imap.port, 993);
        assert_eq!(config.smtp.subject_prefix, "Email monitoring ");
        assert_eq!(config.imap.inbox_folder, "INBOX");
        assert_eq!(config.imap.spam_folder, "Spam");
        assert_eq!(config.poll_interval_secs, 5);
        assert_eq!(config.max_wait_secs, 600);
    }

    #[test]
    fn one_second_interval_is_accepted() {
        let mut args = required();
        args.extend(["--imap-poll-interval", "1"]);
        let cli = Cli::try_parse_from(args).expect("1 is a valid interval");
        assert_eq!(cli.into_config().poll_interval_secs, 1);
    }
}
