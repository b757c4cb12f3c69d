use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImapPollError {
    #[error("TLS setup failed: {source}")]
    Tls {
        #[source]
        source: native_tls::Error,
    },
    #[error("IMAP connection to {host}:{port} failed: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: imap::error::Error,
    },
    #[error("IMAP login failed for {username}: {source}")]
    Login {
        username: String,
        #[source]
        source: imap::error::Error,
    },
    #[error("IMAP command failed in '{mailbox}': {source}")]
    Command {
        mailbox: String,
        #[source]
        source: imap::error::Error,
    },
}

impl ImapPollError {
    pub(crate) fn tls(source: native_tls::Error) -> Self {
        Self::Tls { source }
    }

    pub(crate) fn connect(host: &str, port: u16, source: imap::error::Error) -> Self {
        Self::Connect {
            host: host.to_string(),
            port,
            source,
        }
    }

    pub(crate) fn login(username: &str, source: imap::error::Error) -> Self {
        Self::Login {
            username: username.to_string(),
            source,
        }
    }

    pub(crate) fn command(mailbox: &str, source: imap::error::Error) -> Self {
        Self::Command {
            mailbox: mailbox.to_string(),
            source,
        }
    }
}
