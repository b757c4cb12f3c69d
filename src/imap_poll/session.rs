use std::net::TcpStream;

use native_tls::{TlsConnector, TlsStream};

use crate::config::ImapEndpoint;
use crate::imap_poll::error::ImapPollError;

/// Capability seam for searching one mailbox.
///
/// The match predicate is a logical AND: the Subject must contain
/// `subject` and the From header must match `from`. Implementations return
/// the full content of the first matching message.
pub trait MailboxSearch {
    fn search(
        &mut self,
        mailbox: &str,
        subject: &str,
        from: &str,
    ) -> Result<Option<String>, ImapPollError>;
}

/// Authenticated IMAP session over TLS, opened once and reused for the
/// whole polling loop.
pub struct TlsInbox {
    session: imap::Session<TlsStream<TcpStream>>,
}

impl TlsInbox {
    pub fn connect(endpoint: &ImapEndpoint) -> Result<Self, ImapPollError> {
        let tls = TlsConnector::builder().build().map_err(ImapPollError::tls)?;
        let client = imap::connect(
            (endpoint.server.as_str(), endpoint.port),
            &endpoint.server,
            &tls,
        )
        .map_err(|source| ImapPollError::connect(&endpoint.server, endpoint.port, source))?;
        let session = client
            .login(&endpoint.username, &endpoint.password)
            .map_err(|(source, _client)| ImapPollError::login(&endpoint.username, source))?;
        Ok(Self { session })
    }

}

impl Drop for TlsInbox {
    /// Best effort; the server also cleans up on disconnect.
    fn drop(&mut self) {
        self.session.logout().ok();
    }
}

impl MailboxSearch for TlsInbox {
    fn search(
        &mut self,
        mailbox: &str,
        subject: &str,
        from: &str,
    ) -> Result<Option<String>, ImapPollError> {
        self.session
            .select(mailbox)
            .map_err(|source| ImapPollError::command(mailbox, source))?;

        let query = format!("(SUBJECT {} HEADER FROM {})", quote(subject), quote(from));
        let ids = self
            .session
            .search(&query)
            .map_err(|source| ImapPollError::command(mailbox, source))?;

        let Some(id) = ids.iter().min().copied() else {
            return Ok(None);
        };

        let messages = self
            .session
            .fetch(id.to_string(), "RFC822")
            .map_err(|source| ImapPollError::command(mailbox, source))?;
        let body = messages
            .iter()
            .next()
            .and_then(|fetch| fetch.body())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default();
        Ok(Some(body))
    }
}

/// Quote a value for use in an IMAP SEARCH criterion.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod quoting {
    use super::quote;

    #[test]
    fn plain_values_are_wrapped() {
        assert_eq!(quote("Email monitoring abc"), "\"Email monitoring abc\"");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }
}
