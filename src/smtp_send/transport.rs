use std::time::Duration;

use lettre::address::Envelope;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpEndpoint;
use crate::message::ProbeMessage;
use crate::smtp_send::error::SmtpSendError;
use crate::smtp_send::types::SendResult;

/// Capability seam for submitting the probe message, so tests can stand in
/// an in-memory double for the relay.
pub trait OutboundTransport {
    fn send(&self, message: &ProbeMessage) -> Result<SendResult, SmtpSendError>;
}

/// Submission relay over `lettre`.
///
/// The connection starts in plaintext and must upgrade via STARTTLS before
/// any credential exchange; authentication happens only when both a
/// username and a password are configured.
pub struct SmtpRelay {
    endpoint: SmtpEndpoint,
    timeout: Option<Duration>,
}

impl SmtpRelay {
    pub fn new(endpoint: SmtpEndpoint) -> Self {
        Self {
            endpoint,
            timeout: Some(Duration::from_secs(30)),
        }
    }

    /// A zero timeout disables the connection/read deadline.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl OutboundTransport for SmtpRelay {
    fn send(&self, message: &ProbeMessage) -> Result<SendResult, SmtpSendError> {
        let from: Mailbox = message
            .from
            .parse()
            .map_err(|source| SmtpSendError::address(&message.from, source))?;
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|source| SmtpSendError::address(&message.to, source))?;

        let mime = Message::builder()
            .message_id(Some(message.message_id.clone()))
            .from(from.clone())
            .to(to.clone())
            .subject(message.subject.clone())
            .body(message.body.clone())
            .map_err(SmtpSendError::build)?;

        // Explicit envelope + send_raw: only the transmission step exposes
        // the status code and response text needed for diagnostics.
        let envelope = Envelope::new(Some(from.email.clone()), vec![to.email.clone()])
            .map_err(SmtpSendError::envelope)?;

        let mut builder = SmtpTransport::starttls_relay(&self.endpoint.server)
            .map_err(SmtpSendError::transport)?
            .port(self.endpoint.port)
            .timeout(self.timeout);
        if let Some((user, pass)) = self.endpoint.credentials() {
            builder = builder.credentials(Credentials::new(user.to_string(), pass.to_string()));
        }
        let relay = builder.build();

        let response = relay
            .send_raw(&envelope, &mime.formatted())
            .map_err(SmtpSendError::transport)?;

        Ok(SendResult::new(
            response.code().to_string(),
            response.message().collect::<Vec<_>>().join(" "),
        ))
    }
}
