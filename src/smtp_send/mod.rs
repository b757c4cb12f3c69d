//! Outbound message submission.
//!
//! The capability seam is [`OutboundTransport`]; the real implementation
//! [`SmtpRelay`] submits over SMTP with a mandatory STARTTLS upgrade before
//! any credential exchange. Any failure here is fatal to the whole probe.

mod error;
mod transport;
mod types;

pub use error::SmtpSendError;
pub use transport::{OutboundTransport, SmtpRelay};
pub use types::SendResult;
