use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmtpSendError {
    #[error("invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("message assembly failed: {source}")]
    Build {
        #[source]
        source: lettre::error::Error,
    },
    #[error("envelope rejected: {source}")]
    Envelope {
        #[source]
        source: lettre::error::Error,
    },
    #[error("SMTP transport failed: {source}")]
    Transport {
        #[source]
        source: lettre::transport::smtp::Error,
    },
}

impl SmtpSendError {
    pub(crate) fn address(address: &str, source: lettre::address::AddressError) -> Self {
        Self::Address {
            address: address.to_string(),
            source,
        }
    }

    pub(crate) fn build(source: lettre::error::Error) -> Self {
        Self::Build { source }
    }

    pub(crate) fn envelope(source: lettre::error::Error) -> Self {
        Self::Envelope { source }
    }

    pub(crate) fn transport(source: lettre::transport::smtp::Error) -> Self {
        Self::Transport { source }
    }
}
