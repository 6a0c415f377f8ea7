use crate::dnstap::PayloadKind;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to decode {payload} DNS message ({size} bytes): {reason}")]
    DecodeFailure {
        payload: PayloadKind,
        size: usize,
        reason: String,
    },

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid dnstap envelope at line {line}: {reason}")]
    InvalidEnvelope { line: usize, reason: String },

    #[error("Invalid network mask: {0}")]
    InvalidNetworkMask(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DomainError {
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, DomainError::DecodeFailure { .. })
    }
}
