use dnstap_flat_domain::{DecodedDnsMessage, DomainError};

/// Parses a DNS message in wire format.
///
/// Implementations must reject input that is not a complete message,
/// including empty input.
pub trait DnsWireDecoder: Send + Sync {
    fn decode(&self, wire: &[u8]) -> Result<DecodedDnsMessage, DomainError>;
}
