//! DNS wire decoding backed by `hickory-proto`.

use dnstap_flat_application::ports::DnsWireDecoder;
use dnstap_flat_domain::{DecodedDnsMessage, DnsQuestion, DomainError, HeaderFlags};
use hickory_proto::op::Message;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryWireDecoder;

impl HickoryWireDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl DnsWireDecoder for HickoryWireDecoder {
    fn decode(&self, wire: &[u8]) -> Result<DecodedDnsMessage, DomainError> {
        if wire.is_empty() {
            return Err(DomainError::InvalidDnsMessage("empty message".to_string()));
        }

        let message = Message::from_vec(wire).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS message: {}", e))
        })?;

        let questions: Vec<DnsQuestion> = message
            .queries()
            .iter()
            .map(|query| DnsQuestion {
                name: query.name().to_ascii(),
                class: u16::from(query.query_class()),
                record_type: u16::from(query.query_type()),
            })
            .collect();

        let decoded = DecodedDnsMessage {
            id: message.id(),
            flags: HeaderFlags {
                authoritative: message.authoritative(),
                truncated: message.truncated(),
                recursion_desired: message.recursion_desired(),
                recursion_available: message.recursion_available(),
                authentic_data: message.authentic_data(),
                checking_disabled: message.checking_disabled(),
            },
            response_code: u16::from(message.response_code()),
            questions,
        };

        debug!(
            id = decoded.id,
            rcode = decoded.response_code,
            questions = decoded.questions.len(),
            size = wire.len(),
            "DNS message decoded"
        );

        Ok(decoded)
    }
}
