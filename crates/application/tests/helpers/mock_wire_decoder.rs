#![allow(dead_code)]

use dnstap_flat_application::ports::DnsWireDecoder;
use dnstap_flat_domain::{DecodedDnsMessage, DnsQuestion, DomainError, HeaderFlags};
use std::sync::Mutex;

/// Decoder that returns a canned message and remembers every payload it saw.
pub struct MockWireDecoder {
    response: Result<DecodedDnsMessage, DomainError>,
    seen: Mutex<Vec<Vec<u8>>>,
}

impl MockWireDecoder {
    pub fn returning(message: DecodedDnsMessage) -> Self {
        Self {
            response: Ok(message),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(DomainError::InvalidDnsMessage(reason.to_string())),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_payloads(&self) -> Vec<Vec<u8>> {
        self.seen.lock().unwrap().clone()
    }
}

impl DnsWireDecoder for MockWireDecoder {
    fn decode(&self, wire: &[u8]) -> Result<DecodedDnsMessage, DomainError> {
        self.seen.lock().unwrap().push(wire.to_vec());

        if wire.is_empty() {
            return Err(DomainError::InvalidDnsMessage("empty message".to_string()));
        }
        self.response.clone()
    }
}

pub struct DecodedMessageBuilder {
    message: DecodedDnsMessage,
}

impl DecodedMessageBuilder {
    pub fn new() -> Self {
        Self {
            message: DecodedDnsMessage {
                id: 0x1234,
                flags: HeaderFlags {
                    recursion_desired: true,
                    ..HeaderFlags::default()
                },
                response_code: 0,
                questions: Vec::new(),
            },
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.message.id = id;
        self
    }

    pub fn question(mut self, name: &str, record_type: u16) -> Self {
        self.message.questions.push(DnsQuestion {
            name: name.to_string(),
            class: 1,
            record_type,
        });
        self
    }

    pub fn flags(mut self, flags: HeaderFlags) -> Self {
        self.message.flags = flags;
        self
    }

    pub fn response_code(mut self, rcode: u16) -> Self {
        self.message.response_code = rcode;
        self
    }

    pub fn build(self) -> DecodedDnsMessage {
        self.message
    }
}
