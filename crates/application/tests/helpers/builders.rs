#![allow(dead_code)]

use dnstap_flat_domain::{DnstapEnvelope, DnstapMessage, MessageType, SocketFamily};

pub const QUERY_SEC: u64 = 1_700_000_000;
pub const RESPONSE_SEC: u64 = 1_700_000_001;

pub struct EnvelopeBuilder {
    envelope: DnstapEnvelope,
}

impl EnvelopeBuilder {
    pub fn new(message_type: MessageType) -> Self {
        let mut message = DnstapMessage::new(message_type);
        message.query_address = vec![192, 0, 2, 55];
        message.response_address = vec![198, 51, 100, 7];
        message.query_port = 53000;
        message.response_port = 53;
        message.query_time_sec = QUERY_SEC;
        message.query_time_nsec = 100;
        message.response_time_sec = RESPONSE_SEC;
        message.response_time_nsec = 200;
        message.query_message = vec![0xAA; 29];

        let mut envelope = DnstapEnvelope::new(message);
        envelope.identity = Some(b"ns1.example.net".to_vec());
        envelope.version = Some(b"BIND 9.18".to_vec());

        Self { envelope }
    }

    pub fn identity(mut self, identity: Option<&[u8]>) -> Self {
        self.envelope.identity = identity.map(<[u8]>::to_vec);
        self
    }

    pub fn extra(mut self, extra: &[u8]) -> Self {
        self.envelope.extra = Some(extra.to_vec());
        self
    }

    pub fn query_message(mut self, bytes: Vec<u8>) -> Self {
        self.envelope.message.query_message = bytes;
        self
    }

    pub fn response_message(mut self, bytes: Vec<u8>) -> Self {
        self.envelope.message.response_message = bytes;
        self
    }

    pub fn query_address(mut self, bytes: Vec<u8>) -> Self {
        self.envelope.message.query_address = bytes;
        self
    }

    pub fn response_address(mut self, bytes: Vec<u8>) -> Self {
        self.envelope.message.response_address = bytes;
        self
    }

    pub fn family(mut self, family: SocketFamily) -> Self {
        self.envelope.message.socket_family = family;
        self
    }

    pub fn zone(mut self, zone: &str) -> Self {
        self.envelope.message.query_zone = zone.to_string();
        self
    }

    pub fn build(self) -> DnstapEnvelope {
        self.envelope
    }
}
