use super::message_type::MessageType;
use super::payload::{PayloadKind, SelectedPayload};
use super::socket::{SocketFamily, SocketProtocol};

/// A single dnstap frame as handed over by the capture layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnstapEnvelope {
    pub identity: Option<Vec<u8>>,
    pub version: Option<Vec<u8>>,
    pub extra: Option<Vec<u8>>,
    pub message: DnstapMessage,
}

/// The DNS transaction embedded in an envelope.
///
/// Absent scalar fields carry their protobuf defaults (zero, empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnstapMessage {
    pub message_type: MessageType,
    pub socket_family: SocketFamily,
    pub socket_protocol: SocketProtocol,
    pub query_address: Vec<u8>,
    pub response_address: Vec<u8>,
    pub query_port: u32,
    pub response_port: u32,
    pub query_time_sec: u64,
    pub query_time_nsec: u32,
    pub response_time_sec: u64,
    pub response_time_nsec: u32,
    /// Presentation form of the zone the query was answered from.
    pub query_zone: String,
    pub query_message: Vec<u8>,
    pub response_message: Vec<u8>,
}

impl DnstapMessage {
    pub fn new(message_type: MessageType) -> Self {
        Self {
            message_type,
            socket_family: SocketFamily::default(),
            socket_protocol: SocketProtocol::default(),
            query_address: Vec::new(),
            response_address: Vec::new(),
            query_port: 0,
            response_port: 0,
            query_time_sec: 0,
            query_time_nsec: 0,
            response_time_sec: 0,
            response_time_nsec: 0,
            query_zone: String::new(),
            query_message: Vec::new(),
            response_message: Vec::new(),
        }
    }

    /// Picks the wire payload that represents this message: the query when
    /// it is non-empty, the response otherwise.
    pub fn select_payload(&self) -> SelectedPayload<'_> {
        if !self.query_message.is_empty() {
            SelectedPayload {
                kind: PayloadKind::Query,
                bytes: &self.query_message,
            }
        } else {
            SelectedPayload {
                kind: PayloadKind::Response,
                bytes: &self.response_message,
            }
        }
    }
}

impl DnstapEnvelope {
    pub fn new(message: DnstapMessage) -> Self {
        Self {
            identity: None,
            version: None,
            extra: None,
            message,
        }
    }

    /// Identity as text, `None` when absent or empty.
    pub fn identity_str(&self) -> Option<String> {
        self.identity
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .filter(|identity| !identity.is_empty())
    }
}
