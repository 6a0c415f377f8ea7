use std::fmt;
use std::str::FromStr;

/// Category of a dnstap message: who observed it and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    AuthQuery,
    AuthResponse,
    ResolverQuery,
    ResolverResponse,
    ClientQuery,
    ClientResponse,
    ForwarderQuery,
    ForwarderResponse,
    StubQuery,
    StubResponse,
    ToolQuery,
    ToolResponse,
    UpdateQuery,
    UpdateResponse,
}

/// Which of the two message times represents the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    QueryTime,
    ResponseTime,
}

impl MessageType {
    pub const ALL: [MessageType; 14] = [
        MessageType::AuthQuery,
        MessageType::AuthResponse,
        MessageType::ResolverQuery,
        MessageType::ResolverResponse,
        MessageType::ClientQuery,
        MessageType::ClientResponse,
        MessageType::ForwarderQuery,
        MessageType::ForwarderResponse,
        MessageType::StubQuery,
        MessageType::StubResponse,
        MessageType::ToolQuery,
        MessageType::ToolResponse,
        MessageType::UpdateQuery,
        MessageType::UpdateResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::AuthQuery => "AUTH_QUERY",
            MessageType::AuthResponse => "AUTH_RESPONSE",
            MessageType::ResolverQuery => "RESOLVER_QUERY",
            MessageType::ResolverResponse => "RESOLVER_RESPONSE",
            MessageType::ClientQuery => "CLIENT_QUERY",
            MessageType::ClientResponse => "CLIENT_RESPONSE",
            MessageType::ForwarderQuery => "FORWARDER_QUERY",
            MessageType::ForwarderResponse => "FORWARDER_RESPONSE",
            MessageType::StubQuery => "STUB_QUERY",
            MessageType::StubResponse => "STUB_RESPONSE",
            MessageType::ToolQuery => "TOOL_QUERY",
            MessageType::ToolResponse => "TOOL_RESPONSE",
            MessageType::UpdateQuery => "UPDATE_QUERY",
            MessageType::UpdateResponse => "UPDATE_RESPONSE",
        }
    }

    /// Protobuf enum value from the dnstap schema.
    pub fn to_code(&self) -> u32 {
        match self {
            MessageType::AuthQuery => 1,
            MessageType::AuthResponse => 2,
            MessageType::ResolverQuery => 3,
            MessageType::ResolverResponse => 4,
            MessageType::ClientQuery => 5,
            MessageType::ClientResponse => 6,
            MessageType::ForwarderQuery => 7,
            MessageType::ForwarderResponse => 8,
            MessageType::StubQuery => 9,
            MessageType::StubResponse => 10,
            MessageType::ToolQuery => 11,
            MessageType::ToolResponse => 12,
            MessageType::UpdateQuery => 13,
            MessageType::UpdateResponse => 14,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.to_code() == code)
    }

    /// Which time stands for the event. Update messages have no canonical
    /// time and leave `@timestamp` out of the record.
    pub fn timestamp_source(&self) -> Option<TimestampSource> {
        match self {
            MessageType::AuthQuery
            | MessageType::ResolverQuery
            | MessageType::ClientQuery
            | MessageType::ForwarderQuery
            | MessageType::StubQuery
            | MessageType::ToolQuery => Some(TimestampSource::QueryTime),

            MessageType::AuthResponse
            | MessageType::ResolverResponse
            | MessageType::ClientResponse
            | MessageType::ForwarderResponse
            | MessageType::StubResponse
            | MessageType::ToolResponse => Some(TimestampSource::ResponseTime),

            MessageType::UpdateQuery | MessageType::UpdateResponse => None,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("Unknown dnstap message type: {}", s))
    }
}
