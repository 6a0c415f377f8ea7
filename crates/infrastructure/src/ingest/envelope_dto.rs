use super::codec::{self, EnumValue};
use crate::dns::zone_to_text;
use dnstap_flat_domain::{
    DnstapEnvelope, DnstapMessage, MessageType, SocketFamily, SocketProtocol,
};
use serde::Deserialize;

/// A dnstap frame in protobuf JSON form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDto {
    #[serde(default, deserialize_with = "codec::optional_bytes")]
    pub identity: Option<Vec<u8>>,
    #[serde(default, deserialize_with = "codec::optional_bytes")]
    pub version: Option<Vec<u8>>,
    #[serde(default, deserialize_with = "codec::optional_bytes")]
    pub extra: Option<Vec<u8>>,
    pub message: MessageDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    #[serde(rename = "type")]
    pub message_type: EnumValue,
    #[serde(default)]
    pub socket_family: Option<EnumValue>,
    #[serde(default)]
    pub socket_protocol: Option<EnumValue>,
    #[serde(default, deserialize_with = "codec::bytes")]
    pub query_address: Vec<u8>,
    #[serde(default, deserialize_with = "codec::bytes")]
    pub response_address: Vec<u8>,
    #[serde(default)]
    pub query_port: u32,
    #[serde(default)]
    pub response_port: u32,
    #[serde(default, deserialize_with = "codec::uint64")]
    pub query_time_sec: u64,
    #[serde(default)]
    pub query_time_nsec: u32,
    #[serde(default, deserialize_with = "codec::uint64")]
    pub response_time_sec: u64,
    #[serde(default)]
    pub response_time_nsec: u32,
    #[serde(default, deserialize_with = "codec::bytes")]
    pub query_zone: Vec<u8>,
    #[serde(default, deserialize_with = "codec::bytes")]
    pub query_message: Vec<u8>,
    #[serde(default, deserialize_with = "codec::bytes")]
    pub response_message: Vec<u8>,
}

impl TryFrom<EnvelopeDto> for DnstapEnvelope {
    type Error = String;

    fn try_from(dto: EnvelopeDto) -> Result<Self, Self::Error> {
        Ok(DnstapEnvelope {
            identity: dto.identity,
            version: dto.version,
            extra: dto.extra,
            message: DnstapMessage::try_from(dto.message)?,
        })
    }
}

impl TryFrom<MessageDto> for DnstapMessage {
    type Error = String;

    fn try_from(dto: MessageDto) -> Result<Self, Self::Error> {
        let message_type = match dto.message_type {
            EnumValue::Name(name) => name.parse::<MessageType>()?,
            EnumValue::Code(code) => MessageType::from_code(code)
                .ok_or_else(|| format!("Unknown dnstap message type: {}", code))?,
        };

        let socket_family = match dto.socket_family {
            None => SocketFamily::default(),
            Some(EnumValue::Name(name)) => name.parse()?,
            Some(EnumValue::Code(code)) => SocketFamily::from_code(code)
                .ok_or_else(|| format!("Unknown socket family: {}", code))?,
        };

        let socket_protocol = match dto.socket_protocol {
            None => SocketProtocol::default(),
            Some(EnumValue::Name(name)) => name.parse()?,
            Some(EnumValue::Code(code)) => SocketProtocol::from_code(code)
                .ok_or_else(|| format!("Unknown socket protocol: {}", code))?,
        };

        Ok(DnstapMessage {
            message_type,
            socket_family,
            socket_protocol,
            query_address: dto.query_address,
            response_address: dto.response_address,
            query_port: dto.query_port,
            response_port: dto.response_port,
            query_time_sec: dto.query_time_sec,
            query_time_nsec: dto.query_time_nsec,
            response_time_sec: dto.response_time_sec,
            response_time_nsec: dto.response_time_nsec,
            query_zone: zone_to_text(&dto.query_zone),
            query_message: dto.query_message,
            response_message: dto.response_message,
        })
    }
}

/// Parses one JSON line into an envelope.
pub fn parse_envelope(line: &str) -> Result<DnstapEnvelope, String> {
    let dto: EnvelopeDto = serde_json::from_str(line).map_err(|e| e.to_string())?;
    DnstapEnvelope::try_from(dto)
}
