//! Field codecs for dnstap's protobuf JSON mapping.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

// Protobuf JSON writers disagree on padding, accept both.
const BYTES: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_bytes(deserializer).map(Option::unwrap_or_default)
}

pub fn optional_bytes<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| {
            BYTES
                .decode(text.as_bytes())
                .map_err(|e| D::Error::custom(format!("invalid base64: {}", e)))
        })
        .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Uint64Repr {
    Number(u64),
    Text(String),
}

/// 64-bit integers arrive as decimal strings in protobuf JSON, but numbers
/// are accepted too.
pub fn uint64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Uint64Repr>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Uint64Repr::Number(value)) => Ok(value),
        Some(Uint64Repr::Text(text)) => text
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid uint64 '{}': {}", text, e))),
    }
}

/// Protobuf JSON enums are written by name, but the numeric value is legal.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Name(String),
    Code(u32),
}
