use crate::domain_labels::DomainLabels;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::borrow::Cow;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// One dnstap envelope flattened for indexing.
///
/// Field names and their presence are what downstream indexers key on.
/// Question-derived fields are present together or not at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatRecord {
    /// Absent for message types with no canonical time (UPDATE_*).
    #[serde(rename = "@timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub query_time: String,
    pub response_time: String,
    /// Masked address. Omitted when the envelope has no address or its
    /// length is neither 4 (IPv4) nor 16 (IPv6) bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_address: Option<String>,
    pub query_port: u32,
    /// Same omission rule as `query_address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_address: Option<String>,
    pub response_port: u32,
    pub response_zone: String,
    pub identity: String,
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub socket_family: &'static str,
    pub socket_protocol: &'static str,
    pub version: String,
    pub extra: String,
    #[serde(flatten)]
    pub question: Option<QuestionFields>,
    pub rcode: Cow<'static, str>,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub ad: bool,
    pub cd: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionFields {
    pub qname: String,
    pub qclass: Cow<'static, str>,
    pub qtype: Cow<'static, str>,
    #[serde(flatten)]
    pub labels: DomainLabels,
    pub message_size: usize,
    pub txid: u16,
}

/// Formats a dnstap time pair as RFC 3339 UTC with nanosecond precision.
///
/// Nanoseconds beyond one second carry into the seconds; times outside the
/// representable range clamp to the maximum date.
pub fn format_timestamp(secs: u64, nanos: u32) -> String {
    let carried = secs.saturating_add(u64::from(nanos / NANOS_PER_SEC));
    let secs = i64::try_from(carried).unwrap_or(i64::MAX);

    DateTime::from_timestamp(secs, nanos % NANOS_PER_SEC)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
        .to_rfc3339_opts(SecondsFormat::Nanos, true)
}
