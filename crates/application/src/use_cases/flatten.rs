use crate::ports::DnsWireDecoder;
use dnstap_flat_domain::{
    class_mnemonic, format_timestamp, rcode_mnemonic, record_type_mnemonic, AddressMasks,
    DnstapEnvelope, DomainError, DomainLabels, FlatRecord, QuestionFields, TimestampSource,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Turns one dnstap envelope into a [`FlatRecord`].
///
/// Holds only read-only settings, so a single instance can be shared by any
/// number of workers.
pub struct FlattenDnstapUseCase {
    decoder: Arc<dyn DnsWireDecoder>,
    masks: AddressMasks,
    fallback_identity: Arc<str>,
}

impl FlattenDnstapUseCase {
    pub fn new(
        decoder: Arc<dyn DnsWireDecoder>,
        masks: AddressMasks,
        fallback_identity: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            decoder,
            masks,
            fallback_identity: fallback_identity.into(),
        }
    }

    #[instrument(skip(self, envelope), fields(message_type = %envelope.message.message_type))]
    pub fn execute(&self, envelope: &DnstapEnvelope) -> Result<FlatRecord, DomainError> {
        let message = &envelope.message;
        let payload = message.select_payload();

        let decoded = self.decoder.decode(payload.bytes).map_err(|e| {
            debug!(payload = %payload.kind, size = payload.len(), error = %e, "Wire decode failed");
            DomainError::DecodeFailure {
                payload: payload.kind,
                size: payload.len(),
                reason: e.to_string(),
            }
        })?;

        let query_time = format_timestamp(message.query_time_sec, message.query_time_nsec);
        let response_time =
            format_timestamp(message.response_time_sec, message.response_time_nsec);
        let timestamp = message
            .message_type
            .timestamp_source()
            .map(|source| match source {
                TimestampSource::QueryTime => query_time.clone(),
                TimestampSource::ResponseTime => response_time.clone(),
            });

        let question = decoded.first_question().map(|question| QuestionFields {
            qname: question.name.clone(),
            qclass: class_mnemonic(question.class),
            qtype: record_type_mnemonic(question.record_type),
            labels: DomainLabels::derive(&question.name),
            message_size: payload.len(),
            txid: decoded.id,
        });

        let identity = envelope
            .identity_str()
            .unwrap_or_else(|| self.fallback_identity.to_string());

        let flags = decoded.flags;

        Ok(FlatRecord {
            timestamp,
            query_time,
            response_time,
            query_address: self.masks.anonymize(&message.query_address),
            query_port: message.query_port,
            response_address: self.masks.anonymize(&message.response_address),
            response_port: message.response_port,
            response_zone: message.query_zone.clone(),
            identity,
            message_type: message.message_type.as_str(),
            socket_family: message.socket_family.as_str(),
            socket_protocol: message.socket_protocol.as_str(),
            version: lossy_text(envelope.version.as_deref()),
            extra: lossy_text(envelope.extra.as_deref()),
            question,
            rcode: rcode_mnemonic(decoded.response_code),
            aa: flags.authoritative,
            tc: flags.truncated,
            rd: flags.recursion_desired,
            ra: flags.recursion_available,
            ad: flags.authentic_data,
            cd: flags.checking_disabled,
        })
    }
}

fn lossy_text(bytes: Option<&[u8]>) -> String {
    bytes
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}
