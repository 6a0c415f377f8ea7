//! dnstap-flat domain layer
pub mod anonymizer;
pub mod config;
pub mod dns_message;
pub mod dnstap;
pub mod domain_labels;
pub mod errors;
pub mod flat_record;
pub mod mnemonics;

pub use anonymizer::AddressMasks;
pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use dns_message::{DecodedDnsMessage, DnsQuestion, HeaderFlags};
pub use dnstap::{
    DnstapEnvelope, DnstapMessage, MessageType, PayloadKind, SelectedPayload, SocketFamily,
    SocketProtocol, TimestampSource,
};
pub use domain_labels::DomainLabels;
pub use errors::DomainError;
pub use flat_record::{format_timestamp, FlatRecord, QuestionFields};
pub use mnemonics::{class_mnemonic, rcode_mnemonic, record_type_mnemonic};
