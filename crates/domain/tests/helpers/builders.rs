#![allow(dead_code)]
use dnstap_flat_domain::{DomainLabels, FlatRecord, QuestionFields};
use std::borrow::Cow;

pub struct FlatRecordBuilder {
    record: FlatRecord,
}

impl FlatRecordBuilder {
    pub fn new() -> Self {
        Self {
            record: FlatRecord {
                timestamp: Some("2024-01-01T00:00:00.000000000Z".to_string()),
                query_time: "2024-01-01T00:00:00.000000000Z".to_string(),
                response_time: "2024-01-01T00:00:00.250000000Z".to_string(),
                query_address: Some("192.0.2.0".to_string()),
                query_port: 53000,
                response_address: Some("198.51.100.0".to_string()),
                response_port: 53,
                response_zone: String::new(),
                identity: "ns1".to_string(),
                message_type: "CLIENT_QUERY",
                socket_family: "INET",
                socket_protocol: "UDP",
                version: "bind 9".to_string(),
                extra: String::new(),
                question: None,
                rcode: Cow::Borrowed("NOERROR"),
                aa: false,
                tc: false,
                rd: true,
                ra: false,
                ad: false,
                cd: false,
            },
        }
    }

    pub fn question(mut self, qname: &str) -> Self {
        self.record.question = Some(QuestionFields {
            qname: qname.to_string(),
            qclass: Cow::Borrowed("IN"),
            qtype: Cow::Borrowed("A"),
            labels: DomainLabels::derive(qname),
            message_size: 29,
            txid: 4242,
        });
        self
    }

    pub fn without_timestamp(mut self) -> Self {
        self.record.timestamp = None;
        self.record.message_type = "UPDATE_QUERY";
        self
    }

    pub fn query_address(mut self, address: Option<&str>) -> Self {
        self.record.query_address = address.map(str::to_string);
        self
    }

    pub fn build(self) -> FlatRecord {
        self.record
    }
}
