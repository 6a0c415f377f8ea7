#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Recursive query built with hickory-proto, as a stub resolver would send it.
pub fn hickory_query(id: u16, domain: &str, record_type: RecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Hand-assembled wire message for exercising individual header bits.
pub struct WireMessage {
    pub id: u16,
    pub response: bool,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub ad: bool,
    pub cd: bool,
    pub rcode: u8,
    pub questions: Vec<(String, u16, u16)>,
}

impl WireMessage {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            response: false,
            aa: false,
            tc: false,
            rd: false,
            ra: false,
            ad: false,
            cd: false,
            rcode: 0,
            questions: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.push((name.to_string(), qtype, qclass));
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut flags: u16 = 0;
        let bits = [
            (self.response, 15),
            (self.aa, 10),
            (self.tc, 9),
            (self.rd, 8),
            (self.ra, 7),
            (self.ad, 5),
            (self.cd, 4),
        ];
        for (set, bit) in bits {
            if set {
                flags |= 1 << bit;
            }
        }
        flags |= u16::from(self.rcode & 0x0F);

        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&flags.to_be_bytes());
        buf.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

        for (name, qtype, qclass) in &self.questions {
            for label in name.split('.').filter(|l| !l.is_empty()) {
                buf.push(label.len() as u8);
                buf.extend_from_slice(label.as_bytes());
            }
            buf.push(0);
            buf.extend_from_slice(&qtype.to_be_bytes());
            buf.extend_from_slice(&qclass.to_be_bytes());
        }
        buf
    }
}
