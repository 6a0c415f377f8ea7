//! dnstap-flat infrastructure: wire decoding and JSON-lines ingestion
pub mod dns;
pub mod ingest;
