//! JSON-lines transport for envelopes in and flat records out.

mod codec;
pub mod envelope_dto;
pub mod reader;
pub mod writer;

pub use envelope_dto::EnvelopeDto;
pub use reader::EnvelopeReader;
pub use writer::RecordWriter;
