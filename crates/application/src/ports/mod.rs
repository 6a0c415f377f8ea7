mod wire_decoder;

pub use wire_decoder::DnsWireDecoder;
