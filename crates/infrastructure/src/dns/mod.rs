pub mod wire_decoder;
pub mod zone;

pub use wire_decoder::HickoryWireDecoder;
pub use zone::zone_to_text;
