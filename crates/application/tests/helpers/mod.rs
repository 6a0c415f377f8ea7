mod builders;
mod mock_wire_decoder;

pub use builders::*;
pub use mock_wire_decoder::*;
