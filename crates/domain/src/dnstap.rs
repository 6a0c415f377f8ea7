mod envelope;
mod message_type;
mod payload;
mod socket;

pub use envelope::{DnstapEnvelope, DnstapMessage};
pub use message_type::{MessageType, TimestampSource};
pub use payload::{PayloadKind, SelectedPayload};
pub use socket::{SocketFamily, SocketProtocol};
