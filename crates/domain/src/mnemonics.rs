//! Text mnemonics for numeric DNS codes.
//!
//! Codes without a registered mnemonic render in the RFC 3597 generic form
//! (`TYPE65280`, `CLASS42`) or as `RCODE<n>`.

mod class;
mod rcode;
mod record_type;

pub use class::class_mnemonic;
pub use rcode::rcode_mnemonic;
pub use record_type::record_type_mnemonic;
