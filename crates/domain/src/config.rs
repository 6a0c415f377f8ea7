pub mod anonymize;
pub mod errors;
pub mod identity;
pub mod logging;
pub mod root;

pub use anonymize::AnonymizeConfig;
pub use errors::ConfigError;
pub use identity::IdentityConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
