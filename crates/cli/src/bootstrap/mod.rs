mod config;
mod logging;

pub use config::{load_config, resolve_fallback_identity};
pub use logging::init_logging;
