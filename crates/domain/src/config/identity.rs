use serde::{Deserialize, Serialize};

/// Identity written into records whose envelope carries none.
///
/// When `fallback` is unset the binary substitutes the system hostname.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub fallback: Option<String>,
}
