use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::anonymizer::AddressMasks;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnonymizeConfig {
    /// Network prefix kept from IPv4 addresses (0-32)
    #[serde(default = "default_ipv4_prefix")]
    pub ipv4_prefix: u8,

    /// Network prefix kept from IPv6 addresses (0-128)
    #[serde(default = "default_ipv6_prefix")]
    pub ipv6_prefix: u8,
}

impl Default for AnonymizeConfig {
    fn default() -> Self {
        Self {
            ipv4_prefix: default_ipv4_prefix(),
            ipv6_prefix: default_ipv6_prefix(),
        }
    }
}

impl AnonymizeConfig {
    pub fn masks(&self) -> Result<AddressMasks, ConfigError> {
        AddressMasks::from_prefixes(self.ipv4_prefix, self.ipv6_prefix)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

fn default_ipv4_prefix() -> u8 {
    24
}

fn default_ipv6_prefix() -> u8 {
    48
}
