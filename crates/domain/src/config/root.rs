use serde::{Deserialize, Serialize};

use super::anonymize::AnonymizeConfig;
use super::errors::ConfigError;
use super::identity::IdentityConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "dnstap-flat.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnstap-flat/config.toml";

/// Main configuration structure for dnstap-flat
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Address anonymization (prefix lengths per family)
    #[serde(default)]
    pub anonymize: AnonymizeConfig,

    /// Fallback producer identity
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnstap-flat.toml in current directory
    /// 3. /etc/dnstap-flat/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(prefix) = overrides.ipv4_prefix {
            self.anonymize.ipv4_prefix = prefix;
        }
        if let Some(prefix) = overrides.ipv6_prefix {
            self.anonymize.ipv6_prefix = prefix;
        }
        if let Some(identity) = overrides.identity {
            self.identity.fallback = Some(identity);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anonymize.ipv4_prefix > 32 {
            return Err(ConfigError::Validation(format!(
                "IPv4 prefix must be between 0 and 32, got {}",
                self.anonymize.ipv4_prefix
            )));
        }

        if self.anonymize.ipv6_prefix > 128 {
            return Err(ConfigError::Validation(format!(
                "IPv6 prefix must be between 0 and 128, got {}",
                self.anonymize.ipv6_prefix
            )));
        }

        if matches!(&self.identity.fallback, Some(identity) if identity.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "Fallback identity cannot be blank".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub ipv4_prefix: Option<u8>,
    pub ipv6_prefix: Option<u8>,
    pub identity: Option<String>,
    pub log_level: Option<String>,
}
