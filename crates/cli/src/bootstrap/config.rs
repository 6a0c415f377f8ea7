use anyhow::Context;
use dnstap_flat_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Configured fallback identity, else the system hostname.
pub fn resolve_fallback_identity(config: &Config) -> String {
    if let Some(identity) = &config.identity.fallback {
        return identity.clone();
    }

    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
