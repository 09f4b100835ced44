mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./ptmark.toml",
        "~/.config/ptmark/config.toml",
        "/etc/ptmark/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.ptsl.endpoint.trim().is_empty() {
        anyhow::bail!("PTSL endpoint cannot be empty");
    }

    if config.ptsl.company_name.trim().is_empty() || config.ptsl.application_name.trim().is_empty()
    {
        anyhow::bail!("PTSL company_name and application_name are required");
    }

    if config.ptsl.timeout_secs == 0 {
        anyhow::bail!("PTSL timeout_secs cannot be 0");
    }

    if config.markers.first_slot == 0 {
        anyhow::bail!("Marker first_slot must be at least 1");
    }

    Ok(())
}
