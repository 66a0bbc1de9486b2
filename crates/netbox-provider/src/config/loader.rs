use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};

use super::ProviderSettings;
use crate::error::{ProviderError, Result};

/// Settings file picked up from the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "netbox-provider.toml";

/// Load settings from an optional TOML file plus `NETBOX__*` environment
/// overrides, then validate them.
pub fn load_settings(path: Option<&str>) -> Result<ProviderSettings> {
    let mut builder = Config::builder();
    let file = PathBuf::from(path.unwrap_or(DEFAULT_SETTINGS_FILE));
    if file.exists() {
        builder = builder.add_source(File::from(file));
    } else if let Some(p) = path {
        tracing::warn!(path = p, "settings file not found, using defaults");
    }
    // Environment variable overrides, e.g., NETBOX__CUSTOM_FIELDS__QUERY_PREFIX=cf_
    builder = builder.add_source(
        Environment::with_prefix("NETBOX")
            .try_parsing(true)
            .separator("__"),
    );
    let cfg = builder
        .build()
        .map_err(|e| ProviderError::config(format!("config build error: {e}")))?;
    let settings: ProviderSettings = cfg
        .try_deserialize()
        .map_err(|e| ProviderError::config(format!("config deserialize error: {e}")))?;
    settings.validate()?;
    Ok(settings)
}

pub fn load_settings_from_path<P: AsRef<Path>>(path: P) -> Result<ProviderSettings> {
    let p = path.as_ref().to_string_lossy().to_string();
    load_settings(Some(&p))
}
