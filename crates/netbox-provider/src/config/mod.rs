//! Provider settings.
//!
//! ```toml
//! [custom_fields]
//! attribute_key = "custom_fields"
//! query_prefix = "cf_"
//!
//! [logging]
//! level = "info"
//! ```

pub mod loader;

use netbox_core::{CUSTOM_FIELD_PARAM_PREFIX, CUSTOM_FIELDS_KEY};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{ProviderError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub custom_fields: CustomFieldsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl ProviderSettings {
    pub fn validate(&self) -> Result<()> {
        self.custom_fields.validate()?;
        self.logging.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldsSettings {
    /// Resource attribute holding the custom-fields map
    #[serde(default = "default_attribute_key")]
    pub attribute_key: String,
    /// Prefix of the query parameter sent for each field
    #[serde(default = "default_query_prefix")]
    pub query_prefix: String,
}

fn default_attribute_key() -> String {
    CUSTOM_FIELDS_KEY.into()
}

fn default_query_prefix() -> String {
    CUSTOM_FIELD_PARAM_PREFIX.into()
}

impl Default for CustomFieldsSettings {
    fn default() -> Self {
        Self {
            attribute_key: default_attribute_key(),
            query_prefix: default_query_prefix(),
        }
    }
}

impl CustomFieldsSettings {
    pub fn validate(&self) -> Result<()> {
        if self.attribute_key.trim().is_empty() {
            return Err(ProviderError::config(
                "custom_fields.attribute_key must not be empty",
            ));
        }
        if self.query_prefix.is_empty() {
            return Err(ProviderError::config(
                "custom_fields.query_prefix must not be empty",
            ));
        }
        if self.query_prefix.chars().any(char::is_whitespace) {
            return Err(ProviderError::config(
                "custom_fields.query_prefix must not contain whitespace",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingSettings {
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| ProviderError::config(format!("invalid logging.level {:?}: {e}", self.level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.custom_fields.attribute_key, "custom_fields");
        assert_eq!(settings.custom_fields.query_prefix, "cf_");
        assert_eq!(settings.logging.level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_prefix() {
        let mut settings = ProviderSettings::default();
        settings.custom_fields.query_prefix = "cf ".into();
        assert!(settings.validate().is_err());

        settings.custom_fields.query_prefix = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_attribute_key() {
        let mut settings = ProviderSettings::default();
        settings.custom_fields.attribute_key = "  ".into();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("attribute_key"));
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut settings = ProviderSettings::default();
        settings.logging.level = "netbox=verbose".into();
        assert!(settings.validate().is_err());

        settings.logging.level = "netbox_provider=debug,info".into();
        assert!(settings.validate().is_ok());
    }
}
