//! Configuration management for the storage backend
//!
//! Settings come from an optional `supabase.toml` plus `SUPABASE_*`
//! environment overrides, or the struct can be built directly by the host
//! application.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Storage backend configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Base URL of the Supabase project, e.g. `https://<id>.supabase.co`
    /// Environment: SUPABASE_URL
    #[serde(default)]
    pub url: Option<String>,

    /// Service token sent in the Authorization and apikey headers
    /// Environment: SUPABASE_ACCESS_TOKEN
    #[serde(default)]
    pub access_token: Option<String>,

    /// Bucket every object key resolves into
    /// Environment: SUPABASE_BUCKET
    #[serde(default)]
    pub bucket: String,

    /// Optional key prefix prepended to every object key
    /// Environment: SUPABASE_ROOT_PATH
    #[serde(default)]
    pub root_path: String,

    /// Replace existing objects on name collision instead of renaming
    #[serde(default)]
    pub file_overwrite: bool,

    /// Report timezone-aware timestamps from stat calls
    #[serde(default)]
    pub use_tz: bool,
}

impl StorageConfig {
    /// Load configuration from supabase.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("supabase").required(false))
            .add_source(Environment::with_prefix("SUPABASE"))
            .build()?;

        let config: StorageConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.is_empty() {
            return Err(ConfigError::Message("bucket cannot be empty".into()));
        }

        match (&self.url, &self.access_token) {
            (Some(_), None) => Err(ConfigError::Message(
                "url is set but access_token is missing".into(),
            )),
            (None, Some(_)) => Err(ConfigError::Message(
                "access_token is set but url is missing".into(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> StorageConfig {
        StorageConfig {
            bucket: "media".to_string(),
            ..StorageConfig::default()
        }
    }

    #[test]
    fn test_validate_accepts_url_and_token() {
        let config = StorageConfig {
            url: Some("https://example.supabase.co".to_string()),
            access_token: Some("token".to_string()),
            ..base_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_neither_url_nor_token() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_url_without_token() {
        let config = StorageConfig {
            url: Some("https://example.supabase.co".to_string()),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_token_without_url() {
        let config = StorageConfig {
            access_token: Some("token".to_string()),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_bucket() {
        assert!(StorageConfig::default().validate().is_err());
    }
}
