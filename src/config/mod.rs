//! # Advisor Configuration
//!
//! JSON configuration for an [`Advisor`](crate::advisor::Advisor).
//!
//! ```rust
//! use hand_advisor::access::AccessPolicy;
//! use hand_advisor::config::AdvisorConfig;
//!
//! let config = AdvisorConfig::from_json(
//!     r#"{
//!         "access": {"type": "passphrase", "phrase": "nuts"},
//!         "store_path": "prefs/advisor.json",
//!         "locale": "pt-BR"
//!     }"#,
//! )
//! .unwrap();
//! assert!(matches!(config.access, AccessPolicy::Passphrase { .. }));
//!
//! // Everything is optional
//! let config = AdvisorConfig::from_json("{}").unwrap();
//! assert_eq!(config.access, AccessPolicy::Acknowledge);
//! ```
//!
//! ## Fields
//!
//! - `access` - the gate policy, one of `open`, `acknowledge` or
//!   `passphrase`. Defaults to `acknowledge`.
//! - `store_path` - where preferences are kept. Without it they live in
//!   memory only.
//! - `locale` - forces a locale and skips detection.

use std::{io::ErrorKind, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::access::AccessPolicy;
use crate::i18n::Locale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub access: AccessPolicy,
    #[serde(default)]
    pub store_path: Option<PathBuf>,
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl AdvisorConfig {
    /// Validate that the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let AccessPolicy::Passphrase { phrase } = &self.access {
            if phrase.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "passphrase access needs a non-blank phrase".to_string(),
                ));
            }
        }
        if let Some(path) = &self.store_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "store_path must not be empty".to_string(),
                ));
            }
            if path.is_dir() {
                return Err(ConfigError::ValidationError(format!(
                    "store_path {} is a directory",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AdvisorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to parse as file path first, then as inline JSON
    pub fn from_str_or_file(input: &str) -> Result<Self, ConfigError> {
        match Self::from_file(input) {
            Ok(config) => Ok(config),
            Err(ConfigError::IoError(err)) if err.kind() == ErrorKind::NotFound => {
                Self::from_json(input)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::from_json("{}").unwrap();
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.store_path, None);
        assert_eq!(config.locale, None);
    }

    #[test]
    fn test_full_config() {
        let config = AdvisorConfig::from_json(
            r#"{"access": {"type": "open"}, "store_path": "a/b.json", "locale": "en-US"}"#,
        )
        .unwrap();
        assert_eq!(config.access, AccessPolicy::Open);
        assert_eq!(config.store_path, Some(PathBuf::from("a/b.json")));
        assert_eq!(config.locale, Some(Locale::EnUs));
    }

    #[test]
    fn test_blank_passphrase_rejected() {
        let err = AdvisorConfig::from_json(r#"{"access": {"type": "passphrase", "phrase": " "}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            AdvisorConfig::from_json(r#"{"locale": "xx-XX"}"#),
            Err(ConfigError::JsonError(_))
        ));
        assert!(matches!(
            AdvisorConfig::from_json(r#"{"colour": "green"}"#),
            Err(ConfigError::JsonError(_))
        ));
    }

    #[test]
    fn test_store_path_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let json = serde_json::json!({ "store_path": temp_dir.path() }).to_string();
        assert!(matches!(
            AdvisorConfig::from_json(&json),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_from_file_and_inline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("advisor.json");
        std::fs::write(&path, r#"{"locale": "pt-BR"}"#).unwrap();

        let config = AdvisorConfig::from_file(&path).unwrap();
        assert_eq!(config.locale, Some(Locale::PtBr));

        let from_either = AdvisorConfig::from_str_or_file(path.to_str().unwrap()).unwrap();
        assert_eq!(from_either, config);

        let inline = AdvisorConfig::from_str_or_file(r#"{"access": {"type": "open"}}"#).unwrap();
        assert_eq!(inline.access, AccessPolicy::Open);
    }
}
