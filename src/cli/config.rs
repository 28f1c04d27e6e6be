//! Configuration file handling
//!
//! The file is a JSON object. Every field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contact::NUMBER_LENGTH;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Digits appended to the prefix for each sample number
const SAMPLE_SUFFIX_DIGITS: usize = 8;

/// First sample suffix; keeps every suffix at exactly eight digits
pub(super) const SAMPLE_SUFFIX_BASE: u64 = 10_000_000;

/// Largest count whose suffixes stay below 100_000_000
const MAX_CONTACT_COUNT: u64 = 90_000_000;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Sample contacts to generate (default 200000)
    #[serde(default = "default_contact_count")]
    pub contact_count: u64,

    /// Leading digits of every sample number (default "04")
    #[serde(default = "default_number_prefix")]
    pub number_prefix: String,

    /// Chance that a sample contact has an address (default 0.5)
    #[serde(default = "default_address_probability")]
    pub address_probability: f64,

    /// Seed for reproducible sample data; random when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_contact_count() -> u64 {
    200_000
}
fn default_number_prefix() -> String {
    "04".to_string()
}
fn default_address_probability() -> f64 {
    0.5
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contact_count: default_contact_count(),
            number_prefix: default_number_prefix(),
            address_probability: default_address_probability(),
            seed: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> CliResult<()> {
        let prefix_len = NUMBER_LENGTH - SAMPLE_SUFFIX_DIGITS;
        if self.number_prefix.len() != prefix_len
            || !self.number_prefix.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CliError::Config(format!(
                "number_prefix must be exactly {} digits, got '{}'",
                prefix_len, self.number_prefix
            )));
        }

        if self.contact_count > MAX_CONTACT_COUNT {
            return Err(CliError::Config(format!(
                "contact_count must be <= {}",
                MAX_CONTACT_COUNT
            )));
        }

        if !(0.0..=1.0).contains(&self.address_probability) {
            return Err(CliError::Config(
                "address_probability must be between 0 and 1".to_string(),
            ));
        }

        self.severity()?;

        Ok(())
    }

    /// Returns the configured minimum log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.contact_count, 200_000);
        assert_eq!(config.number_prefix, "04");
        assert_eq!(config.severity().unwrap(), Severity::Info);
        config.validate().unwrap();
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(r#"{"contact_count": 10, "seed": 7}"#);
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.contact_count, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.number_prefix, "04");
        assert_eq!(config.address_probability, 0.5);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/phonedir.json")).unwrap_err();
        assert_eq!(err.code(), "PHONEDIR_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config("{not json");
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config JSON"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config(r#"{"contacts": 10}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_invalid_values() {
        let bad = [
            Config { number_prefix: "4".into(), ..Config::default() },
            Config { number_prefix: "0x".into(), ..Config::default() },
            Config { contact_count: MAX_CONTACT_COUNT + 1, ..Config::default() },
            Config { address_probability: 1.5, ..Config::default() },
            Config { log_level: "loud".into(), ..Config::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }
}
