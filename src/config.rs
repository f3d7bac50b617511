//! Configuration for pathstep
//!
//! Everything is optional; an empty TOML document yields the defaults.
//!
//! ```toml
//! [queue]
//! initial_depth = 4
//!
//! [logging]
//! verbose = true
//! json = false
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{LoggingConfig, PathstepConfig, QueueConfig, DEFAULT_INITIAL_DEPTH, MAX_DEPTH};

impl PathstepConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PathstepConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::PathstepError::invalid_value("configuration", e))
    }

    pub fn validate(&self) -> Result<()> {
        self.queue.validate()
    }
}

impl QueueConfig {
    pub fn validate(&self) -> Result<()> {
        if self.initial_depth == 0 || self.initial_depth > MAX_DEPTH {
            bail_invalid!(
                "queue.initial_depth",
                format!("{} (expected 1..={})", self.initial_depth, MAX_DEPTH)
            );
        }
        Ok(())
    }
}

impl LoggingConfig {
    /// Install the tracing subscriber described by this configuration
    pub fn init(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        crate::logging::init_tracing(self.verbose, self.level.as_deref(), self.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PathstepConfig::from_toml_str("").unwrap();
        assert_eq!(config.queue.initial_depth, DEFAULT_INITIAL_DEPTH);
        assert!(!config.logging.verbose);
        assert!(!config.logging.json);
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_parse_queue_section() {
        let config = PathstepConfig::from_toml_str("[queue]\ninitial_depth = 5\n").unwrap();
        assert_eq!(config.queue.initial_depth, 5);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = PathstepConfig::from_toml_str("[queue]\ninitial_depth = 0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_depth_above_max_rejected() {
        let text = format!("[queue]\ninitial_depth = {}\n", MAX_DEPTH + 1);
        let err = PathstepConfig::from_toml_str(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = PathstepConfig::from_toml_str("[queue\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = PathstepConfig::default();
        config.queue.initial_depth = 7;
        config.logging.level = Some("trace".to_string());

        let text = config.to_toml_string().unwrap();
        let parsed = PathstepConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
