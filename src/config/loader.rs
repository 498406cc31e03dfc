use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::HelpConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl HelpConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: HelpConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError { source: e })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `HelpConfig::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(HelpConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Labels render on a single line each, so they may not contain newlines.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let labels = [
            ("names_label", &self.names_label),
            ("description_label", &self.description_label),
            ("positional_placeholder", &self.positional_placeholder),
        ];

        for (key, value) in labels {
            if value.contains('\n') {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' must not contain a newline", key),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = HelpConfig::from_toml_str(r#"names_label = "Names: ""#).unwrap();
        assert_eq!(config.names_label, "Names: ");
        assert_eq!(config.description_label, HelpConfig::default().description_label);
    }

    #[test]
    fn newline_in_label_rejected() {
        let err = HelpConfig::from_toml_str("description_label = \"a\\nb\"").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(err.to_string().contains("description_label"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = HelpConfig::from_toml_str("names_label = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = HelpConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, HelpConfig::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("help.toml");
        fs::write(&path, "positional_placeholder = \"ARG\"\n").unwrap();

        let config = HelpConfig::load_from(&path).unwrap();
        assert_eq!(config.positional_placeholder, "ARG");
    }
}
