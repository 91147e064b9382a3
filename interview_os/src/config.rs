//! Settings loaded from `technotes.toml`.
//!
//! ```toml
//! [aggregator]
//! sorted_topics = ["must-know-terms"]
//! strict_ids = false
//!
//! [logging]
//! level = "info"
//!
//! [output]
//! pretty = true
//! ```
//!
//! Every table and field is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::aggregator::AggregatorConfig;
use crate::error::{CatalogError, Result};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "technotes.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub aggregator: AggregatorConfig,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Pretty-print exported JSON.
    pub pretty: bool,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read settings from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `explicit` if given, else from [`DEFAULT_CONFIG_FILE`] in
    /// `dir` if it exists, else defaults.
    pub fn load(explicit: Option<&Path>, dir: impl AsRef<Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(fallback)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.aggregator.sorted_topics, ["must-know-terms"]);
        assert!(!settings.aggregator.strict_ids);
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.output.pretty);
    }

    #[test]
    fn test_partial_tables() {
        let settings = Settings::from_toml_str(
            r#"
            [aggregator]
            strict_ids = true

            [output]
            pretty = true
            "#,
        )
        .unwrap();

        assert!(settings.aggregator.strict_ids);
        assert_eq!(settings.aggregator.sorted_topics, ["must-know-terms"]);
        assert!(settings.output.pretty);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Settings::from_toml_str("[aggregator]\nstrict = true\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_load_prefers_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[logging]\nlevel = \"warn\"\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "[logging]\nlevel = \"debug\"\n").unwrap();

        let settings = Settings::load(Some(explicit.as_path()), dir.path()).unwrap();
        assert_eq!(settings.logging.level, "debug");

        let settings = Settings::load(None, dir.path()).unwrap();
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(None, dir.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Settings::load(Some(missing.as_path()), dir.path()),
            Err(CatalogError::Io { .. })
        ));
    }
}
