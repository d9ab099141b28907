//! Format-agnostic configuration loading

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{Error, Result};

/// Marker overrides. Unset fields fall back to the built-in markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Top-level layout of a block-strip config file.
///
/// ```toml
/// [markers]
/// start = "<SAMPLE>"
/// end = "<SOURCE>"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StripConfig {
    pub markers: MarkerConfig,
}

impl StripConfig {
    /// Load from `path` using the default [`ConfigStore`].
    pub fn load(path: &Path) -> Result<Self> {
        ConfigStore::new().load(path)
    }
}

/// Loads configuration, detecting the format from the file extension.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), format, "loading config");

        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match format {
            "TOML" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            "JSON" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
            _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        }
    }
}
