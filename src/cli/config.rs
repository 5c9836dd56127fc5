//! Configuration file
//!
//! ```json
//! { "data_dir": "./roster-data", "storage_key": "students", "export_file": "students.csv" }
//! ```
//!
//! Only `data_dir` is required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_EXPORT_FILE;
use crate::roster::DEFAULT_STORAGE_KEY;
use crate::storage::validate_key;

use super::errors::{CliError, CliResult};

/// Data directory written by `roster init` when none is given
pub const DEFAULT_DATA_DIR: &str = "./roster-data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the persisted roster (required)
    pub data_dir: String,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Default target for `roster export`
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Config {
    pub fn new(data_dir: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_key: default_storage_key(),
            export_file: default_export_file(),
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config("data_dir must not be empty"));
        }
        validate_key(&self.storage_key)
            .map_err(|e| CliError::config(format!("storage_key: {}", e)))?;
        if self.export_file.trim().is_empty() {
            return Err(CliError::config("export_file must not be empty"));
        }
        Ok(())
    }

    /// Writes the config as pretty JSON. Fails if `path` already exists.
    pub fn write_new(&self, path: &Path) -> CliResult<()> {
        if path.exists() {
            return Err(CliError::AlreadyInitialized {
                path: path.to_path_buf(),
            });
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("failed to encode config: {}", e)))?;
        fs::write(path, json + "\n")?;
        Ok(())
    }

    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.export_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_json(r#"{"data_dir": "/tmp/roster"}"#).unwrap();
        assert_eq!(config.storage_key, "students");
        assert_eq!(config.export_file, "students.csv");
        assert_eq!(config.data_path(), Path::new("/tmp/roster"));
    }

    #[test]
    fn test_missing_data_dir_rejected() {
        let err = Config::from_json(r#"{"storage_key": "students"}"#).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_empty_data_dir_rejected() {
        assert!(Config::from_json(r#"{"data_dir": "  "}"#).is_err());
    }

    #[test]
    fn test_bad_storage_key_rejected() {
        let err = Config::from_json(r#"{"data_dir": "d", "storage_key": "../x"}"#).unwrap_err();
        assert!(err.to_string().contains("storage_key"));
    }

    #[test]
    fn test_write_new_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.json");
        let config = Config::new(temp.path().join("data").display().to_string());

        config.write_new(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);

        let err = config.write_new(&path).unwrap_err();
        assert!(matches!(err, CliError::AlreadyInitialized { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(&temp.path().join("nope.json")).unwrap_err();
        assert_eq!(err.code(), "ROSTER_CLI_CONFIG_ERROR");
    }
}
