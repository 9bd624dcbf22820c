//! File-based configuration source.

use std::path::{Path, PathBuf};

use super::convert::parse_toml;
use super::source::{ConfigEntry, ConfigSource};
use super::ConfigError;
use crate::dictionary::Dictionary;

/// A configuration source that loads a TOML file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are silently skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, loading fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl ConfigSource for FileSource {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        match load_config_file(&self.path, self.required)? {
            Some(dictionary) => Ok(vec![ConfigEntry::root(dictionary)]),
            None => Ok(vec![]),
        }
    }
}

/// Loads a TOML config file into a [`Dictionary`].
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_config_file(path: &Path, required: bool) -> Result<Option<Dictionary>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_toml(&contents).map(Some).map_err(|e| match e {
            ConfigError::InvalidToml(source) => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
