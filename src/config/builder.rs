use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::convert::deserialize;
use super::env::EnvSource;
use super::file::FileSource;
use super::source::{merge_at_path, ConfigSource};
use super::ConfigError;
use crate::dictionary::Dictionary;

/// Builder that layers configuration sources into one [`Dictionary`].
///
/// Sources are merged in registration order, with later sources overriding
/// earlier ones. Nested dictionaries are merged recursively; other values
/// (including vectors) are replaced entirely.
///
/// ## Example
///
/// ```no_run
/// use dragon_dict::{Dictionary, Loader};
///
/// let defaults = Dictionary::from([("threads", 4)]);
///
/// // defaults -> shipped file -> env overrides -> local file overrides env
/// let config = Loader::builder()
///     .with_defaults(defaults)
///     .with_file("config/default.toml", true)
///     .with_env("MYAPP", "__")
///     .with_file("config/local.toml", false)
///     .build()?;
///
/// let threads: i64 = config.value("threads").unwrap_or(1);
/// # Ok::<(), dragon_dict::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Loader {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl Loader {
    /// Creates a new loader.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a dictionary of default values.
    pub fn with_defaults(self, defaults: Dictionary) -> Self {
        self.with_source(defaults)
    }

    /// Adds a TOML file to be loaded.
    ///
    /// If `required` is `true`, the build fails if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Loads overrides from environment variables with the given prefix.
    ///
    /// With prefix `MYAPP` and separator `__`, `MYAPP__DATABASE__PORT=5432`
    /// sets `database.port` to the integer 5432.
    pub fn with_env(self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix, separator))
    }

    /// Adds a custom source.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads and merges every source.
    pub fn build(self) -> Result<Dictionary, ConfigError> {
        let mut merged = Dictionary::new();

        for source in &self.sources {
            let entries = source.entries()?;
            debug!(?source, entries = entries.len(), "applying config source");
            for entry in entries {
                merge_at_path(&mut merged, &entry.path, entry.value);
            }
        }

        Ok(merged)
    }

    /// Loads, merges, and deserializes into `T`.
    pub fn build_into<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let merged = self.build()?;
        deserialize(&merged)
    }
}
