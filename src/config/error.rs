use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid TOML: {0}")]
    InvalidToml(#[source] toml::de::Error),

    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[source] toml::de::Error),

    #[error("unsupported value at '{key}': {reason}")]
    UnsupportedValue { key: String, reason: &'static str },
}
