use crate::config::ConfigError;
use crate::dictionary::LookupError;
use crate::factory::FactoryError;
use crate::format::FormatError;
use thiserror::Error;

/// Top-level error type for the dragon-dict library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("factory error: {0}")]
    Factory(#[from] FactoryError),

    #[error("formatting error: {0}")]
    Format(#[from] FormatError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
