//! Layered configuration loading into a [`Dictionary`](crate::Dictionary).

mod builder;
mod convert;
mod env;
mod error;
mod file;
mod source;

pub use builder::Loader;
pub use convert::{deserialize, from_toml, parse_toml, to_toml};
pub use env::EnvSource;
pub use error::ConfigError;
pub use file::FileSource;
pub use source::{ConfigEntry, ConfigSource};
