//! Nested configuration dictionaries, a name-keyed object factory that
//! consumes them, and deterministic text formatters that render them.

pub mod config;
pub mod dictionary;
mod error;
pub mod factory;
pub mod format;

pub use config::{ConfigError, Loader};
pub use dictionary::{Dictionary, FromValue, Kind, LookupError, Value};
pub use error::Error;
pub use factory::{CallShape, Factory, FactoryError};
pub use format::{
    format_json, format_lua, DictionaryFormatter, FormatError, JsonFormatter, LuaFormatter,
};
