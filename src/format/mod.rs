//! Text renderings of a [`Dictionary`].
//!
//! Both notations emit keys in byte-wise ascending order at every nesting
//! level, independent of insertion order, so output is stable for diffing.
//! Numbers use fixed formats:
//!
//! - integers in decimal
//! - single and double precision floats as `{:.6E}`, e.g. `2.000000E0`
//! - vector components in shortest round-trip form of their own precision,
//!   e.g. `0`, `1.5`, or `0.1` for a single precision `0.1`
//!
//! A formatter either returns the complete text or an error; partial output
//! is never produced.

mod error;
mod json;
mod lua;

use crate::dictionary::{Dictionary, Kind};

pub use error::FormatError;
pub use json::JsonFormatter;
pub use lua::LuaFormatter;

/// Converts a [`Dictionary`] into a textual notation.
pub trait DictionaryFormatter {
    fn format(&self, dictionary: &Dictionary) -> Result<String, FormatError>;
}

/// Formats `dictionary` in compact JSON notation.
pub fn format_json(dictionary: &Dictionary) -> Result<String, FormatError> {
    JsonFormatter.format(dictionary)
}

/// Formats `dictionary` in compact Lua table notation.
pub fn format_lua(dictionary: &Dictionary) -> Result<String, FormatError> {
    LuaFormatter::default().format(dictionary)
}

/// Dotted path of `key` below `parent`, used in error reports.
fn key_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

fn non_finite(parent: &str, key: &str, kind: Kind) -> FormatError {
    FormatError::NonFinite {
        key: key_path(parent, key),
        kind,
    }
}

fn scientific(value: f64, parent: &str, key: &str, kind: Kind) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(non_finite(parent, key, kind));
    }
    Ok(format!("{value:.6E}"))
}

/// Joins vector components in their own precision's shortest form, so a
/// single precision `0.1` prints as `0.1`.
fn components<T>(values: &[T], parent: &str, key: &str, kind: Kind) -> Result<String, FormatError>
where
    T: Copy + Into<f64> + ToString,
{
    if values.iter().any(|c| !Into::<f64>::into(*c).is_finite()) {
        return Err(non_finite(parent, key, kind));
    }
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    Ok(parts.join(","))
}
