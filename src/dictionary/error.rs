use thiserror::Error;

use super::Kind;

/// Why a typed lookup did not produce a value.
///
/// Both outcomes are expected during normal probing of optional keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("key '{key}' holds a {found}, which cannot be read as {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: Kind,
    },
}
