use thiserror::Error;

use crate::dictionary::Kind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// NaN and infinities have no literal form in either notation.
    #[error("value at '{key}' ({kind}) is not a finite number")]
    NonFinite { key: String, kind: Kind },
}
