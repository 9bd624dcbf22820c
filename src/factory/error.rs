use std::fmt;

use thiserror::Error;

/// The argument shape of a creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallShape {
    /// No arguments.
    Default,
    /// A single [`Dictionary`](crate::Dictionary) argument.
    Dictionary,
}

impl fmt::Display for CallShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallShape::Default => f.write_str("no arguments"),
            CallShape::Dictionary => f.write_str("a dictionary argument"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FactoryError {
    #[error("class not registered: {0}")]
    ClassNotFound(String),

    #[error("class '{class}' has no strategy accepting {shape}")]
    Construction { class: String, shape: CallShape },
}
