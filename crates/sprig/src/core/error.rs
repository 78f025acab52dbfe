use std::{io, result::Result as StdResult};

use thiserror::Error;

use crate::path::StatePath;

/// Result type for sprig operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("terminal: {0}")]
    /// Terminal I/O failure.
    Terminal(String),

    #[error("state at {path}: expected {expected}, found {found}")]
    /// A state entry does not have the expected shape.
    StateType {
        /// Absolute path of the offending entry.
        path: StatePath,
        /// Name of the expected type.
        expected: &'static str,
        /// Name of the type actually found.
        found: String,
    },

    #[error("state at {path}: no value")]
    /// A state entry was read before anything was stored there.
    StateMissing {
        /// Absolute path of the missing entry.
        path: StatePath,
    },

    #[error("binding: {0}")]
    /// A binding hook failed while handling an event.
    Binding(String),

    #[error("parse key: {0}")]
    /// A key specification could not be parsed.
    ParseKey(String),

    #[error("parse style: {0}")]
    /// A styling string could not be parsed.
    ParseStyle(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Terminal(e.to_string())
    }
}
