//! Failure values produced by the safe wrappers.

use core::any::Any;

use serde_json::error::Category;
use thiserror::Error;

/// What kind of input made parsing fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed text (e.g. unquoted keys).
    Syntax,
    /// Input ended in the middle of a value.
    Eof,
    /// Well-formed JSON that does not match the requested type.
    Data,
    /// The underlying reader failed.
    Io,
}

impl From<Category> for ParseErrorKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Syntax => Self::Syntax,
            Category::Eof => Self::Eof,
            Category::Data => Self::Data,
            Category::Io => Self::Io,
        }
    }
}

/// A captured parse failure.
///
/// `message` is the stringified reason reported by the parser, including its
/// position (e.g. `key must be a string at line 1 column 2`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// 1-based line of the failure (0 when the parser reports no position).
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            kind: err.classify().into(),
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// A panic intercepted by [`try_catch`](crate::outcome::try_catch).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("panicked: {message}")]
pub struct CaughtPanic {
    pub message: String,
}

impl CaughtPanic {
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "non-string panic payload".to_string(),
            },
        };
        Self { message }
    }
}
