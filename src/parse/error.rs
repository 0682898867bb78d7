use thiserror::Error;

/// Errors produced when parsing rule DSL input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("parse error: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The parser's description of what went wrong and where.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
