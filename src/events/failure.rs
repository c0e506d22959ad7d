//! Internal error representations
//!
//! Failures arrive from the signaling stack as plain strings or structured
//! objects. Both forms are carried on lifecycle events; stringification to
//! the outward form lives in `utils::error`.

use std::fmt;

/// Structured internal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureError {
    /// Stable failure identifier, e.g. `conference.connectionError`
    pub name: String,

    /// Optional human-readable detail
    pub message: Option<String>,

    /// Whether the application intends to retry or prompt, rather than
    /// treating the failure as terminal
    pub recoverable: bool,
}

impl FailureError {
    pub fn new(name: impl Into<String>, recoverable: bool) -> Self {
        Self {
            name: name.into(),
            message: None,
            recoverable,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for FailureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.name, message),
            None => f.write_str(&self.name),
        }
    }
}

/// Any internal error value: plain text or a structured failure.
///
/// Plain text errors carry no retry semantics and are never recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValue {
    Text(String),
    Failure(FailureError),
}

impl ErrorValue {
    /// Short identifying name of the error
    pub fn name(&self) -> &str {
        match self {
            ErrorValue::Text(text) => text,
            ErrorValue::Failure(failure) => &failure.name,
        }
    }

    /// Whether the application will retry or prompt instead of giving up
    pub fn is_recoverable(&self) -> bool {
        match self {
            ErrorValue::Text(_) => false,
            ErrorValue::Failure(failure) => failure.recoverable,
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorValue::Text(text) => f.write_str(text),
            ErrorValue::Failure(failure) => failure.fmt(f),
        }
    }
}

impl From<FailureError> for ErrorValue {
    fn from(failure: FailureError) -> Self {
        ErrorValue::Failure(failure)
    }
}

impl From<&str> for ErrorValue {
    fn from(text: &str) -> Self {
        ErrorValue::Text(text.to_string())
    }
}
