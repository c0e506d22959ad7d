//! Error types and handling
//!
//! Errors raised while parsing inbound host requests, and the conversion of
//! internal error values to the plain string form used at the host boundary.

use crate::events::ErrorValue;
use thiserror::Error;

/// Reasons an inbound host request payload cannot be understood.
///
/// A malformed request is logged and ignored; it is never surfaced back to
/// the host.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    #[error("invalid call id: {0}")]
    InvalidCallId(#[from] uuid::Error),
}

/// Convert an internal error value to its outward string form.
///
/// Internal error representations never cross the host boundary. An absent
/// error becomes the empty string, a plain text error is passed through, and
/// a structured failure uses its canonical textual description.
pub fn stringify_error(error: Option<&ErrorValue>) -> String {
    match error {
        None => String::new(),
        Some(error) => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::FailureError;

    #[test]
    fn test_stringify_absent_error() {
        assert_eq!(stringify_error(None), "");
    }

    #[test]
    fn test_stringify_text_error() {
        let error = ErrorValue::Text("boom".to_string());
        assert_eq!(stringify_error(Some(&error)), "boom");
    }

    #[test]
    fn test_stringify_structured_error() {
        let error = ErrorValue::Failure(FailureError::new("connection.dropped", false));
        let text = stringify_error(Some(&error));
        assert!(!text.is_empty());
        assert_eq!(text, "connection.dropped");

        // Repeated stringification is deterministic
        assert_eq!(stringify_error(Some(&error)), text);
    }

    #[test]
    fn test_stringify_structured_error_with_message() {
        let error = ErrorValue::Failure(
            FailureError::new("conference.failed", false).with_message("members only"),
        );
        assert_eq!(stringify_error(Some(&error)), "conference.failed: members only");
    }
}
