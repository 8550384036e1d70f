//! Presentation-layer adapters.
//!
//! Error-shaping policy lives here, decoupled from rendering code: the
//! validation screen calls [`to_validation_result`] instead of embedding its
//! own error mapping, and [`error_message`] turns any caught value into a
//! human-readable string.

use std::any::Any;

use crate::types::ValidationResult;
use crate::Error;

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Human-readable message for any caught failure value.
///
/// Returns the message of a recognized error shape ([`Error`], `String`,
/// `&str`) and a generic fallback for anything else.
pub fn error_message(err: &dyn Any) -> String {
    if let Some(e) = err.downcast_ref::<Error>() {
        return e.to_string();
    }
    if let Some(s) = err.downcast_ref::<String>() {
        return s.clone();
    }
    if let Some(s) = err.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    UNKNOWN_ERROR.to_string()
}

/// Map a failed validation call into a domain-shaped "invalid" result, so a
/// consumer never has to render a raw failure state.
pub fn to_validation_result(err: &Error) -> ValidationResult {
    ValidationResult {
        is_valid: false,
        analysis: format!("Error: {err}"),
        explanation: "Please try again.".to_string(),
    }
}
