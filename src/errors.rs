//! Error types with diagnostics using miette
//!
//! Every variant is a recoverable outcome: validation failures are meant to
//! be shown to the user next to the input field, never to abort the host.

use miette::Diagnostic;
use thiserror::Error;

use crate::render::defaults::{MAX_TERMS, MIN_TERMS};

// ============================================================================
// Render Errors
// ============================================================================

/// Errors returned by the spiral engine and its input boundary
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Please enter n.")]
    #[diagnostic(code(fibspiral::input::missing))]
    MissingInput,

    #[error("Invalid n format (use numbers only).")]
    #[diagnostic(
        code(fibspiral::input::not_a_number),
        help("n must be a whole number such as 8")
    )]
    NotANumber { input: String },

    #[error("{}", out_of_range_message(.value))]
    #[diagnostic(
        code(fibspiral::input::out_of_range),
        help("n must be between 1 and 50")
    )]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("invalid canvas: {reason}")]
    #[diagnostic(code(fibspiral::render::invalid_canvas))]
    InvalidCanvas { reason: &'static str },

    #[error("SVG serialization error: {message}")]
    #[diagnostic(code(fibspiral::render::serialization))]
    Serialization { message: String },
}

impl RenderError {
    /// Build an `OutOfRange` error for a term count outside the supported range
    pub fn out_of_range(value: i64) -> Self {
        RenderError::OutOfRange {
            value,
            min: MIN_TERMS,
            max: MAX_TERMS,
        }
    }

    /// Whether this error comes from user input rather than from the engine
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RenderError::MissingInput | RenderError::NotANumber { .. } | RenderError::OutOfRange { .. }
        )
    }
}

fn out_of_range_message(value: &i64) -> String {
    if *value < MIN_TERMS {
        format!("n must be at least {MIN_TERMS}.")
    } else {
        format!("n too large (max {MAX_TERMS}).")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_messages_name_the_violated_bound() {
        assert_eq!(RenderError::out_of_range(0).to_string(), "n must be at least 1.");
        assert_eq!(RenderError::out_of_range(-7).to_string(), "n must be at least 1.");
        assert_eq!(RenderError::out_of_range(51).to_string(), "n too large (max 50).");
    }

    #[test]
    fn validation_errors_are_classified() {
        assert!(RenderError::MissingInput.is_validation());
        assert!(RenderError::out_of_range(99).is_validation());
        assert!(
            !RenderError::Serialization {
                message: "boom".to_string()
            }
            .is_validation()
        );
    }

    #[test]
    fn diagnostic_codes_are_stable() {
        let code = RenderError::MissingInput.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("fibspiral::input::missing"));
    }
}
