//! Error types for color conversion.
//!
//! These never escape the public conversion functions: a [`ColorError`] raised
//! while rewriting a declaration is turned into a line-numbered diagnostic on
//! the [`ConversionOutcome`](crate::ConversionOutcome) and the original line is
//! kept.

use thiserror::Error;

/// Errors raised when a recognized color value cannot be reinterpreted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A component token matched the value's shape but is not a number.
    #[error("component '{token}' is not a number")]
    NotANumber { token: String },

    /// A component or computed channel is NaN or infinite.
    #[error("{component} is not a finite number ({value})")]
    NonFinite {
        component: &'static str,
        value: f64,
    },
}

impl ColorError {
    pub(crate) fn not_a_number(token: impl Into<String>) -> Self {
        Self::NotANumber {
            token: token.into(),
        }
    }

    /// Returns `value` unchanged when finite, otherwise a [`ColorError::NonFinite`].
    pub(crate) fn check_finite(component: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { component, value })
        }
    }
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_number_display_names_token() {
        let err = ColorError::not_a_number("abc");
        assert_eq!(err.to_string(), "component 'abc' is not a number");
    }

    #[test]
    fn check_finite_passes_finite_values() {
        assert_eq!(ColorError::check_finite("hue", 12.5), Ok(12.5));
    }

    #[test]
    fn check_finite_rejects_infinity() {
        let err = ColorError::check_finite("lightness", f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            ColorError::NonFinite {
                component: "lightness",
                ..
            }
        ));
        assert!(err.to_string().contains("lightness"));
    }
}
