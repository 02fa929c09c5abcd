//! Error types for capval.
//!
//! Arithmetic edge cases that would otherwise surface as infinities or NaNs
//! (an all-zero capital structure, an empty projection) are classified here so
//! callers can branch on a known error kind.

use thiserror::Error;

/// The main error type for capval operations.
#[derive(Debug, Error)]
pub enum CapvalError {
    /// Equity and debt market values sum to zero, so WACC weights are undefined.
    #[error("capital structure must have positive total value")]
    ZeroCapitalStructure,

    /// WACC at or below -100%, so `(1 + wacc)^t` cannot discount.
    #[error("discount rate must be greater than -100%, got WACC {0}")]
    InvalidDiscountRate(f64),

    /// No projection years were supplied.
    #[error("at least one projection year is required")]
    NoProjectionYears,

    /// An input value failed boundary validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Report metadata carried a blank project name.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The document packager failed to produce the report bytes.
    #[error("Report serialization failed: {0}")]
    ReportSerialization(String),

    /// I/O failure at the file boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for capval operations.
pub type Result<T> = std::result::Result<T, CapvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CapvalError::ZeroCapitalStructure.to_string(),
            "capital structure must have positive total value"
        );

        let err = CapvalError::InvalidInput("beta must be non-negative".to_string());
        assert_eq!(err.to_string(), "Invalid input: beta must be non-negative");
    }

    #[test]
    fn test_invalid_discount_rate_display() {
        let err = CapvalError::InvalidDiscountRate(-1.0);
        assert_eq!(
            err.to_string(),
            "discount rate must be greater than -100%, got WACC -1"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CapvalError = io.into();
        assert!(matches!(err, CapvalError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = CapvalError::from(json_err);
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
