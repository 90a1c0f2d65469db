//! # Error Types
//!
//! Structured error types for vent_core. Every failure names the formula and
//! field involved so that a caller (human, script or LLM) can fix the request
//! without reading the source.
//!
//! ## Example
//!
//! ```rust
//! use vent_core::errors::{CalcError, CalcResult};
//!
//! fn checked_divide(formula: &str, field: &str, num: f64, den: f64) -> CalcResult<f64> {
//!     if den == 0.0 {
//!         return Err(CalcError::division_by_zero(formula, field));
//!     }
//!     Ok(num / den)
//! }
//!
//! let err = checked_divide("volume-air-heat-gain", "t", 1.0, 0.0).unwrap_err();
//! assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for vent_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for formula evaluation.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-numeric, non-finite, missing, wrong type)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A formula denominator evaluated to exactly zero
    #[error("Division by zero in {formula}: '{field}' must be non-zero")]
    DivisionByZero { formula: String, field: String },

    /// An operand lies outside the domain of the formula (e.g. sqrt of a negative)
    #[error("Invalid domain in {formula}: '{field}' = {value} - {reason}")]
    InvalidDomain {
        formula: String,
        field: String,
        value: String,
        reason: String,
    },

    /// No formula is registered under the requested name
    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error for a required field that was not supplied
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: "<missing>".to_string(),
            reason: "Required field is missing".to_string(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(formula: impl Into<String>, field: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            formula: formula.into(),
            field: field.into(),
        }
    }

    /// Create an InvalidDomain error
    pub fn invalid_domain(
        formula: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidDomain {
            formula: formula.into(),
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(name: impl Into<String>) -> Self {
        CalcError::UnknownFormula { name: name.into() }
    }

    /// Create a SerializationError from any displayable error
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        CalcError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. }
            | CalcError::DivisionByZero { field, .. }
            | CalcError::InvalidDomain { field, .. } => Some(field),
            CalcError::UnknownFormula { .. } | CalcError::SerializationError { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidDomain { .. } => "INVALID_DOMAIN",
            CalcError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// HTTP status a request layer should answer with
    pub fn http_status(&self) -> u16 {
        match self {
            CalcError::InvalidInput { .. } | CalcError::SerializationError { .. } => 400,
            CalcError::UnknownFormula { .. } => 404,
            CalcError::DivisionByZero { .. } | CalcError::InvalidDomain { .. } => 422,
        }
    }
}

/// Reject NaN and infinities for a typed input field.
pub(crate) fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

/// Reject a denominator that evaluates to exactly zero, product underflow included.
pub(crate) fn ensure_nonzero(formula: &str, field: &str, denominator: f64) -> CalcResult<f64> {
    if denominator == 0.0 {
        return Err(CalcError::division_by_zero(formula, field));
    }
    Ok(denominator)
}

/// Reject a computed output that overflowed to infinity or became NaN.
pub(crate) fn ensure_output(formula: &str, field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_domain(
            formula,
            field,
            value.to_string(),
            "Result is not a finite number; inputs are out of range",
        ))
    }
}
