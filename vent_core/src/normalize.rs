//! # Numeric Input Normalization
//!
//! Converts loosely-typed JSON request bodies into the typed `*Input` structs.
//! Two policies exist and the caller always picks one explicitly:
//!
//! - [`InputPolicy::Lenient`] - interactive recompute. Malformed or missing
//!   numbers become `0` (the `parseFloat(value) || 0` convention of form
//!   inputs); absent fields with a documented default take that default.
//! - [`InputPolicy::Strict`] - API boundary. Anything that is not a finite
//!   number is rejected with [`CalcError::InvalidInput`] naming the field.
//!
//! The formula functions themselves never coerce; they only see typed input.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use vent_core::normalize::{FieldReader, InputPolicy};
//!
//! let body = json!({ "ACH": "2.5 per hour", "V": null });
//!
//! let lenient = FieldReader::new(&body, InputPolicy::Lenient).unwrap();
//! assert_eq!(lenient.number("ACH").unwrap(), 2.5);
//! assert_eq!(lenient.number("V").unwrap(), 0.0);
//!
//! let strict = FieldReader::new(&body, InputPolicy::Strict).unwrap();
//! assert!(strict.number("ACH").is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{CalcError, CalcResult};

/// How request fields are turned into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Reject anything that is not a finite number (API boundary)
    #[default]
    Strict,
    /// Coerce malformed input to zero (interactive forms)
    Lenient,
}

/// Parse the longest leading decimal number of `text`, or `0`.
///
/// Leading whitespace is skipped, then an optional sign, digits, an optional
/// fraction and an optional exponent are consumed. Trailing garbage is
/// ignored. Results that are not finite, and negative zero, become `0`.
///
/// ```rust
/// use vent_core::normalize::parse_lenient;
///
/// assert_eq!(parse_lenient("  12.5 m3"), 12.5);
/// assert_eq!(parse_lenient("1e3"), 1000.0);
/// assert_eq!(parse_lenient("abc"), 0.0);
/// ```
pub fn parse_lenient(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    let candidate = s[..end].trim_end_matches('.');
    match candidate.parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// Lenient coercion of a single JSON value to a finite number.
///
/// Numbers pass through, strings go through [`parse_lenient`], everything
/// else (missing, `null`, booleans, arrays, objects) becomes `0`.
pub fn coerce_lenient(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() && v != 0.0 => v,
            _ => 0.0,
        },
        Some(Value::String(s)) => parse_lenient(s),
        _ => 0.0,
    }
}

/// Strict validation of a single JSON value as a finite number.
///
/// Accepts JSON numbers and strings whose whole trimmed content is a finite
/// number. Everything else is an [`CalcError::InvalidInput`] naming `field`.
pub fn validate_strict(field: &str, value: Option<&Value>) -> CalcResult<f64> {
    match value {
        None => Err(CalcError::missing_field(field)),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::invalid_input(field, n.to_string(), "Value must be a finite number")),
        },
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::invalid_input(field, s.clone(), "Value is not a finite number")),
        },
        Some(other) => Err(CalcError::invalid_input(field, other.to_string(), "Expected a number")),
    }
}

fn coerce_flag_lenient(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Reads named fields out of one JSON object under a given policy.
///
/// Nested readers (list items) carry a path prefix so errors point at
/// `elements[1].U` rather than just `U`.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    object: Option<&'a Map<String, Value>>,
    policy: InputPolicy,
    prefix: String,
}

impl<'a> FieldReader<'a> {
    /// Create a reader over a request body.
    ///
    /// Under the strict policy the body must be a JSON object; the lenient
    /// policy treats any other body as an object with no fields.
    pub fn new(body: &'a Value, policy: InputPolicy) -> CalcResult<Self> {
        Self::scoped(body, policy, String::new(), "body")
    }

    fn scoped(body: &'a Value, policy: InputPolicy, prefix: String, label: &str) -> CalcResult<Self> {
        let object = match body.as_object() {
            Some(map) => Some(map),
            None if policy == InputPolicy::Lenient => None,
            None => {
                return Err(CalcError::invalid_input(
                    label,
                    body.to_string(),
                    "Expected a JSON object",
                ))
            }
        };
        Ok(FieldReader { object, policy, prefix })
    }

    /// Policy this reader applies
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    fn path(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.and_then(|map| map.get(field))
    }

    /// Read a required number.
    pub fn number(&self, field: &str) -> CalcResult<f64> {
        match self.policy {
            InputPolicy::Lenient => Ok(coerce_lenient(self.get(field))),
            InputPolicy::Strict => validate_strict(&self.path(field), self.get(field)),
        }
    }

    /// Read a number that falls back to `default` when the field is absent.
    pub fn number_or(&self, field: &str, default: f64) -> CalcResult<f64> {
        match self.get(field) {
            None => Ok(default),
            Some(_) => self.number(field),
        }
    }

    /// Read a number that may be absent or `null`.
    pub fn optional_number(&self, field: &str) -> CalcResult<Option<f64>> {
        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.number(field).map(Some),
        }
    }

    /// Read a boolean that may be absent or `null`.
    pub fn optional_flag(&self, field: &str) -> CalcResult<Option<bool>> {
        match (self.get(field), self.policy) {
            (None | Some(Value::Null), _) => Ok(None),
            (Some(Value::Bool(b)), _) => Ok(Some(*b)),
            (Some(other), InputPolicy::Lenient) => Ok(coerce_flag_lenient(other)),
            (Some(other), InputPolicy::Strict) => Err(CalcError::invalid_input(
                self.path(field),
                other.to_string(),
                "Expected true or false",
            )),
        }
    }

    /// Read a boolean that falls back to `default` when absent or unreadable.
    pub fn flag_or(&self, field: &str, default: bool) -> CalcResult<bool> {
        Ok(self.optional_flag(field)?.unwrap_or(default))
    }

    /// Read a list of objects, one nested reader per item.
    pub fn list(&self, field: &str) -> CalcResult<Vec<FieldReader<'a>>> {
        let items = match (self.get(field), self.policy) {
            (Some(Value::Array(items)), _) => items,
            (_, InputPolicy::Lenient) => return Ok(Vec::new()),
            (None, InputPolicy::Strict) => return Err(CalcError::missing_field(self.path(field))),
            (Some(other), InputPolicy::Strict) => {
                return Err(CalcError::invalid_input(
                    self.path(field),
                    other.to_string(),
                    "Expected a list",
                ))
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let label = format!("{}{}[{}]", self.prefix, field, i);
                let prefix = format!("{}.", label);
                FieldReader::scoped(item, self.policy, prefix, &label)
            })
            .collect()
    }
}

/// Typed formula inputs that can be read from a request body.
pub trait FromFields: Sized {
    /// Build the input from a reader; the policy decides how malformed fields are treated.
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self>;

    /// Convenience: read directly from a JSON body.
    fn from_json(body: &Value, policy: InputPolicy) -> CalcResult<Self> {
        Self::from_fields(&FieldReader::new(body, policy)?)
    }
}
