//! # Request Dispatch
//!
//! Maps a route name and JSON body to the matching formula and back to a
//! JSON response. This is the whole contract a request layer (HTTP handler,
//! CLI, message queue consumer) needs:
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | success | 200 | the `*Result` struct |
//! | `InvalidInput`, malformed JSON | 400 | `{ "error", "message" }` |
//! | unknown route | 404 | `{ "error", "message" }` |
//! | `DivisionByZero`, `InvalidDomain` | 422 | `{ "error", "message" }` |
//!
//! ## Example
//!
//! ```rust
//! use vent_core::dispatch::handle_request;
//! use vent_core::normalize::InputPolicy;
//!
//! let response = handle_request(
//!     "q-from-ach",
//!     r#"{"ACH": 2, "V": 100, "delta_T": 5}"#,
//!     InputPolicy::Strict,
//! );
//! assert_eq!(response.status, 200);
//! assert!((response.body["Q"].as_f64().unwrap() - 335.0).abs() < 1e-9);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::calculations::{
    by_element, effective_area, q_from_ach, shade_factor, solar_heat_gain, volume_air_forces,
    volume_air_heat_gain, window_opening, Formula,
};
use crate::errors::{CalcError, CalcResult};
use crate::normalize::{FieldReader, FromFields, InputPolicy};

/// Status and JSON body for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP-style status code
    pub status: u16,
    /// Result struct or `{error, message}`
    pub body: Value,
}

impl ApiResponse {
    /// 200 response
    pub fn ok(body: Value) -> Self {
        ApiResponse { status: 200, body }
    }

    /// Error response derived from a [`CalcError`]
    pub fn from_error(err: &CalcError) -> Self {
        ApiResponse {
            status: err.http_status(),
            body: error_body(err),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `{error, message}` body for a failed request
pub fn error_body(err: &CalcError) -> Value {
    json!({
        "error": err.error_code(),
        "message": err.to_string(),
    })
}

fn run<I, R, F>(body: &Value, policy: InputPolicy, calculate: F) -> CalcResult<Value>
where
    I: FromFields,
    R: Serialize,
    F: Fn(&I) -> CalcResult<R>,
{
    let reader = FieldReader::new(body, policy)?;
    let input = I::from_fields(&reader)?;
    let result = calculate(&input)?;
    serde_json::to_value(result).map_err(CalcError::serialization)
}

/// Evaluate one formula against a parsed JSON body.
pub fn evaluate(formula: Formula, body: &Value, policy: InputPolicy) -> CalcResult<Value> {
    debug!("evaluating {} ({:?} input)", formula, policy);
    match formula {
        Formula::ByElement => run(body, policy, by_element::calculate),
        Formula::QFromAch => run(body, policy, q_from_ach::calculate),
        Formula::SolarHeatGain => run(body, policy, solar_heat_gain::calculate),
        Formula::VolumeAirHeatGain => run(body, policy, volume_air_heat_gain::calculate),
        Formula::VolumeAirForces => run(body, policy, volume_air_forces::calculate),
        Formula::WindowCalculations => run(body, policy, window_opening::calculate),
        Formula::EffectiveArea => run(body, policy, effective_area::calculate),
        Formula::ShadeFactor => run(body, policy, shade_factor::calculate),
    }
}

/// Evaluate a raw request: route name plus JSON text.
pub fn handle_request(route: &str, body: &str, policy: InputPolicy) -> ApiResponse {
    let outcome = route
        .parse::<Formula>()
        .and_then(|formula| {
            let parsed: Value = serde_json::from_str(body).map_err(CalcError::serialization)?;
            evaluate(formula, &parsed, policy)
        });

    match outcome {
        Ok(result) => ApiResponse::ok(result),
        Err(err) => {
            warn!("rejected {} request: {}", route, err);
            ApiResponse::from_error(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_dispatches() {
        let bodies = [
            (Formula::ByElement, json!({ "elements": [{ "U": 2, "A": 3 }, { "U": 1, "A": 5 }], "delta_T": 10 })),
            (Formula::QFromAch, json!({ "ACH": 2, "V": 100, "delta_T": 5 })),
            (Formula::SolarHeatGain, json!({ "area": 10, "SHGC": 0.4, "projection_factor": 0.8, "solar_irradiation": 500 })),
            (Formula::VolumeAirHeatGain, json!({ "Ks": 1000, "Kl": 100, "t": 10, "h": 10, "wo": 0.012, "wi": 0.010 })),
            (Formula::VolumeAirForces, json!({ "A_inlet": 2, "h": 4, "t_i": 24, "t_o": 20, "A_smaller": 1, "V": 6000 })),
            (Formula::WindowCalculations, json!({ "V_room": 120, "n_ach": 6, "K": 0.6, "V": 100, "equal_opening": true })),
            (Formula::EffectiveArea, json!({ "V_room": 120, "n_ach": 6, "v_wind": 2.5 })),
            (Formula::ShadeFactor, json!({ "heat_gain_shading": 30, "heat_gain_clear_glass": 120 })),
        ];
        assert_eq!(bodies.len(), Formula::ALL.len());

        for (formula, body) in bodies {
            let result = evaluate(formula, &body, InputPolicy::Strict);
            assert!(result.is_ok(), "{} failed: {:?}", formula, result);
        }
    }

    #[test]
    fn test_success_response() {
        let response = handle_request(
            "by-element",
            r#"{"elements": [{"U": 2, "A": 3}, {"U": 1, "A": 5}], "delta_T": 10}"#,
            InputPolicy::Strict,
        );
        assert!(response.is_success());
        assert_eq!(response.body, json!({ "elements_UA": [6.0, 5.0], "Q_total": 110.0 }));
    }

    #[test]
    fn test_window_calculations_response() {
        let response = handle_request(
            "window-calculations",
            r#"{"V_room": 120, "n_ach": 6, "K": 0.6, "V": 100, "equal_opening": true}"#,
            InputPolicy::Strict,
        );
        assert_eq!(response.status, 200);
        assert_eq!(response.body["Q"], json!(720.0));
        let a = response.body["A"].as_f64().unwrap();
        assert!((a - 12.0).abs() < 1e-12);
        assert_eq!(response.body["Ai"], response.body["Ao"]);
    }

    #[test]
    fn test_invalid_input_is_400() {
        let response = handle_request("q-from-ach", r#"{"ACH": "x", "V": 100, "delta_T": 5}"#, InputPolicy::Strict);
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "INVALID_INPUT");
        assert!(response.body["message"].as_str().unwrap().contains("ACH"));
    }

    #[test]
    fn test_malformed_json_is_400() {
        let response = handle_request("q-from-ach", "{not json", InputPolicy::Strict);
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_unknown_route_is_404() {
        let response = handle_request("upload-epw", "{}", InputPolicy::Strict);
        assert_eq!(response.status, 404);
        assert_eq!(response.body["error"], "UNKNOWN_FORMULA");
    }

    #[test]
    fn test_formula_errors_are_422() {
        let response = handle_request(
            "volume-air-heat-gain",
            r#"{"Ks": 1000, "Kl": 100, "t": 0, "h": 10, "wo": 0.012, "wi": 0.010}"#,
            InputPolicy::Strict,
        );
        assert_eq!(response.status, 422);
        assert_eq!(response.body["error"], "DIVISION_BY_ZERO");

        let response = handle_request(
            "volume-air-forces",
            r#"{"A_inlet": 2, "h": 4, "t_i": 10, "t_o": 20, "A_smaller": 1, "V": 6000}"#,
            InputPolicy::Strict,
        );
        assert_eq!(response.status, 422);
        assert_eq!(response.body["error"], "INVALID_DOMAIN");
    }

    #[test]
    fn test_out_of_range_arithmetic_is_422() {
        let cases = [
            (
                "window-calculations",
                r#"{"V_room": 120, "n_ach": 6, "K": 1e-200, "V": 1e-200, "equal_opening": true}"#,
                "DIVISION_BY_ZERO",
            ),
            (
                "effective-area",
                r#"{"V_room": 120, "n_ach": 6, "v_wind": 1e-200, "K": 1e-200}"#,
                "DIVISION_BY_ZERO",
            ),
            (
                "volume-air-heat-gain",
                r#"{"Ks": 1e10, "Kl": 100, "t": 1e-310, "h": 10, "wo": 0.012, "wi": 0.010}"#,
                "INVALID_DOMAIN",
            ),
        ];

        for (route, body, code) in cases {
            let response = handle_request(route, body, InputPolicy::Strict);
            assert_eq!(response.status, 422, "{} answered {:?}", route, response.body);
            assert_eq!(response.body["error"], code);
        }
    }

    #[test]
    fn test_success_bodies_have_no_nulls() {
        let body = json!({ "V_room": 1e300, "n_ach": 1, "K": 1e-10, "V": 1e-10 });
        let result = evaluate(Formula::WindowCalculations, &body, InputPolicy::Strict);
        assert!(result.is_err());

        let body = json!({ "V_room": 120, "n_ach": 6, "K": 0.6, "V": 100 });
        let result = evaluate(Formula::WindowCalculations, &body, InputPolicy::Strict).unwrap();
        for key in ["Q", "A", "Ai", "Ao"] {
            assert!(result[key].is_f64(), "{} is {:?}", key, result[key]);
        }
    }

    #[test]
    fn test_lenient_still_reports_formula_errors() {
        // Empty form: everything coerces to zero, t = 0 still divides by zero
        let response = handle_request("volume-air-heat-gain", "{}", InputPolicy::Lenient);
        assert_eq!(response.status, 422);

        let response = handle_request("q-from-ach", r#"{"ACH": "2", "V": "abc", "delta_T": 5}"#, InputPolicy::Lenient);
        assert_eq!(response.status, 200);
        assert_eq!(response.body["Q"], json!(0.0));
    }

    #[test]
    fn test_idempotent_and_roundtrip() {
        let body = json!({ "area": 7.3, "SHGC": 0.37, "projection_factor": 0.83, "solar_irradiation": 612.5 });
        let first = evaluate(Formula::SolarHeatGain, &body, InputPolicy::Strict).unwrap();
        let second = evaluate(Formula::SolarHeatGain, &body, InputPolicy::Strict).unwrap();
        assert_eq!(first, second);

        let text = serde_json::to_string(&first).unwrap();
        let back: solar_heat_gain::SolarHeatGainResult = serde_json::from_str(&text).unwrap();
        let direct: solar_heat_gain::SolarHeatGainResult = serde_json::from_value(first).unwrap();
        assert_eq!(back.q_solar.to_bits(), direct.q_solar.to_bits());
        assert_eq!(back.effective_shgc.to_bits(), direct.effective_shgc.to_bits());
    }
}
