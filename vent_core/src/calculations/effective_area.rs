//! # Optimised Window Opening (Dashboard)
//!
//! Required effective opening area from room geometry, air change rate and
//! a wind speed given in **m/s**. Not to be confused with
//! [`super::window_opening`], whose wind speed is in m/h.

use serde::{Deserialize, Serialize};

use crate::equations::ventilation::{airflow_from_ach, opening_area_wind_mps};
use crate::errors::{ensure_finite, ensure_nonzero, ensure_output, CalcError, CalcResult};
use crate::normalize::{FieldReader, FromFields};
use crate::units::SECONDS_PER_HOUR;

/// Route name of this formula
pub const FORMULA: &str = "effective-area";

/// Dashboard default room volume (m³)
pub const DEFAULT_ROOM_VOLUME: f64 = 120.0;

/// Dashboard default air change rate (1/h)
pub const DEFAULT_ACH: f64 = 6.0;

/// Dashboard default wind speed (m/s)
pub const DEFAULT_WIND_MPS: f64 = 2.5;

/// Dashboard default opening coefficient
pub const DEFAULT_OPENING_COEFF: f64 = 0.65;

fn default_opening_coeff() -> f64 {
    DEFAULT_OPENING_COEFF
}

/// Input parameters for the dashboard effective area.
///
/// ## JSON Example
///
/// ```json
/// { "V_room": 120.0, "n_ach": 6.0, "v_wind": 2.5, "K": 0.65 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveAreaInput {
    /// Room volume (m³)
    #[serde(rename = "V_room")]
    pub v_room: f64,

    /// Air changes per hour (1/h)
    pub n_ach: f64,

    /// Wind speed (m/s)
    pub v_wind: f64,

    /// Opening coefficient (-)
    #[serde(rename = "K", default = "default_opening_coeff")]
    pub k: f64,
}

impl Default for EffectiveAreaInput {
    fn default() -> Self {
        EffectiveAreaInput {
            v_room: DEFAULT_ROOM_VOLUME,
            n_ach: DEFAULT_ACH,
            v_wind: DEFAULT_WIND_MPS,
            k: DEFAULT_OPENING_COEFF,
        }
    }
}

impl EffectiveAreaInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("V_room", self.v_room)?;
        ensure_finite("n_ach", self.n_ach)?;
        ensure_finite("v_wind", self.v_wind)?;
        ensure_finite("K", self.k)?;
        if self.v_wind == 0.0 {
            return Err(CalcError::division_by_zero(FORMULA, "v_wind"));
        }
        if self.k == 0.0 {
            return Err(CalcError::division_by_zero(FORMULA, "K"));
        }
        ensure_nonzero(FORMULA, "3600*v_wind*K", SECONDS_PER_HOUR * self.v_wind * self.k)?;
        Ok(())
    }
}

impl FromFields for EffectiveAreaInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(EffectiveAreaInput {
            v_room: reader.number("V_room")?,
            n_ach: reader.number("n_ach")?,
            v_wind: reader.number("v_wind")?,
            k: reader.number_or("K", DEFAULT_OPENING_COEFF)?,
        })
    }
}

/// Results from the dashboard effective area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveAreaResult {
    /// Required airflow (m³/h)
    #[serde(rename = "Q")]
    pub q: f64,

    /// Effective opening area (m²)
    #[serde(rename = "A")]
    pub a: f64,
}

/// Calculate A = V_room × n_ach / (3600 × v_wind × K).
pub fn calculate(input: &EffectiveAreaInput) -> CalcResult<EffectiveAreaResult> {
    input.validate()?;
    let q = ensure_output(FORMULA, "Q", airflow_from_ach(input.v_room, input.n_ach))?;
    let a = ensure_output(FORMULA, "A", opening_area_wind_mps(q, input.v_wind, input.k))?;
    Ok(EffectiveAreaResult { q, a })
}

/// Effective area from bare arguments.
///
/// ```rust
/// use vent_core::calculations::effective_area::compute_effective_area;
///
/// let a = compute_effective_area(120.0, 6.0, 2.5, 0.65).unwrap();
/// assert!((a - 0.12308).abs() < 1e-5);
/// ```
pub fn compute_effective_area(v_room: f64, n_ach: f64, v_wind_mps: f64, k: f64) -> CalcResult<f64> {
    let input = EffectiveAreaInput {
        v_room,
        n_ach,
        v_wind: v_wind_mps,
        k,
    };
    calculate(&input).map(|r| r.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_defaults() {
        let result = calculate(&EffectiveAreaInput::default()).unwrap();
        assert_eq!(result.q, 720.0);
        assert!((result.a - 0.123_076_923).abs() < 1e-8);
    }

    #[test]
    fn test_differs_from_window_calculations() {
        // Same numbers through the m/h formula give a very different area
        use crate::calculations::window_opening::{self, WindowOpeningInput};
        let mh = window_opening::calculate(&WindowOpeningInput::equal(120.0, 6.0, 0.65, 2.5)).unwrap();
        let mps = calculate(&EffectiveAreaInput::default()).unwrap();
        assert!((mh.a.unwrap() / mps.a - 3600.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_wind() {
        let err = compute_effective_area(120.0, 6.0, 0.0, 0.65).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(FORMULA, "v_wind"));
        let err = compute_effective_area(120.0, 6.0, 2.5, 0.0).unwrap_err();
        assert_eq!(err.field(), Some("K"));
    }

    #[test]
    fn test_underflowing_denominator() {
        let err = compute_effective_area(120.0, 6.0, 1e-200, 1e-200).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(FORMULA, "3600*v_wind*K"));
    }

    #[test]
    fn test_overflowing_area_rejected() {
        let err = compute_effective_area(1e300, 1.0, 1e-10, 1e-10).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert_eq!(err.field(), Some("A"));
    }

    #[test]
    fn test_json_roundtrip_exact() {
        let input = EffectiveAreaInput {
            v_room: 97.0,
            n_ach: 4.3,
            v_wind: 3.1,
            k: 0.65,
        };
        let result = calculate(&input).unwrap();
        let text = serde_json::to_string(&result).unwrap();
        let back: EffectiveAreaResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.a.to_bits(), result.a.to_bits());
        assert_eq!(back, result);
    }
}
