//! # Ventilation by Thermal and Wind Forces
//!
//! Natural ventilation through a pair of openings driven by the stack effect
//! (indoor/outdoor temperature difference over height `h`) and by wind. The
//! two flows are combined as a vector sum.
//!
//! ## Assumptions
//!
//! - Stack flow requires `h × (t_i − t_o) ≥ 0`. An inverted stack (warmer
//!   outside with positive height) is a caller input error and is rejected
//!   rather than clamped.
//! - Wind speed `V` is in m/h; all flows are returned in m³/min.
//! - `t_o` and `V` can be pre-populated from a weather sample, see
//!   [`crate::weather::WeatherSample::apply_to`].
//!
//! ## Example
//!
//! ```rust
//! use vent_core::calculations::volume_air_forces::{calculate, VolumeAirForcesInput};
//!
//! let input = VolumeAirForcesInput {
//!     a_inlet: 2.0,
//!     h: 4.0,
//!     t_i: 24.0,
//!     t_o: 20.0,
//!     a_smaller: 1.0,
//!     v: 6000.0,
//!     k: 0.6,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.qt - 56.0).abs() < 1e-9);
//! assert!((result.qw - 60.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::ventilation::{combined_force_flow, thermal_force_flow, wind_force_flow};
use crate::errors::{ensure_finite, ensure_output, CalcError, CalcResult};
use crate::normalize::{FieldReader, FromFields};

/// Route name of this formula
pub const FORMULA: &str = "volume-air-forces";

/// Default opening effectiveness for wind-driven flow
pub const DEFAULT_EFFECTIVENESS: f64 = 0.6;

fn default_effectiveness() -> f64 {
    DEFAULT_EFFECTIVENESS
}

/// Input parameters for combined force ventilation.
///
/// ## JSON Example
///
/// ```json
/// { "A_inlet": 2.0, "h": 4.0, "t_i": 24.0, "t_o": 20.0, "A_smaller": 1.0, "V": 6000.0, "K": 0.6 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAirForcesInput {
    /// Free area of the inlet opening (m²)
    #[serde(rename = "A_inlet")]
    pub a_inlet: f64,

    /// Vertical distance between inlet and outlet (m)
    pub h: f64,

    /// Indoor temperature at height h (°C)
    pub t_i: f64,

    /// Outdoor temperature (°C)
    pub t_o: f64,

    /// Area of the smaller opening (m²)
    #[serde(rename = "A_smaller")]
    pub a_smaller: f64,

    /// Outdoor wind speed (m/h)
    #[serde(rename = "V")]
    pub v: f64,

    /// Effectiveness of openings (-)
    #[serde(rename = "K", default = "default_effectiveness")]
    pub k: f64,
}

impl VolumeAirForcesInput {
    /// Validate input parameters, stack radicand included.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("A_inlet", self.a_inlet)?;
        ensure_finite("h", self.h)?;
        ensure_finite("t_i", self.t_i)?;
        ensure_finite("t_o", self.t_o)?;
        ensure_finite("A_smaller", self.a_smaller)?;
        ensure_finite("V", self.v)?;
        ensure_finite("K", self.k)?;

        let radicand = self.stack_radicand();
        if radicand < 0.0 {
            return Err(CalcError::invalid_domain(
                FORMULA,
                "h*(t_i-t_o)",
                radicand.to_string(),
                "Stack effect term must be non-negative; check which temperature is warmer",
            ));
        }
        Ok(())
    }

    /// h × (t_i − t_o), the term under the stack-effect square root
    pub fn stack_radicand(&self) -> f64 {
        self.h * (self.t_i - self.t_o)
    }
}

impl FromFields for VolumeAirForcesInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(VolumeAirForcesInput {
            a_inlet: reader.number("A_inlet")?,
            h: reader.number("h")?,
            t_i: reader.number("t_i")?,
            t_o: reader.number("t_o")?,
            a_smaller: reader.number("A_smaller")?,
            v: reader.number("V")?,
            k: reader.number_or("K", DEFAULT_EFFECTIVENESS)?,
        })
    }
}

/// Results from combined force ventilation (all m³/min).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAirForcesResult {
    /// Flow due to thermal (stack) forces
    #[serde(rename = "Qt")]
    pub qt: f64,

    /// Flow due to wind forces
    #[serde(rename = "Qw")]
    pub qw: f64,

    /// Resultant combined flow
    #[serde(rename = "Q_combined")]
    pub q_combined: f64,
}

impl VolumeAirForcesResult {
    /// Whether the stack effect dominates the wind effect
    pub fn thermal_dominant(&self) -> bool {
        self.qt > self.qw
    }
}

/// Stack-driven flow alone (m³/min), with the domain check.
pub fn thermal_flow(input: &VolumeAirForcesInput) -> CalcResult<f64> {
    input.validate()?;
    stack_component(input)
}

/// Wind-driven flow alone (m³/min).
///
/// Only `K`, `A_smaller` and `V` are checked; the stack term plays no part.
pub fn wind_flow(input: &VolumeAirForcesInput) -> CalcResult<f64> {
    ensure_finite("K", input.k)?;
    ensure_finite("A_smaller", input.a_smaller)?;
    ensure_finite("V", input.v)?;
    wind_component(input)
}

fn stack_component(input: &VolumeAirForcesInput) -> CalcResult<f64> {
    ensure_output(FORMULA, "Qt", thermal_force_flow(input.a_inlet, input.h, input.t_i, input.t_o))
}

fn wind_component(input: &VolumeAirForcesInput) -> CalcResult<f64> {
    ensure_output(FORMULA, "Qw", wind_force_flow(input.k, input.a_smaller, input.v))
}

/// Calculate thermal, wind and combined ventilation flows.
///
/// # Returns
///
/// * `Ok(VolumeAirForcesResult)` - The three flows
/// * `Err(CalcError::InvalidDomain)` - If `h × (t_i − t_o) < 0` or a flow overflows
pub fn calculate(input: &VolumeAirForcesInput) -> CalcResult<VolumeAirForcesResult> {
    input.validate()?;

    let qt = stack_component(input)?;
    let qw = wind_component(input)?;

    Ok(VolumeAirForcesResult {
        qt,
        qw,
        q_combined: ensure_output(FORMULA, "Q_combined", combined_force_flow(qw, qt))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::InputPolicy;
    use serde_json::json;

    fn test_input() -> VolumeAirForcesInput {
        VolumeAirForcesInput {
            a_inlet: 2.0,
            h: 4.0,
            t_i: 24.0,
            t_o: 20.0,
            a_smaller: 1.0,
            v: 6000.0,
            k: 0.6,
        }
    }

    #[test]
    fn test_combined_flow() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.qt - 56.0).abs() < 1e-9);
        assert!((result.qw - 60.0).abs() < 1e-9);
        let expected = (56.0_f64 * 56.0 + 60.0 * 60.0).sqrt();
        assert!((result.q_combined - expected).abs() < 1e-9);
        assert!(!result.thermal_dominant());
    }

    #[test]
    fn test_component_helpers_match() {
        let input = test_input();
        let result = calculate(&input).unwrap();
        assert_eq!(thermal_flow(&input).unwrap(), result.qt);
        assert_eq!(wind_flow(&input).unwrap(), result.qw);
    }

    #[test]
    fn test_inverted_stack_rejected() {
        let mut input = test_input();
        input.t_i = 18.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert!(thermal_flow(&input).is_err());
    }

    #[test]
    fn test_wind_flow_ignores_stack_term() {
        let mut input = test_input();
        input.t_i = 10.0;
        input.t_o = 20.0;
        assert!((wind_flow(&input).unwrap() - 60.0).abs() < 1e-9);

        input.v = f64::NAN;
        assert_eq!(wind_flow(&input).unwrap_err().field(), Some("V"));
    }

    #[test]
    fn test_overflowing_flow_rejected() {
        let mut input = test_input();
        input.a_smaller = 1e300;
        input.v = 1e300;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert_eq!(err.field(), Some("Qw"));
    }

    #[test]
    fn test_negative_height_with_inverted_temps_is_valid() {
        let mut input = test_input();
        input.h = -4.0;
        input.t_i = 16.0;
        let result = calculate(&input).unwrap();
        assert!((result.qt - 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_wind_no_stack() {
        let mut input = test_input();
        input.t_i = input.t_o;
        input.v = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.qt, 0.0);
        assert_eq!(result.qw, 0.0);
        assert_eq!(result.q_combined, 0.0);
    }

    #[test]
    fn test_k_default() {
        let body = json!({ "A_inlet": 2, "h": 4, "t_i": 24, "t_o": 20, "A_smaller": 1, "V": 6000 });
        let input = VolumeAirForcesInput::from_json(&body, InputPolicy::Strict).unwrap();
        assert_eq!(input, test_input());
    }

    #[test]
    fn test_json_roundtrip_exact() {
        let input = VolumeAirForcesInput {
            a_inlet: 1.37,
            h: 3.3,
            t_i: 23.1,
            t_o: 17.4,
            a_smaller: 0.83,
            v: 7310.0,
            k: 0.55,
        };
        let result = calculate(&input).unwrap();
        let text = serde_json::to_string(&result).unwrap();
        let back: VolumeAirForcesResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.q_combined.to_bits(), result.q_combined.to_bits());
        assert_eq!(back, result);
    }
}
