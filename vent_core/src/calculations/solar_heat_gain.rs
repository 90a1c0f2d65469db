//! # Equivalent Solar Heat Gain
//!
//! Heat admitted through glazing, with the glass SHGC reduced by an external
//! projection factor. The reduced coefficient is part of the result because
//! callers display it alongside the gain.
//!
//! ## Example
//!
//! ```rust
//! use vent_core::calculations::solar_heat_gain::{calculate, SolarHeatGainInput};
//!
//! let input = SolarHeatGainInput {
//!     area: 10.0,
//!     shgc: 0.4,
//!     projection_factor: 0.8,
//!     solar_irradiation: 500.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.effective_shgc - 0.32).abs() < 1e-12);
//! assert!((result.q_solar - 1600.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::heat::{effective_shgc, solar_heat_gain};
use crate::errors::{ensure_finite, ensure_output, CalcResult};
use crate::normalize::{FieldReader, FromFields};

/// Route name of this formula
pub const FORMULA: &str = "solar-heat-gain";

/// Projection factor when no external shading is present
pub const NO_PROJECTION: f64 = 1.0;

fn default_projection_factor() -> f64 {
    NO_PROJECTION
}

/// Input parameters for solar heat gain.
///
/// ## JSON Example
///
/// ```json
/// { "area": 10.0, "SHGC": 0.4, "projection_factor": 0.8, "solar_irradiation": 500.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarHeatGainInput {
    /// Glazed area (m²)
    pub area: f64,

    /// Solar heat gain coefficient of the glass (-)
    #[serde(rename = "SHGC")]
    pub shgc: f64,

    /// Reduction for external projections, 1.0 = unshaded (-)
    #[serde(default = "default_projection_factor")]
    pub projection_factor: f64,

    /// Incident solar irradiation (W/m²)
    pub solar_irradiation: f64,
}

impl SolarHeatGainInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("area", self.area)?;
        ensure_finite("SHGC", self.shgc)?;
        ensure_finite("projection_factor", self.projection_factor)?;
        ensure_finite("solar_irradiation", self.solar_irradiation)?;
        Ok(())
    }
}

impl FromFields for SolarHeatGainInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(SolarHeatGainInput {
            area: reader.number("area")?,
            shgc: reader.number("SHGC")?,
            projection_factor: reader.number_or("projection_factor", NO_PROJECTION)?,
            solar_irradiation: reader.number("solar_irradiation")?,
        })
    }
}

/// Results from the solar heat gain calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarHeatGainResult {
    /// SHGC × projection factor (-)
    #[serde(rename = "effective_SHGC")]
    pub effective_shgc: f64,

    /// Solar heat gain (W)
    #[serde(rename = "Q_solar")]
    pub q_solar: f64,
}

/// Calculate effective SHGC, then the solar gain from it.
pub fn calculate(input: &SolarHeatGainInput) -> CalcResult<SolarHeatGainResult> {
    input.validate()?;

    let effective = ensure_output(
        FORMULA,
        "effective_SHGC",
        effective_shgc(input.shgc, input.projection_factor),
    )?;
    let q_solar = ensure_output(
        FORMULA,
        "Q_solar",
        solar_heat_gain(input.area, effective, input.solar_irradiation),
    )?;

    Ok(SolarHeatGainResult {
        effective_shgc: effective,
        q_solar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::InputPolicy;
    use serde_json::json;

    #[test]
    fn test_reference_case() {
        let input = SolarHeatGainInput {
            area: 10.0,
            shgc: 0.4,
            projection_factor: 0.8,
            solar_irradiation: 500.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.effective_shgc - 0.32).abs() < 1e-12);
        assert!((result.q_solar - 1600.0).abs() < 1e-9);
    }

    #[test]
    fn test_q_solar_uses_effective_shgc() {
        let input = SolarHeatGainInput {
            area: 3.0,
            shgc: 0.55,
            projection_factor: 0.7,
            solar_irradiation: 640.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.q_solar, 3.0 * result.effective_shgc * 640.0);
    }

    #[test]
    fn test_projection_factor_default() {
        let body = json!({ "area": 2, "SHGC": 0.5, "solar_irradiation": 100 });
        let input = SolarHeatGainInput::from_json(&body, InputPolicy::Strict).unwrap();
        assert_eq!(input.projection_factor, 1.0);
        assert_eq!(calculate(&input).unwrap().q_solar, 100.0);
    }

    #[test]
    fn test_missing_field_strict() {
        let body = json!({ "area": 2, "SHGC": 0.5 });
        let err = SolarHeatGainInput::from_json(&body, InputPolicy::Strict).unwrap_err();
        assert_eq!(err.field(), Some("solar_irradiation"));
    }

    #[test]
    fn test_overflow_rejected() {
        let input = SolarHeatGainInput {
            area: 1e200,
            shgc: 0.5,
            projection_factor: 1.0,
            solar_irradiation: 1e200,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("Q_solar"));
    }

    #[test]
    fn test_json_roundtrip_exact() {
        let input = SolarHeatGainInput {
            area: 7.3,
            shgc: 0.37,
            projection_factor: 0.83,
            solar_irradiation: 612.5,
        };
        let result = calculate(&input).unwrap();
        let text = serde_json::to_string(&result).unwrap();
        let back: SolarHeatGainResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.effective_shgc.to_bits(), result.effective_shgc.to_bits());
        assert_eq!(back.q_solar.to_bits(), result.q_solar.to_bits());
    }
}
