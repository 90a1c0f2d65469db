//! # Heat Load from Air Changes
//!
//! Sensible heat carried by ventilation or infiltration air at a given air
//! change rate.
//!
//! ## Example
//!
//! ```rust
//! use vent_core::calculations::q_from_ach::{calculate, QFromAchInput};
//!
//! let input = QFromAchInput::new(2.0, 100.0, 5.0);
//! let result = calculate(&input).unwrap();
//! assert!((result.q - 335.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::heat::ach_heat_load;
use crate::errors::{ensure_finite, ensure_output, CalcResult};
use crate::normalize::{FieldReader, FromFields};
use crate::units::{AIR_DENSITY_KG_M3, AIR_SPECIFIC_HEAT_J_KGK};

/// Route name of this formula
pub const FORMULA: &str = "q-from-ach";

fn default_rho() -> f64 {
    AIR_DENSITY_KG_M3
}

fn default_cp() -> f64 {
    AIR_SPECIFIC_HEAT_J_KGK
}

/// Input parameters for the air change heat load.
///
/// ## JSON Example
///
/// ```json
/// { "ACH": 2.0, "V": 100.0, "rho": 1.2, "Cp": 1005.0, "delta_T": 5.0 }
/// ```
///
/// `rho` and `Cp` may be omitted and default to standard air.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QFromAchInput {
    /// Air changes per hour (1/h)
    #[serde(rename = "ACH")]
    pub ach: f64,

    /// Room volume (m³)
    #[serde(rename = "V")]
    pub volume: f64,

    /// Air density (kg/m³)
    #[serde(default = "default_rho")]
    pub rho: f64,

    /// Specific heat of air (J/kg·K)
    #[serde(rename = "Cp", default = "default_cp")]
    pub cp: f64,

    /// Temperature difference (K)
    #[serde(rename = "delta_T")]
    pub delta_t: f64,
}

impl QFromAchInput {
    /// Input with standard air properties
    pub fn new(ach: f64, volume: f64, delta_t: f64) -> Self {
        QFromAchInput {
            ach,
            volume,
            rho: AIR_DENSITY_KG_M3,
            cp: AIR_SPECIFIC_HEAT_J_KGK,
            delta_t,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("ACH", self.ach)?;
        ensure_finite("V", self.volume)?;
        ensure_finite("rho", self.rho)?;
        ensure_finite("Cp", self.cp)?;
        ensure_finite("delta_T", self.delta_t)?;
        Ok(())
    }
}

impl FromFields for QFromAchInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(QFromAchInput {
            ach: reader.number("ACH")?,
            volume: reader.number("V")?,
            rho: reader.number_or("rho", AIR_DENSITY_KG_M3)?,
            cp: reader.number_or("Cp", AIR_SPECIFIC_HEAT_J_KGK)?,
            delta_t: reader.number("delta_T")?,
        })
    }
}

/// Results from the air change heat load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QFromAchResult {
    /// Heat load (W)
    #[serde(rename = "Q")]
    pub q: f64,
}

/// Calculate Q = ACH × V × ρ × Cp × ΔT / 3600.
pub fn calculate(input: &QFromAchInput) -> CalcResult<QFromAchResult> {
    input.validate()?;
    let q = ach_heat_load(input.ach, input.volume, input.rho, input.cp, input.delta_t);
    Ok(QFromAchResult {
        q: ensure_output(FORMULA, "Q", q)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::InputPolicy;
    use serde_json::json;

    #[test]
    fn test_reference_case() {
        let input = QFromAchInput {
            ach: 2.0,
            volume: 100.0,
            rho: 1.2,
            cp: 1005.0,
            delta_t: 5.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.q - 335.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let input = QFromAchInput::new(0.7, 245.0, 18.0);
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.q.to_bits(), b.q.to_bits());
    }

    #[test]
    fn test_defaults_from_json() {
        let body = json!({ "ACH": 2, "V": 100, "delta_T": 5 });
        let input = QFromAchInput::from_json(&body, InputPolicy::Strict).unwrap();
        assert_eq!(input, QFromAchInput::new(2.0, 100.0, 5.0));

        let typed: QFromAchInput = serde_json::from_value(body).unwrap();
        assert_eq!(typed.rho, 1.2);
        assert_eq!(typed.cp, 1005.0);
    }

    #[test]
    fn test_strict_rejects_text() {
        let body = json!({ "ACH": "x", "V": 100, "delta_T": 5 });
        let err = QFromAchInput::from_json(&body, InputPolicy::Strict).unwrap_err();
        assert_eq!(err.field(), Some("ACH"));

        let lenient = QFromAchInput::from_json(&body, InputPolicy::Lenient).unwrap();
        assert_eq!(calculate(&lenient).unwrap().q, 0.0);
    }

    #[test]
    fn test_nan_rejected() {
        let input = QFromAchInput::new(f64::NAN, 100.0, 5.0);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("ACH"));
    }

    #[test]
    fn test_overflow_rejected() {
        let input = QFromAchInput::new(1e200, 1e200, 5.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert_eq!(err.field(), Some("Q"));
    }

    #[test]
    fn test_json_roundtrip_exact() {
        let result = calculate(&QFromAchInput::new(0.7, 245.0, 18.0)).unwrap();
        let text = serde_json::to_string(&result).unwrap();
        let back: QFromAchResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.q.to_bits(), result.q.to_bits());
    }
}
