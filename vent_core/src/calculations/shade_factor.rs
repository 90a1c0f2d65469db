//! # Shade Factor
//!
//! Performance of a shading device expressed as the heat gain through the
//! shaded window relative to the same window with clear glass, in percent.

use serde::{Deserialize, Serialize};

use crate::equations::heat::shade_factor_percent;
use crate::errors::{ensure_finite, ensure_output, CalcError, CalcResult};
use crate::normalize::{FieldReader, FromFields};

/// Route name of this formula
pub const FORMULA: &str = "window-p";

/// Input parameters for the shade factor.
///
/// ## JSON Example
///
/// ```json
/// { "heat_gain_shading": 30.0, "heat_gain_clear_glass": 120.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeFactorInput {
    /// Heat gain through the window with the shading device (W)
    pub heat_gain_shading: f64,

    /// Heat gain through the same window with clear glass (W)
    pub heat_gain_clear_glass: f64,
}

impl ShadeFactorInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("heat_gain_shading", self.heat_gain_shading)?;
        ensure_finite("heat_gain_clear_glass", self.heat_gain_clear_glass)?;
        if self.heat_gain_clear_glass == 0.0 {
            return Err(CalcError::division_by_zero(FORMULA, "heat_gain_clear_glass"));
        }
        Ok(())
    }
}

impl FromFields for ShadeFactorInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(ShadeFactorInput {
            heat_gain_shading: reader.number("heat_gain_shading")?,
            heat_gain_clear_glass: reader.number("heat_gain_clear_glass")?,
        })
    }
}

/// Results from the shade factor calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeFactorResult {
    /// Shade factor (%)
    pub shade_factor: f64,
}

/// Calculate S = shaded / clear × 100.
pub fn calculate(input: &ShadeFactorInput) -> CalcResult<ShadeFactorResult> {
    input.validate()?;
    let percent = shade_factor_percent(input.heat_gain_shading, input.heat_gain_clear_glass);
    Ok(ShadeFactorResult {
        shade_factor: ensure_output(FORMULA, "shade_factor", percent)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_factor() {
        let input = ShadeFactorInput {
            heat_gain_shading: 30.0,
            heat_gain_clear_glass: 120.0,
        };
        assert_eq!(calculate(&input).unwrap().shade_factor, 25.0);
    }

    #[test]
    fn test_zero_clear_glass() {
        let input = ShadeFactorInput {
            heat_gain_shading: 30.0,
            heat_gain_clear_glass: 0.0,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("heat_gain_clear_glass"));
    }

    #[test]
    fn test_tiny_clear_glass_overflows() {
        let input = ShadeFactorInput {
            heat_gain_shading: 30.0,
            heat_gain_clear_glass: 1e-310,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
    }

    #[test]
    fn test_json_roundtrip_exact() {
        let input = ShadeFactorInput {
            heat_gain_shading: 41.3,
            heat_gain_clear_glass: 117.9,
        };
        let result = calculate(&input).unwrap();
        let text = serde_json::to_string(&result).unwrap();
        let back: ShadeFactorResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.shade_factor.to_bits(), result.shade_factor.to_bits());
    }
}
