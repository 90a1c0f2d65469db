//! # Air Volume for Heat Gains
//!
//! Supply air volume needed to absorb a room's sensible and latent gains.
//! The latent part is estimated two ways (vapour pressure difference and
//! specific humidity difference); each is added to the sensible volume to
//! give two alternative totals.
//!
//! ## Assumptions
//!
//! - `Qt_vapor = Qs + Ql_vapor`, `Qt_humidity = Qs + Q_humidity`
//! - Choosing between the two totals is left to the caller;
//!   [`VolumeAirHeatGainResult::reported_total`] gives the larger one
//!
//! ## Example
//!
//! ```rust
//! use vent_core::calculations::volume_air_heat_gain::{calculate, VolumeAirHeatGainInput};
//!
//! let input = VolumeAirHeatGainInput { ks: 1000.0, kl: 100.0, t: 10.0, h: 10.0, wo: 0.012, wi: 0.010 };
//! let result = calculate(&input).unwrap();
//! assert!((result.qs - 297.68).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::ventilation::{
    latent_air_volume_humidity, latent_air_volume_vapor, sensible_air_volume,
    LATENT_HUMIDITY_COEFF,
};
use crate::errors::{ensure_finite, ensure_nonzero, ensure_output, CalcError, CalcResult};
use crate::normalize::{FieldReader, FromFields};

/// Route name of this formula
pub const FORMULA: &str = "volume-air-heat-gain";

/// Input parameters for the heat gain air volume.
///
/// ## JSON Example
///
/// ```json
/// { "Ks": 1000.0, "Kl": 100.0, "t": 10.0, "h": 10.0, "wo": 0.012, "wi": 0.010 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAirHeatGainInput {
    /// Sensible heat gained (W)
    #[serde(rename = "Ks")]
    pub ks: f64,

    /// Latent heat gained (W)
    #[serde(rename = "Kl")]
    pub kl: f64,

    /// Allowable temperature rise (°C)
    pub t: f64,

    /// Vapour pressure difference (mmHg)
    pub h: f64,

    /// Specific humidity outside (kg/kg)
    pub wo: f64,

    /// Specific humidity inside (kg/kg)
    pub wi: f64,
}

impl VolumeAirHeatGainInput {
    /// Validate input parameters, denominators included.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("Ks", self.ks)?;
        ensure_finite("Kl", self.kl)?;
        ensure_finite("t", self.t)?;
        ensure_finite("h", self.h)?;
        ensure_finite("wo", self.wo)?;
        ensure_finite("wi", self.wi)?;

        if self.t == 0.0 {
            return Err(CalcError::division_by_zero(FORMULA, "t"));
        }
        if self.h == 0.0 {
            return Err(CalcError::division_by_zero(FORMULA, "h"));
        }
        if self.humidity_difference() == 0.0 {
            return Err(CalcError::division_by_zero(FORMULA, "wo-wi"));
        }
        ensure_nonzero(FORMULA, "814*(wo-wi)", LATENT_HUMIDITY_COEFF * self.humidity_difference())?;
        Ok(())
    }

    /// wo − wi
    pub fn humidity_difference(&self) -> f64 {
        self.wo - self.wi
    }
}

impl FromFields for VolumeAirHeatGainInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(VolumeAirHeatGainInput {
            ks: reader.number("Ks")?,
            kl: reader.number("Kl")?,
            t: reader.number("t")?,
            h: reader.number("h")?,
            wo: reader.number("wo")?,
            wi: reader.number("wi")?,
        })
    }
}

/// Results from the heat gain air volume calculation (all m³/h).
///
/// ## JSON Example
///
/// ```json
/// {
///   "Qs": 297.68,
///   "Ql_vapor": 41272.6,
///   "Q_humidity": 61.43,
///   "Qt_vapor": 41570.28,
///   "Qt_humidity": 359.11
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAirHeatGainResult {
    /// Sensible air volume
    #[serde(rename = "Qs")]
    pub qs: f64,

    /// Latent air volume, vapour pressure method
    #[serde(rename = "Ql_vapor")]
    pub ql_vapor: f64,

    /// Latent air volume, specific humidity method
    #[serde(rename = "Q_humidity")]
    pub q_humidity: f64,

    /// Total air volume, vapour pressure method
    #[serde(rename = "Qt_vapor")]
    pub qt_vapor: f64,

    /// Total air volume, specific humidity method
    #[serde(rename = "Qt_humidity")]
    pub qt_humidity: f64,
}

impl VolumeAirHeatGainResult {
    /// Larger of the two totals, as shown on the live preview.
    pub fn reported_total(&self) -> f64 {
        self.qt_vapor.max(self.qt_humidity)
    }
}

/// Calculate sensible, latent and total air volumes.
///
/// # Returns
///
/// * `Ok(VolumeAirHeatGainResult)` - All five air volumes
/// * `Err(CalcError::DivisionByZero)` - If `t`, `h` or `wo - wi` is zero
/// * `Err(CalcError::InvalidDomain)` - If a volume overflows
pub fn calculate(input: &VolumeAirHeatGainInput) -> CalcResult<VolumeAirHeatGainResult> {
    input.validate()?;

    let qs = ensure_output(FORMULA, "Qs", sensible_air_volume(input.ks, input.t))?;
    let ql_vapor = ensure_output(FORMULA, "Ql_vapor", latent_air_volume_vapor(input.kl, input.h))?;
    let q_humidity = ensure_output(
        FORMULA,
        "Q_humidity",
        latent_air_volume_humidity(input.kl, input.humidity_difference()),
    )?;

    Ok(VolumeAirHeatGainResult {
        qs,
        ql_vapor,
        q_humidity,
        qt_vapor: ensure_output(FORMULA, "Qt_vapor", qs + ql_vapor)?,
        qt_humidity: ensure_output(FORMULA, "Qt_humidity", qs + q_humidity)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> VolumeAirHeatGainInput {
        VolumeAirHeatGainInput {
            ks: 1000.0,
            kl: 100.0,
            t: 10.0,
            h: 10.0,
            wo: 0.012,
            wi: 0.010,
        }
    }

    #[test]
    fn test_air_volumes() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.qs - 297.68).abs() < 1e-9);
        assert!((result.ql_vapor - 41_272.6).abs() < 1e-6);
        // 100 / (814 × 0.002) = 61.425
        assert!((result.q_humidity - 61.425_061).abs() < 1e-3);
        assert_eq!(result.qt_vapor, result.qs + result.ql_vapor);
        assert_eq!(result.qt_humidity, result.qs + result.q_humidity);
        assert_eq!(result.reported_total(), result.qt_vapor);
    }

    #[test]
    fn test_zero_t() {
        let mut input = test_input();
        input.t = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::division_by_zero(FORMULA, "t"));
    }

    #[test]
    fn test_zero_h() {
        let mut input = test_input();
        input.h = 0.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("h"));
    }

    #[test]
    fn test_equal_humidity() {
        let mut input = test_input();
        input.wi = input.wo;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(err.field(), Some("wo-wi"));
    }

    #[test]
    fn test_negative_humidity_difference_allowed() {
        let mut input = test_input();
        input.wo = 0.008;
        let result = calculate(&input).unwrap();
        assert!(result.q_humidity < 0.0);
        assert_eq!(result.reported_total(), result.qt_vapor);
    }

    #[test]
    fn test_tiny_t_overflows() {
        let mut input = test_input();
        input.t = 1e-310;
        input.ks = 1e10;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert_eq!(err.field(), Some("Qs"));
    }

    #[test]
    fn test_totals_overflow() {
        let mut input = test_input();
        // Qs and Ql_vapor are each finite, their sum is not
        input.ks = f64::MAX / 4.0;
        input.t = 1.0;
        input.kl = f64::MAX / 8000.0;
        input.h = 1.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.http_status(), 422);
        assert_eq!(err.field(), Some("Qt_vapor"));
    }

    #[test]
    fn test_json_roundtrip_exact() {
        let input = VolumeAirHeatGainInput {
            ks: 1733.0,
            kl: 412.0,
            t: 7.3,
            h: 11.9,
            wo: 0.0131,
            wi: 0.0097,
        };
        let result = calculate(&input).unwrap();
        let text = serde_json::to_string(&result).unwrap();
        let back: VolumeAirHeatGainResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back.qt_humidity.to_bits(), result.qt_humidity.to_bits());
        assert_eq!(back, result);
    }
}
