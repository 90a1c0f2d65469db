//! # Weather Samples
//!
//! Outdoor conditions supplied by an external weather-file service for one
//! date and hour. The engine does not read weather files; it only accepts
//! the service's answer and uses it to pre-populate force ventilation inputs.
//!
//! ## Example
//!
//! ```rust
//! use vent_core::calculations::volume_air_forces::VolumeAirForcesInput;
//! use vent_core::units::MetersPerSecond;
//! use vent_core::weather::WeatherSample;
//!
//! let sample = WeatherSample::from_wind_mps(-2.0, MetersPerSecond(3.0));
//! assert_eq!(sample.wind_speed_mh, 10_800.0);
//!
//! let mut input = VolumeAirForcesInput {
//!     a_inlet: 1.0, h: 3.0, t_i: 21.0, t_o: 0.0, a_smaller: 1.0, v: 0.0, k: 0.6,
//! };
//! sample.apply_to(&mut input);
//! assert_eq!(input.t_o, -2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::volume_air_forces::VolumeAirForcesInput;
use crate::errors::{ensure_finite, CalcResult};
use crate::normalize::{FieldReader, FromFields};
use crate::units::{MetersPerHour, MetersPerSecond};

/// Outdoor dry bulb temperature and wind speed at one hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Dry bulb temperature (°C)
    pub temperature: f64,

    /// Wind speed (m/h)
    pub wind_speed_mh: f64,
}

impl WeatherSample {
    /// Build a sample from a wind speed in m/s, as weather files store it
    pub fn from_wind_mps(temperature: f64, wind: MetersPerSecond) -> Self {
        WeatherSample {
            temperature,
            wind_speed_mh: MetersPerHour::from(wind).0,
        }
    }

    /// Wind speed in m/s
    pub fn wind_speed_ms(&self) -> f64 {
        MetersPerSecond::from(MetersPerHour(self.wind_speed_mh)).0
    }

    /// Validate the sample.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("temperature", self.temperature)?;
        ensure_finite("wind_speed_mh", self.wind_speed_mh)?;
        Ok(())
    }

    /// Copy outdoor temperature and wind speed into a force ventilation input.
    pub fn apply_to(&self, input: &mut VolumeAirForcesInput) {
        input.t_o = self.temperature;
        input.v = self.wind_speed_mh;
    }
}

impl FromFields for WeatherSample {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(WeatherSample {
            temperature: reader.number("temperature")?,
            wind_speed_mh: reader.number("wind_speed_mh")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::volume_air_forces;
    use crate::normalize::InputPolicy;
    use serde_json::json;

    #[test]
    fn test_wind_conversion() {
        let sample = WeatherSample::from_wind_mps(12.0, MetersPerSecond(2.5));
        assert_eq!(sample.wind_speed_mh, 9000.0);
        assert_eq!(sample.wind_speed_ms(), 2.5);
    }

    #[test]
    fn test_prepopulates_forces_input() {
        let body = json!({ "temperature": 18.0, "wind_speed_mh": 6000.0 });
        let sample = WeatherSample::from_json(&body, InputPolicy::Strict).unwrap();
        sample.validate().unwrap();

        let mut input = VolumeAirForcesInput {
            a_inlet: 2.0,
            h: 4.0,
            t_i: 22.0,
            t_o: 0.0,
            a_smaller: 1.0,
            v: 0.0,
            k: 0.6,
        };
        sample.apply_to(&mut input);
        let result = volume_air_forces::calculate(&input).unwrap();
        assert!((result.qt - 56.0).abs() < 1e-9);
        assert!((result.qw - 60.0).abs() < 1e-9);
    }
}
