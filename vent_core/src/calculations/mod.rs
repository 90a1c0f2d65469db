//! # Ventilation Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, readable via [`FromFields`])
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! [`FromFields`]: crate::normalize::FromFields
//!
//! ## Available Calculations
//!
//! - [`by_element`] - Envelope transmission load, element by element
//! - [`q_from_ach`] - Heat load from air changes
//! - [`solar_heat_gain`] - Equivalent solar heat gain through glazing
//! - [`volume_air_heat_gain`] - Air volume for sensible and latent gains
//! - [`volume_air_forces`] - Flow from thermal and wind forces
//! - [`window_opening`] - Window opening sizing (wind in m/h)
//! - [`effective_area`] - Dashboard effective area (wind in m/s)
//! - [`shade_factor`] - Shading device shade factor

pub mod by_element;
pub mod effective_area;
pub mod q_from_ach;
pub mod shade_factor;
pub mod solar_heat_gain;
pub mod volume_air_forces;
pub mod volume_air_heat_gain;
pub mod window_opening;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::CalcError;

// Re-export commonly used types
pub use by_element::{BuildingElement, ByElementInput, ByElementResult};
pub use effective_area::{EffectiveAreaInput, EffectiveAreaResult};
pub use q_from_ach::{QFromAchInput, QFromAchResult};
pub use shade_factor::{ShadeFactorInput, ShadeFactorResult};
pub use solar_heat_gain::{SolarHeatGainInput, SolarHeatGainResult};
pub use volume_air_forces::{VolumeAirForcesInput, VolumeAirForcesResult};
pub use volume_air_heat_gain::{VolumeAirHeatGainInput, VolumeAirHeatGainResult};
pub use window_opening::{WindowOpeningInput, WindowOpeningResult};

/// Every formula a request can name.
///
/// Serializes as its route name, e.g. `"q-from-ach"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formula {
    ByElement,
    QFromAch,
    SolarHeatGain,
    VolumeAirHeatGain,
    VolumeAirForces,
    #[serde(rename = "window-calculations")]
    WindowCalculations,
    EffectiveArea,
    #[serde(rename = "window-p")]
    ShadeFactor,
}

impl Formula {
    /// All formulas, in menu order
    pub const ALL: [Formula; 8] = [
        Formula::ByElement,
        Formula::QFromAch,
        Formula::SolarHeatGain,
        Formula::VolumeAirHeatGain,
        Formula::VolumeAirForces,
        Formula::WindowCalculations,
        Formula::EffectiveArea,
        Formula::ShadeFactor,
    ];

    /// Route name used by the request layer
    pub fn route(&self) -> &'static str {
        match self {
            Formula::ByElement => by_element::FORMULA,
            Formula::QFromAch => q_from_ach::FORMULA,
            Formula::SolarHeatGain => solar_heat_gain::FORMULA,
            Formula::VolumeAirHeatGain => volume_air_heat_gain::FORMULA,
            Formula::VolumeAirForces => volume_air_forces::FORMULA,
            Formula::WindowCalculations => window_opening::FORMULA,
            Formula::EffectiveArea => effective_area::FORMULA,
            Formula::ShadeFactor => shade_factor::FORMULA,
        }
    }

    /// Look up a formula by route name
    pub fn from_route(route: &str) -> Option<Formula> {
        let route = route.trim().trim_start_matches("/api/").trim_matches('/');
        Formula::ALL.into_iter().find(|f| f.route() == route)
    }

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Formula::ByElement => "Heat Load by Element",
            Formula::QFromAch => "Heat Load from Air Changes",
            Formula::SolarHeatGain => "Equivalent Solar Heat Gain",
            Formula::VolumeAirHeatGain => "Air Volume for Heat Gains",
            Formula::VolumeAirForces => "Ventilation by Thermal and Wind Forces",
            Formula::WindowCalculations => "Window Opening Sizing",
            Formula::EffectiveArea => "Optimised Window Opening",
            Formula::ShadeFactor => "Shade Factor",
        }
    }

    /// Registry equations this formula evaluates
    pub fn equations(&self) -> Vec<Equation> {
        match self {
            Formula::ByElement => vec![Equation::ElementConductance, Equation::TransmissionHeatFlow],
            Formula::QFromAch => vec![Equation::AchHeatLoad],
            Formula::SolarHeatGain => vec![Equation::EffectiveShgc, Equation::SolarHeatGain],
            Formula::VolumeAirHeatGain => vec![
                Equation::SensibleAirVolume,
                Equation::LatentAirVolumeVapor,
                Equation::LatentAirVolumeHumidity,
                Equation::TotalAirVolume,
            ],
            Formula::VolumeAirForces => vec![
                Equation::ThermalForceFlow,
                Equation::WindForceFlow,
                Equation::CombinedForceFlow,
            ],
            Formula::WindowCalculations => vec![
                Equation::AirflowFromAch,
                Equation::OpeningAreaWindMh,
                Equation::SeriesOpenings,
            ],
            Formula::EffectiveArea => vec![Equation::AirflowFromAch, Equation::OpeningAreaWindMps],
            Formula::ShadeFactor => vec![Equation::ShadeFactor],
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Formula {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::from_route(s).ok_or_else(|| CalcError::unknown_formula(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::registry::ALL_EQUATIONS;

    #[test]
    fn test_route_roundtrip() {
        for formula in Formula::ALL {
            assert_eq!(Formula::from_route(formula.route()), Some(formula));
            assert_eq!(formula.to_string().parse::<Formula>().unwrap(), formula);
        }
    }

    #[test]
    fn test_route_prefix_tolerated() {
        assert_eq!(Formula::from_route("/api/q-from-ach"), Some(Formula::QFromAch));
        assert_eq!(Formula::from_route("by-element/"), Some(Formula::ByElement));
        assert!(Formula::from_route("upload-epw").is_none());
    }

    #[test]
    fn test_serde_matches_route() {
        for formula in Formula::ALL {
            let json = serde_json::to_string(&formula).unwrap();
            assert_eq!(json, format!("\"{}\"", formula.route()));
        }
    }

    #[test]
    fn test_every_equation_is_used() {
        for eq in ALL_EQUATIONS {
            assert!(
                Formula::ALL.iter().any(|f| f.equations().contains(eq)),
                "{:?} is not used by any formula",
                eq
            );
        }
    }
}
