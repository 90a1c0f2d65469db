//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the ventilation formulas mix.
//! These are plain f64 newtypes so that JSON stays clean (just numbers).
//!
//! ## SI Units (Primary)
//!
//! - Length: metres (m), area: square metres (m²), volume: cubic metres (m³)
//! - Wind speed: metres per second (m/s) for weather data and the dashboard,
//!   metres per hour (m/h) for the opening and force formulas
//! - Airflow: cubic metres per hour (m³/h) or per minute (m³/min)
//! - Heat: watts (W)
//!
//! ## Example
//!
//! ```rust
//! use vent_core::units::{MetersPerHour, MetersPerSecond};
//!
//! let wind = MetersPerSecond(2.5);
//! let wind_mh: MetersPerHour = wind.into();
//! assert_eq!(wind_mh.0, 9000.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

// ============================================================================
// Air Property Defaults
// ============================================================================

/// Density of air at standard conditions (kg/m³)
pub const AIR_DENSITY_KG_M3: f64 = 1.2;

/// Specific heat capacity of air (J/kg·K)
pub const AIR_SPECIFIC_HEAT_J_KGK: f64 = 1005.0;

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in metres per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

/// Speed in metres per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerHour(pub f64);

impl From<MetersPerSecond> for MetersPerHour {
    fn from(v: MetersPerSecond) -> Self {
        MetersPerHour(v.0 * SECONDS_PER_HOUR)
    }
}

impl From<MetersPerHour> for MetersPerSecond {
    fn from(v: MetersPerHour) -> Self {
        MetersPerSecond(v.0 / SECONDS_PER_HOUR)
    }
}

// ============================================================================
// Airflow Units
// ============================================================================

/// Volumetric flow in cubic metres per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerHour(pub f64);

/// Volumetric flow in cubic metres per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerMinute(pub f64);

impl From<CubicMetersPerHour> for CubicMetersPerMinute {
    fn from(q: CubicMetersPerHour) -> Self {
        CubicMetersPerMinute(q.0 / MINUTES_PER_HOUR)
    }
}

impl From<CubicMetersPerMinute> for CubicMetersPerHour {
    fn from(q: CubicMetersPerMinute) -> Self {
        CubicMetersPerHour(q.0 * MINUTES_PER_HOUR)
    }
}
