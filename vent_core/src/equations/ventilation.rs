//! # Natural Ventilation Formulas
//!
//! Airflow relations for window openings, stack (thermal) and wind forces,
//! and the air volumes required to carry away sensible and latent gains.
//!
//! ## Notation
//!
//! - `V_room` = Room volume (m³)
//! - `n` = Air changes per hour (1/h)
//! - `Q` = Airflow (m³/h unless stated)
//! - `K` = Opening effectiveness / flow coefficient (-)
//! - `V` = Wind speed (m/h), `v` = wind speed (m/s)
//! - `A` = Free opening area (m²)
//! - `h` = Height between inlet and outlet (m) or vapour pressure difference (mmHg)
//! - `t_i`, `t_o` = Indoor and outdoor temperature (°C)
//!
//! ## Units
//!
//! Stack and wind force flows are returned in m³/min, opening flows in m³/h.

use crate::units::{CubicMetersPerHour, CubicMetersPerMinute, SECONDS_PER_HOUR};

/// Sensible air volume coefficient (m³/h per W·°C⁻¹)
pub const SENSIBLE_AIR_COEFF: f64 = 2.9768;

/// Latent air volume coefficient, vapour pressure method (m³/h per W·mmHg⁻¹)
pub const LATENT_VAPOR_COEFF: f64 = 4127.26;

/// Latent air volume divisor, specific humidity method
pub const LATENT_HUMIDITY_COEFF: f64 = 814.0;

/// Stack effect coefficient for metric inputs
pub const STACK_COEFF: f64 = 7.0;

// =============================================================================
// REQUIRED AIRFLOW
// =============================================================================

/// Airflow needed for a given air change rate
///
/// # Formula
/// - Q = V_room × n
#[inline]
pub fn airflow_from_ach(v_room: f64, n_ach: f64) -> f64 {
    v_room * n_ach
}

// =============================================================================
// OPENING AREAS
// =============================================================================

/// Opening area for permanent ventilation with wind speed in m/h
///
/// # Formula
/// - A = Q / (K × V)
#[inline]
pub fn opening_area(q: f64, k: f64, v_mh: f64) -> f64 {
    q / (k * v_mh)
}

/// Effective opening area with wind speed in m/s
///
/// # Formula
/// - A = Q / (3600 × v × K)
#[inline]
pub fn opening_area_wind_mps(q: f64, v_mps: f64, k: f64) -> f64 {
    q / (SECONDS_PER_HOUR * v_mps * k)
}

/// Unknown opening of an inlet/outlet pair given the effective area
///
/// ```text
/// 1/A_eff = 1/A_i + 1/A_o   →   A_unknown = 1 / (1/A_eff − 1/A_known)
/// ```
///
/// Only meaningful when `A_known > A_eff`; otherwise the result is
/// infinite or negative.
#[inline]
pub fn series_opening_unknown(a_effective: f64, a_known: f64) -> f64 {
    1.0 / (1.0 / a_effective - 1.0 / a_known)
}

// =============================================================================
// VENTILATION FORCES
// =============================================================================

/// Stack-driven flow through the inlet (m³/min)
///
/// # Formula
/// - Q_t = 7.0 × A × √(h × (t_i − t_o))
///
/// Caller guarantees `h × (t_i − t_o) ≥ 0`.
#[inline]
pub fn thermal_force_flow(a_inlet: f64, h: f64, t_i: f64, t_o: f64) -> f64 {
    STACK_COEFF * a_inlet * (h * (t_i - t_o)).sqrt()
}

/// Wind-driven flow through the smaller opening (m³/min)
///
/// # Formula
/// - Q_w = K × A × V / 60
#[inline]
pub fn wind_force_flow(k: f64, a_smaller: f64, v_mh: f64) -> f64 {
    let per_hour = CubicMetersPerHour(k * a_smaller * v_mh);
    CubicMetersPerMinute::from(per_hour).0
}

/// Resultant of stack and wind flows
///
/// # Formula
/// - Q = √(Q_w² + Q_t²)
#[inline]
pub fn combined_force_flow(q_wind: f64, q_thermal: f64) -> f64 {
    q_wind.hypot(q_thermal)
}

// =============================================================================
// AIR VOLUME FOR HEAT GAINS
// =============================================================================

/// Air volume to absorb a sensible gain with allowable rise t (m³/h)
///
/// # Formula
/// - Q_s = 2.9768 × K_s / t
#[inline]
pub fn sensible_air_volume(ks: f64, t: f64) -> f64 {
    SENSIBLE_AIR_COEFF * ks / t
}

/// Air volume to absorb a latent gain, vapour pressure method (m³/h)
///
/// # Formula
/// - Q_l = 4127.26 × K_l / h
#[inline]
pub fn latent_air_volume_vapor(kl: f64, h: f64) -> f64 {
    LATENT_VAPOR_COEFF * kl / h
}

/// Air volume to absorb a latent gain, specific humidity method (m³/h)
///
/// # Formula
/// - Q = K_l / (814 × (w_o − w_i))
#[inline]
pub fn latent_air_volume_humidity(kl: f64, humidity_diff: f64) -> f64 {
    kl / (LATENT_HUMIDITY_COEFF * humidity_diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_area() {
        let q = airflow_from_ach(120.0, 6.0);
        assert_eq!(q, 720.0);
        assert!((opening_area(q, 0.6, 100.0) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_opening_area_wind_mps() {
        // 720 / (3600 × 2.5 × 0.65) = 0.12308
        let a = opening_area_wind_mps(720.0, 2.5, 0.65);
        assert!((a - 0.123_076_923).abs() < 1e-8);
    }

    #[test]
    fn test_series_opening() {
        // 1/2 = 1/4 + 1/4
        assert!((series_opening_unknown(2.0, 4.0) - 4.0).abs() < 1e-12);
        // 1/1 = 1/3 + 1/1.5
        assert!((series_opening_unknown(1.0, 3.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_forces() {
        // 7 × 2 × √(4 × 4) = 56
        assert!((thermal_force_flow(2.0, 4.0, 24.0, 20.0) - 56.0).abs() < 1e-12);
        // 0.6 × 1 × 6000 / 60 = 60
        assert!((wind_force_flow(0.6, 1.0, 6000.0) - 60.0).abs() < 1e-12);
        assert!((combined_force_flow(3.0, 4.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_air_volumes() {
        assert!((sensible_air_volume(1000.0, 10.0) - 297.68).abs() < 1e-9);
        assert!((latent_air_volume_vapor(100.0, 10.0) - 41_272.6).abs() < 1e-6);
        assert!((latent_air_volume_humidity(814.0, 0.5) - 2.0).abs() < 1e-12);
    }
}
