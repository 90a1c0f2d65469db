//! # Heat Load Formulas
//!
//! Closed-form heat transfer relations for envelope, ventilation air and
//! glazing loads. These are raw scalar formulas: no validation, no unit
//! juggling beyond what the formula itself states. Input checking lives in
//! the [`crate::calculations`] layer.
//!
//! ## Notation
//!
//! - `U` = Thermal transmittance (W/m²·K)
//! - `A` = Area (m²)
//! - `ΔT` = Indoor/outdoor temperature difference (K)
//! - `ACH` = Air changes per hour (1/h)
//! - `V` = Room volume (m³)
//! - `ρ` = Air density (kg/m³)
//! - `Cp` = Specific heat of air (J/kg·K)
//! - `SHGC` = Solar heat gain coefficient (-)
//! - `PF` = Projection (shading) factor (-)
//! - `I` = Solar irradiation (W/m²)

use crate::units::SECONDS_PER_HOUR;

// =============================================================================
// ENVELOPE TRANSMISSION
// =============================================================================

/// Conductance of one building element
///
/// # Formula
/// - UA = U × A
#[inline]
pub fn element_ua(u: f64, a: f64) -> f64 {
    u * a
}

/// Transmission heat flow through an envelope with total conductance ΣUA
///
/// # Formula
/// - Q = ΣUA × ΔT
#[inline]
pub fn transmission_heat_flow(total_ua: f64, delta_t: f64) -> f64 {
    total_ua * delta_t
}

// =============================================================================
// VENTILATION AIR
// =============================================================================

/// Sensible heat load carried by ventilation air
///
/// # Formula
/// - Q = ACH × V × ρ × Cp × ΔT / 3600
///
/// The 3600 converts the hourly air change rate to a per-second mass flow,
/// giving watts.
#[inline]
pub fn ach_heat_load(ach: f64, volume: f64, rho: f64, cp: f64, delta_t: f64) -> f64 {
    ach * volume * rho * cp * delta_t / SECONDS_PER_HOUR
}

// =============================================================================
// GLAZING
// =============================================================================

/// SHGC reduced by an external projection
///
/// # Formula
/// - SHGC_eff = SHGC × PF
#[inline]
pub fn effective_shgc(shgc: f64, projection_factor: f64) -> f64 {
    shgc * projection_factor
}

/// Solar heat gain through glazing
///
/// # Formula
/// - Q_solar = A × SHGC_eff × I
#[inline]
pub fn solar_heat_gain(area: f64, effective_shgc: f64, irradiation: f64) -> f64 {
    area * effective_shgc * irradiation
}

/// Shade factor of a shading device, in percent
///
/// # Formula
/// - S = Q_shaded / Q_clear × 100
#[inline]
pub fn shade_factor_percent(heat_gain_shading: f64, heat_gain_clear_glass: f64) -> f64 {
    heat_gain_shading / heat_gain_clear_glass * 100.0
}
