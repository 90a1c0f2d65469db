//! # Ventilation and Heat Load Equations
//!
//! This module contains the raw scalar formulas used by the calculations.
//! Keeping them in one place enables:
//! - Easy verification against references
//! - Documentation of units and constants next to the arithmetic
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`heat`] - Envelope, ventilation air and glazing heat loads
//! - [`ventilation`] - Airflow, opening areas, stack/wind forces, air volumes
//! - [`registry`] - Equation metadata and the generated reference document

pub mod heat;
pub mod registry;
pub mod ventilation;

// Re-export commonly used items
pub use heat::{
    ach_heat_load,
    effective_shgc,
    element_ua,
    shade_factor_percent,
    solar_heat_gain,
    transmission_heat_flow,
};

pub use ventilation::{
    airflow_from_ach,
    combined_force_flow,
    latent_air_volume_humidity,
    latent_air_volume_vapor,
    opening_area,
    opening_area_wind_mps,
    sensible_air_volume,
    series_opening_unknown,
    thermal_force_flow,
    wind_force_flow,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
