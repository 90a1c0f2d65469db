//! # Equation Registry
//!
//! Central registry of every formula the engine evaluates. Each equation has
//! metadata including its reference, plain-text formula, variables with units
//! and the function that implements it.
//!
//! ## Usage
//!
//! ```rust
//! use vent_core::equations::registry::Equation;
//!
//! let meta = Equation::AchHeatLoad.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! assert_eq!(meta.source_function, "ach_heat_load");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source a formula is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ASHRAE Handbook - Fundamentals
    AshraeFundamentals { year: u16, chapter: u8, title: &'static str },
    /// Conventional coefficients from HVAC design manuals
    DesignPractice { topic: &'static str },
    /// Fundamental physics or a unit conversion, no specific source needed
    Physics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::AshraeFundamentals { year, chapter, title } => {
                format!("ASHRAE Handbook - Fundamentals {}, Ch. {} ({})", year, chapter, title)
            }
            CodeReference::DesignPractice { topic } => format!("HVAC design practice: {}", topic),
            CodeReference::Physics => "Fundamental Physics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::AshraeFundamentals { .. } => "ASHRAE",
            CodeReference::DesignPractice { .. } => "Practice",
            CodeReference::Physics => "Physics",
        }
    }
}

const ASHRAE_HEAT_TRANSFER: CodeReference = CodeReference::AshraeFundamentals {
    year: 2021,
    chapter: 4,
    title: "Heat Transfer",
};

const ASHRAE_FENESTRATION: CodeReference = CodeReference::AshraeFundamentals {
    year: 2021,
    chapter: 15,
    title: "Fenestration",
};

const ASHRAE_VENTILATION: CodeReference = CodeReference::AshraeFundamentals {
    year: 2021,
    chapter: 16,
    title: "Ventilation and Infiltration",
};

const ASHRAE_LOADS: CodeReference = CodeReference::AshraeFundamentals {
    year: 2021,
    chapter: 18,
    title: "Nonresidential Cooling and Heating Load Calculations",
};

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Conduction through walls, roofs, glazing
    EnvelopeTransmission,
    /// Heat carried by outdoor air
    VentilationAir,
    /// Solar gains and shading
    Glazing,
    /// Airflow demanded by an air change rate
    RequiredAirflow,
    /// Window opening sizes
    OpeningAreas,
    /// Stack and wind driven flows
    VentilationForces,
    /// Air volumes that absorb heat gains
    AirVolume,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::EnvelopeTransmission => "Envelope Transmission",
            EquationCategory::VentilationAir => "Ventilation Air",
            EquationCategory::Glazing => "Glazing",
            EquationCategory::RequiredAirflow => "Required Airflow",
            EquationCategory::OpeningAreas => "Opening Areas",
            EquationCategory::VentilationForces => "Ventilation Forces",
            EquationCategory::AirVolume => "Air Volume for Heat Gains",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::EnvelopeTransmission => 0,
            EquationCategory::VentilationAir => 1,
            EquationCategory::Glazing => 2,
            EquationCategory::RequiredAirflow => 3,
            EquationCategory::OpeningAreas => 4,
            EquationCategory::VentilationForces => 5,
            EquationCategory::AirVolume => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Q", "A", "K")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m³/h", "W")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

const HEAT_MODULE: &str = "vent_core/src/equations/heat.rs";
const VENT_MODULE: &str = "vent_core/src/equations/ventilation.rs";

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// UA = U × A
    ElementConductance,
    /// Q = ΣUA × ΔT
    TransmissionHeatFlow,
    /// Q = ACH × V × ρ × Cp × ΔT / 3600
    AchHeatLoad,
    /// SHGC_eff = SHGC × PF
    EffectiveShgc,
    /// Q_solar = A × SHGC_eff × I
    SolarHeatGain,
    /// S = Q_shaded / Q_clear × 100
    ShadeFactor,
    /// Q = V_room × n
    AirflowFromAch,
    /// A = Q / (K × V)
    OpeningAreaWindMh,
    /// A = Q / (3600 × v × K)
    OpeningAreaWindMps,
    /// 1/A_eff = 1/A_i + 1/A_o
    SeriesOpenings,
    /// Q_t = 7.0 × A × √(h × (t_i − t_o))
    ThermalForceFlow,
    /// Q_w = K × A × V / 60
    WindForceFlow,
    /// Q = √(Q_w² + Q_t²)
    CombinedForceFlow,
    /// Q_s = 2.9768 × K_s / t
    SensibleAirVolume,
    /// Q_l = 4127.26 × K_l / h
    LatentAirVolumeVapor,
    /// Q = K_l / (814 × (w_o − w_i))
    LatentAirVolumeHumidity,
    /// Q_t = Q_s + Q_l
    TotalAirVolume,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ElementConductance => EquationMetadata {
                name: "Element Conductance",
                description: "Heat transfer coefficient of one envelope element",
                formula_plain: "UA = U × A",
                reference: ASHRAE_HEAT_TRANSFER,
                variables: vec![
                    Variable::new("U", "Thermal transmittance", "W/m²·K"),
                    Variable::new("A", "Element area", "m²"),
                    Variable::new("UA", "Element conductance", "W/K"),
                ],
                assumptions: vec!["One-dimensional steady conduction"],
                category: EquationCategory::EnvelopeTransmission,
                source_module: HEAT_MODULE,
                source_function: "element_ua",
            },
            Equation::TransmissionHeatFlow => EquationMetadata {
                name: "Transmission Heat Flow",
                description: "Total conduction load through all envelope elements",
                formula_plain: "Q = ΣUA × ΔT",
                reference: ASHRAE_HEAT_TRANSFER,
                variables: vec![
                    Variable::new("ΣUA", "Sum of element conductances", "W/K"),
                    Variable::new("ΔT", "Indoor/outdoor temperature difference", "K"),
                    Variable::new("Q", "Transmission load", "W"),
                ],
                assumptions: vec!["Same ΔT across every element"],
                category: EquationCategory::EnvelopeTransmission,
                source_module: HEAT_MODULE,
                source_function: "transmission_heat_flow",
            },
            Equation::AchHeatLoad => EquationMetadata {
                name: "Heat Load from Air Changes",
                description: "Sensible heat carried by ventilation air at a given air change rate",
                formula_plain: "Q = ACH × V × ρ × Cp × ΔT / 3600",
                reference: ASHRAE_LOADS,
                variables: vec![
                    Variable::new("ACH", "Air changes per hour", "1/h"),
                    Variable::new("V", "Room volume", "m³"),
                    Variable::new("ρ", "Air density", "kg/m³"),
                    Variable::new("Cp", "Specific heat of air", "J/kg·K"),
                    Variable::new("ΔT", "Temperature difference", "K"),
                    Variable::new("Q", "Heat load", "W"),
                ],
                assumptions: vec![
                    "3600 converts air changes per hour to per second",
                    "Defaults ρ = 1.2 kg/m³ and Cp = 1005 J/kg·K",
                ],
                category: EquationCategory::VentilationAir,
                source_module: HEAT_MODULE,
                source_function: "ach_heat_load",
            },
            Equation::EffectiveShgc => EquationMetadata {
                name: "Effective SHGC",
                description: "Glass SHGC reduced by an external projection",
                formula_plain: "SHGC_eff = SHGC × PF",
                reference: ASHRAE_FENESTRATION,
                variables: vec![
                    Variable::new("SHGC", "Solar heat gain coefficient", "-"),
                    Variable::new("PF", "Projection factor (1.0 = unshaded)", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::Glazing,
                source_module: HEAT_MODULE,
                source_function: "effective_shgc",
            },
            Equation::SolarHeatGain => EquationMetadata {
                name: "Solar Heat Gain",
                description: "Solar heat admitted through glazing",
                formula_plain: "Q_solar = A × SHGC_eff × I",
                reference: ASHRAE_FENESTRATION,
                variables: vec![
                    Variable::new("A", "Glazed area", "m²"),
                    Variable::new("SHGC_eff", "Effective SHGC", "-"),
                    Variable::new("I", "Solar irradiation", "W/m²"),
                    Variable::new("Q_solar", "Solar heat gain", "W"),
                ],
                assumptions: vec!["Irradiation is the total incident on the glazing plane"],
                category: EquationCategory::Glazing,
                source_module: HEAT_MODULE,
                source_function: "solar_heat_gain",
            },
            Equation::ShadeFactor => EquationMetadata {
                name: "Shade Factor",
                description: "Heat gain with a shading device relative to clear glass",
                formula_plain: "S = Q_shaded / Q_clear × 100",
                reference: CodeReference::DesignPractice { topic: "shading device performance" },
                variables: vec![
                    Variable::new("Q_shaded", "Heat gain through shading device", "W"),
                    Variable::new("Q_clear", "Heat gain through clear glass", "W"),
                    Variable::new("S", "Shade factor", "%"),
                ],
                assumptions: vec![],
                category: EquationCategory::Glazing,
                source_module: HEAT_MODULE,
                source_function: "shade_factor_percent",
            },
            Equation::AirflowFromAch => EquationMetadata {
                name: "Airflow from Air Changes",
                description: "Volumetric airflow delivering n air changes per hour",
                formula_plain: "Q = V_room × n",
                reference: CodeReference::Physics,
                variables: vec![
                    Variable::new("V_room", "Room volume", "m³"),
                    Variable::new("n", "Air changes per hour", "1/h"),
                    Variable::new("Q", "Airflow", "m³/h"),
                ],
                assumptions: vec![],
                category: EquationCategory::RequiredAirflow,
                source_module: VENT_MODULE,
                source_function: "airflow_from_ach",
            },
            Equation::OpeningAreaWindMh => EquationMetadata {
                name: "Opening Area (wind in m/h)",
                description: "Free area of equal inlet and outlet openings for wind-driven flow",
                formula_plain: "A = Q / (K × V)",
                reference: ASHRAE_VENTILATION,
                variables: vec![
                    Variable::new("Q", "Airflow", "m³/h"),
                    Variable::new("K", "Coefficient of flow (default 0.6)", "-"),
                    Variable::new("V", "Wind speed", "m/h"),
                    Variable::new("A", "Opening area", "m²"),
                ],
                assumptions: vec!["Inlet and outlet of equal size"],
                category: EquationCategory::OpeningAreas,
                source_module: VENT_MODULE,
                source_function: "opening_area",
            },
            Equation::OpeningAreaWindMps => EquationMetadata {
                name: "Opening Area (wind in m/s)",
                description: "Effective opening area with wind speed from weather data",
                formula_plain: "A = Q / (3600 × v × K)",
                reference: ASHRAE_VENTILATION,
                variables: vec![
                    Variable::new("Q", "Airflow", "m³/h"),
                    Variable::new("v", "Wind speed", "m/s"),
                    Variable::new("K", "Opening coefficient (default 0.65)", "-"),
                    Variable::new("A", "Effective area", "m²"),
                ],
                assumptions: vec!["3600 converts m/s to m/h"],
                category: EquationCategory::OpeningAreas,
                source_module: VENT_MODULE,
                source_function: "opening_area_wind_mps",
            },
            Equation::SeriesOpenings => EquationMetadata {
                name: "Unequal Openings",
                description: "Inlet and outlet acting in series; solves the unknown side",
                formula_plain: "1/A_eff = 1/A_i + 1/A_o",
                reference: ASHRAE_VENTILATION,
                variables: vec![
                    Variable::new("A_eff", "Effective area of the pair", "m²"),
                    Variable::new("A_i", "Inlet area", "m²"),
                    Variable::new("A_o", "Outlet area", "m²"),
                ],
                assumptions: vec!["Known side must exceed A_eff"],
                category: EquationCategory::OpeningAreas,
                source_module: VENT_MODULE,
                source_function: "series_opening_unknown",
            },
            Equation::ThermalForceFlow => EquationMetadata {
                name: "Stack Effect Flow",
                description: "Flow through the inlet driven by indoor/outdoor temperature difference",
                formula_plain: "Q_t = 7.0 × A × √(h × (t_i − t_o))",
                reference: CodeReference::DesignPractice { topic: "natural ventilation by thermal forces" },
                variables: vec![
                    Variable::new("A", "Free inlet area", "m²"),
                    Variable::new("h", "Height between inlet and outlet", "m"),
                    Variable::new("t_i", "Indoor temperature at height h", "°C"),
                    Variable::new("t_o", "Outdoor temperature", "°C"),
                    Variable::new("Q_t", "Thermal flow", "m³/min"),
                ],
                assumptions: vec!["h × (t_i − t_o) must be non-negative"],
                category: EquationCategory::VentilationForces,
                source_module: VENT_MODULE,
                source_function: "thermal_force_flow",
            },
            Equation::WindForceFlow => EquationMetadata {
                name: "Wind Force Flow",
                description: "Flow through the smaller opening driven by wind",
                formula_plain: "Q_w = K × A × V / 60",
                reference: ASHRAE_VENTILATION,
                variables: vec![
                    Variable::new("K", "Effectiveness of openings (default 0.6)", "-"),
                    Variable::new("A", "Smaller opening area", "m²"),
                    Variable::new("V", "Wind speed", "m/h"),
                    Variable::new("Q_w", "Wind flow", "m³/min"),
                ],
                assumptions: vec!["60 converts m³/h to m³/min"],
                category: EquationCategory::VentilationForces,
                source_module: VENT_MODULE,
                source_function: "wind_force_flow",
            },
            Equation::CombinedForceFlow => EquationMetadata {
                name: "Combined Force Flow",
                description: "Resultant of simultaneous stack and wind flows",
                formula_plain: "Q = √(Q_w² + Q_t²)",
                reference: ASHRAE_VENTILATION,
                variables: vec![
                    Variable::new("Q_w", "Wind flow", "m³/min"),
                    Variable::new("Q_t", "Thermal flow", "m³/min"),
                    Variable::new("Q", "Combined flow", "m³/min"),
                ],
                assumptions: vec!["Forces combine in quadrature"],
                category: EquationCategory::VentilationForces,
                source_module: VENT_MODULE,
                source_function: "combined_force_flow",
            },
            Equation::SensibleAirVolume => EquationMetadata {
                name: "Sensible Air Volume",
                description: "Supply air needed to absorb a sensible gain within an allowable rise",
                formula_plain: "Q_s = 2.9768 × K_s / t",
                reference: CodeReference::DesignPractice { topic: "air volume for sensible heat" },
                variables: vec![
                    Variable::new("K_s", "Sensible heat gained", "W"),
                    Variable::new("t", "Allowable temperature rise", "°C"),
                    Variable::new("Q_s", "Sensible air volume", "m³/h"),
                ],
                assumptions: vec!["t must be non-zero"],
                category: EquationCategory::AirVolume,
                source_module: VENT_MODULE,
                source_function: "sensible_air_volume",
            },
            Equation::LatentAirVolumeVapor => EquationMetadata {
                name: "Latent Air Volume (vapour pressure)",
                description: "Supply air needed to absorb a latent gain, vapour pressure method",
                formula_plain: "Q_l = 4127.26 × K_l / h",
                reference: CodeReference::DesignPractice { topic: "air volume for latent heat" },
                variables: vec![
                    Variable::new("K_l", "Latent heat gained", "W"),
                    Variable::new("h", "Vapour pressure difference", "mmHg"),
                    Variable::new("Q_l", "Latent air volume", "m³/h"),
                ],
                assumptions: vec!["h must be non-zero"],
                category: EquationCategory::AirVolume,
                source_module: VENT_MODULE,
                source_function: "latent_air_volume_vapor",
            },
            Equation::LatentAirVolumeHumidity => EquationMetadata {
                name: "Latent Air Volume (specific humidity)",
                description: "Supply air needed to absorb a latent gain, humidity ratio method",
                formula_plain: "Q = K_l / (814 × (w_o − w_i))",
                reference: CodeReference::DesignPractice { topic: "air volume for latent heat" },
                variables: vec![
                    Variable::new("K_l", "Latent heat gained", "W"),
                    Variable::new("w_o", "Specific humidity outside", "kg/kg"),
                    Variable::new("w_i", "Specific humidity inside", "kg/kg"),
                    Variable::new("Q", "Latent air volume", "m³/h"),
                ],
                assumptions: vec!["w_o and w_i must differ"],
                category: EquationCategory::AirVolume,
                source_module: VENT_MODULE,
                source_function: "latent_air_volume_humidity",
            },
            Equation::TotalAirVolume => EquationMetadata {
                name: "Total Air Volume",
                description: "Sensible plus latent air volume, once per latent method",
                formula_plain: "Q_t = Q_s + Q_l",
                reference: CodeReference::DesignPractice { topic: "air volume for heat gains" },
                variables: vec![
                    Variable::new("Q_s", "Sensible air volume", "m³/h"),
                    Variable::new("Q_l", "Latent air volume (either method)", "m³/h"),
                    Variable::new("Q_t", "Total air volume", "m³/h"),
                ],
                assumptions: vec!["The caller picks which total to report (commonly the larger)"],
                category: EquationCategory::AirVolume,
                source_module: "vent_core/src/calculations/volume_air_heat_gain.rs",
                source_function: "calculate",
            },
        }
    }

    /// Get all equations in a specific category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            AirVolume,
            VentilationForces,
            OpeningAreas,
            RequiredAirflow,
            Glazing,
            VentilationAir,
            EnvelopeTransmission,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Envelope
    Equation::ElementConductance,
    Equation::TransmissionHeatFlow,
    // Ventilation air
    Equation::AchHeatLoad,
    // Glazing
    Equation::EffectiveShgc,
    Equation::SolarHeatGain,
    Equation::ShadeFactor,
    // Airflow and openings
    Equation::AirflowFromAch,
    Equation::OpeningAreaWindMh,
    Equation::OpeningAreaWindMps,
    Equation::SeriesOpenings,
    // Forces
    Equation::ThermalForceFlow,
    Equation::WindForceFlow,
    Equation::CombinedForceFlow,
    // Air volume
    Equation::SensibleAirVolume,
    Equation::LatentAirVolumeVapor,
    Equation::LatentAirVolumeHumidity,
    Equation::TotalAirVolume,
];

// ============================================================================
// Markdown Documentation Generation
// ============================================================================

/// Generate a markdown reference of every equation in the registry.
///
/// ```rust
/// use vent_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Ventilo Equations Reference"));
/// assert!(markdown.contains("Ventilation Forces"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Ventilo Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `vent equations > EQUATIONS.md`

This document lists every formula the ventilation engine evaluates, with its
variables, units, reference and implementing function.

## Unit Conventions

| Quantity | Unit |
|----------|------|
| Airflow (openings, air volume) | m³/h |
| Airflow (thermal and wind forces) | m³/min |
| Wind speed (openings, forces) | m/h |
| Wind speed (dashboard, weather data) | m/s |
| Heat | W |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 17);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(meta.source_module.starts_with("vent_core/src/"));
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Equation::all_categories() {
            assert!(
                !Equation::in_category(category).is_empty(),
                "Category {:?} is empty",
                category
            );
        }
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        assert_eq!(cats.first(), Some(&EquationCategory::EnvelopeTransmission));
        assert_eq!(cats.last(), Some(&EquationCategory::AirVolume));
    }

    #[test]
    fn test_citation() {
        assert_eq!(
            ASHRAE_VENTILATION.citation(),
            "ASHRAE Handbook - Fundamentals 2021, Ch. 16 (Ventilation and Infiltration)"
        );
        assert_eq!(CodeReference::Physics.short_form(), "Physics");
    }

    #[test]
    fn test_generate_equations_markdown() {
        let md = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().formula_plain), "Missing {:?}", eq);
        }
        assert!(md.contains("**Total Equations:** 17"));
    }
}
