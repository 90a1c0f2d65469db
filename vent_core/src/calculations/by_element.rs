//! # By-Element Heat Load
//!
//! Transmission heat flow through a building envelope, summed element by
//! element.
//!
//! ## Assumptions
//!
//! - Steady state, one ΔT for every element
//! - An empty element list is valid and gives zero load
//!
//! ## Example
//!
//! ```rust
//! use vent_core::calculations::by_element::{calculate, BuildingElement, ByElementInput};
//!
//! let input = ByElementInput {
//!     elements: vec![BuildingElement::new(2.0, 3.0), BuildingElement::new(1.0, 5.0)],
//!     delta_t: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.elements_ua, vec![6.0, 5.0]);
//! assert_eq!(result.q_total, 110.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::heat::{element_ua, transmission_heat_flow};
use crate::errors::{ensure_finite, ensure_output, CalcResult};
use crate::normalize::{FieldReader, FromFields};

/// Route name of this formula
pub const FORMULA: &str = "by-element";

/// One wall, roof, floor or glazing element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingElement {
    /// Thermal transmittance U (W/m²·K)
    #[serde(rename = "U")]
    pub u: f64,

    /// Element area A (m²)
    #[serde(rename = "A")]
    pub a: f64,
}

impl BuildingElement {
    pub fn new(u: f64, a: f64) -> Self {
        BuildingElement { u, a }
    }
}

/// Input parameters for the by-element heat load.
///
/// ## JSON Example
///
/// ```json
/// {
///   "elements": [{ "U": 2.0, "A": 3.0 }, { "U": 1.0, "A": 5.0 }],
///   "delta_T": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByElementInput {
    /// Envelope elements, order preserved in the result
    pub elements: Vec<BuildingElement>,

    /// Temperature difference ΔT (K)
    #[serde(rename = "delta_T")]
    pub delta_t: f64,
}

impl ByElementInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (i, element) in self.elements.iter().enumerate() {
            ensure_finite(&format!("elements[{}].U", i), element.u)?;
            ensure_finite(&format!("elements[{}].A", i), element.a)?;
        }
        ensure_finite("delta_T", self.delta_t)?;
        Ok(())
    }
}

impl FromFields for ByElementInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        let elements = reader
            .list("elements")?
            .iter()
            .map(|item| Ok(BuildingElement::new(item.number("U")?, item.number("A")?)))
            .collect::<CalcResult<Vec<_>>>()?;

        Ok(ByElementInput {
            elements,
            delta_t: reader.number("delta_T")?,
        })
    }
}

/// Results from the by-element calculation.
///
/// ## JSON Example
///
/// ```json
/// { "elements_UA": [6.0, 5.0], "Q_total": 110.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByElementResult {
    /// U×A per element (W/K), aligned with the input list
    #[serde(rename = "elements_UA")]
    pub elements_ua: Vec<f64>,

    /// Total transmission load ΣUA × ΔT (W)
    #[serde(rename = "Q_total")]
    pub q_total: f64,
}

impl ByElementResult {
    /// Total envelope conductance ΣUA (W/K)
    pub fn total_ua(&self) -> f64 {
        self.elements_ua.iter().sum()
    }
}

/// Calculate the by-element transmission heat load.
///
/// # Returns
///
/// * `Ok(ByElementResult)` - Per-element UA and total load
/// * `Err(CalcError::InvalidInput)` - If any value is NaN or infinite
/// * `Err(CalcError::InvalidDomain)` - If a UA or the total load overflows
pub fn calculate(input: &ByElementInput) -> CalcResult<ByElementResult> {
    input.validate()?;

    let elements_ua = input
        .elements
        .iter()
        .enumerate()
        .map(|(i, e)| ensure_output(FORMULA, &format!("elements_UA[{}]", i), element_ua(e.u, e.a)))
        .collect::<CalcResult<Vec<f64>>>()?;
    let total_ua: f64 = elements_ua.iter().sum();

    Ok(ByElementResult {
        q_total: ensure_output(FORMULA, "Q_total", transmission_heat_flow(total_ua, input.delta_t))?,
        elements_ua,
    })
}
