//! # Window Opening Sizing
//!
//! Opening areas that deliver a required air change rate by wind-driven
//! cross ventilation. Wind speed `V` is in m/h here; see
//! [`super::effective_area`] for the dashboard variant that takes m/s.
//!
//! ## Modes
//!
//! - **Equal openings** (`equal_opening = true`): `A = Q / (K × V)` and the
//!   inlet and outlet are both `A`.
//! - **Unequal openings** (`equal_opening = false`): inlet and outlet act in
//!   series, `1/A_effective = 1/A_i + 1/A_o`. The caller names the side to
//!   solve with `calc_inlet` and supplies the other side explicitly
//!   (`A_outlet` when solving the inlet, `A_inlet` when solving the outlet).
//!   The known side must be larger than `A_effective`.
//!
//! ## Example
//!
//! ```rust
//! use vent_core::calculations::window_opening::{calculate, WindowOpeningInput};
//!
//! let input = WindowOpeningInput::equal(120.0, 6.0, 0.6, 100.0);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.q, 720.0);
//! assert!((result.a.unwrap() - 12.0).abs() < 1e-12);
//! assert_eq!(result.ai, result.ao);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::ventilation::{airflow_from_ach, opening_area, series_opening_unknown};
use crate::errors::{ensure_finite, ensure_nonzero, ensure_output, CalcError, CalcResult};
use crate::normalize::{FieldReader, FromFields};

/// Route name of this formula
pub const FORMULA: &str = "window-calculations";

/// Default coefficient of flow for window openings
pub const DEFAULT_FLOW_COEFF: f64 = 0.6;

fn default_flow_coeff() -> f64 {
    DEFAULT_FLOW_COEFF
}

fn default_equal_opening() -> bool {
    true
}

/// Input parameters for window opening sizing.
///
/// ## JSON Example (unequal openings, solving the inlet)
///
/// ```json
/// {
///   "V_room": 120.0,
///   "n_ach": 6.0,
///   "K": 0.6,
///   "V": 100.0,
///   "equal_opening": false,
///   "A_effective": 2.0,
///   "calc_inlet": true,
///   "A_outlet": 4.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowOpeningInput {
    /// Room volume (m³)
    #[serde(rename = "V_room")]
    pub v_room: f64,

    /// Air changes per hour (1/h)
    pub n_ach: f64,

    /// Coefficient of flow (-)
    #[serde(rename = "K", default = "default_flow_coeff")]
    pub k: f64,

    /// Wind speed (m/h)
    #[serde(rename = "V")]
    pub v: f64,

    /// Size inlet and outlet equally
    #[serde(default = "default_equal_opening")]
    pub equal_opening: bool,

    /// Effective area of the inlet/outlet pair (m²), unequal mode only
    #[serde(rename = "A_effective", default, skip_serializing_if = "Option::is_none")]
    pub a_effective: Option<f64>,

    /// true = solve the inlet, false = solve the outlet (unequal mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calc_inlet: Option<bool>,

    /// Known inlet area (m²) when solving the outlet
    #[serde(rename = "A_inlet", default, skip_serializing_if = "Option::is_none")]
    pub a_inlet: Option<f64>,

    /// Known outlet area (m²) when solving the inlet
    #[serde(rename = "A_outlet", default, skip_serializing_if = "Option::is_none")]
    pub a_outlet: Option<f64>,
}

impl WindowOpeningInput {
    /// Equal-openings input
    pub fn equal(v_room: f64, n_ach: f64, k: f64, v: f64) -> Self {
        WindowOpeningInput {
            v_room,
            n_ach,
            k,
            v,
            equal_opening: true,
            a_effective: None,
            calc_inlet: None,
            a_inlet: None,
            a_outlet: None,
        }
    }

    /// Unequal-openings input solving the inlet from a known outlet
    pub fn solve_inlet(v_room: f64, n_ach: f64, a_effective: f64, a_outlet: f64) -> Self {
        WindowOpeningInput {
            equal_opening: false,
            a_effective: Some(a_effective),
            calc_inlet: Some(true),
            a_outlet: Some(a_outlet),
            ..Self::equal(v_room, n_ach, DEFAULT_FLOW_COEFF, 0.0)
        }
    }

    /// Unequal-openings input solving the outlet from a known inlet
    pub fn solve_outlet(v_room: f64, n_ach: f64, a_effective: f64, a_inlet: f64) -> Self {
        WindowOpeningInput {
            equal_opening: false,
            a_effective: Some(a_effective),
            calc_inlet: Some(false),
            a_inlet: Some(a_inlet),
            ..Self::equal(v_room, n_ach, DEFAULT_FLOW_COEFF, 0.0)
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("V_room", self.v_room)?;
        ensure_finite("n_ach", self.n_ach)?;
        ensure_finite("K", self.k)?;
        ensure_finite("V", self.v)?;
        for (field, value) in [
            ("A_effective", self.a_effective),
            ("A_inlet", self.a_inlet),
            ("A_outlet", self.a_outlet),
        ] {
            if let Some(v) = value {
                ensure_finite(field, v)?;
            }
        }
        Ok(())
    }
}

impl FromFields for WindowOpeningInput {
    fn from_fields(reader: &FieldReader<'_>) -> CalcResult<Self> {
        Ok(WindowOpeningInput {
            v_room: reader.number("V_room")?,
            n_ach: reader.number("n_ach")?,
            k: reader.number_or("K", DEFAULT_FLOW_COEFF)?,
            v: reader.number("V")?,
            equal_opening: reader.flag_or("equal_opening", true)?,
            a_effective: reader.optional_number("A_effective")?,
            calc_inlet: reader.optional_flag("calc_inlet")?,
            a_inlet: reader.optional_number("A_inlet")?,
            a_outlet: reader.optional_number("A_outlet")?,
        })
    }
}

/// Results from window opening sizing.
///
/// ## JSON Example
///
/// ```json
/// { "Q": 720.0, "A": 12.0, "Ai": 12.0, "Ao": 12.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowOpeningResult {
    /// Required airflow (m³/h)
    #[serde(rename = "Q")]
    pub q: f64,

    /// Opening area, equal mode only (m²)
    #[serde(rename = "A")]
    pub a: Option<f64>,

    /// Inlet area (m²)
    #[serde(rename = "Ai")]
    pub ai: f64,

    /// Outlet area (m²)
    #[serde(rename = "Ao")]
    pub ao: f64,
}

fn size_equal(input: &WindowOpeningInput, q: f64) -> CalcResult<WindowOpeningResult> {
    if input.k == 0.0 {
        return Err(CalcError::division_by_zero(FORMULA, "K"));
    }
    if input.v == 0.0 {
        return Err(CalcError::division_by_zero(FORMULA, "V"));
    }
    ensure_nonzero(FORMULA, "K*V", input.k * input.v)?;

    let a = ensure_output(FORMULA, "A", opening_area(q, input.k, input.v))?;
    Ok(WindowOpeningResult {
        q,
        a: Some(a),
        ai: a,
        ao: a,
    })
}

fn size_unequal(input: &WindowOpeningInput, q: f64) -> CalcResult<WindowOpeningResult> {
    let a_effective = input
        .a_effective
        .ok_or_else(|| CalcError::missing_field("A_effective"))?;
    let calc_inlet = input
        .calc_inlet
        .ok_or_else(|| CalcError::missing_field("calc_inlet"))?;

    let (known_field, known) = if calc_inlet {
        ("A_outlet", input.a_outlet)
    } else {
        ("A_inlet", input.a_inlet)
    };
    let a_known = known.ok_or_else(|| CalcError::missing_field(known_field))?;

    if a_effective == 0.0 {
        return Err(CalcError::division_by_zero(FORMULA, "A_effective"));
    }
    if a_known == 0.0 {
        return Err(CalcError::division_by_zero(FORMULA, known_field));
    }
    if a_effective < 0.0 {
        return Err(CalcError::invalid_domain(
            FORMULA,
            "A_effective",
            a_effective.to_string(),
            "Effective area must be positive",
        ));
    }
    if a_known <= a_effective {
        return Err(CalcError::invalid_domain(
            FORMULA,
            known_field,
            a_known.to_string(),
            format!("Must exceed A_effective ({}) for a finite positive opening", a_effective),
        ));
    }
    // Nearly equal areas can still cancel to zero in floating point
    ensure_nonzero(FORMULA, "1/A_effective-1/A_known", 1.0 / a_effective - 1.0 / a_known)?;

    let unknown_field = if calc_inlet { "Ai" } else { "Ao" };
    let unknown = ensure_output(FORMULA, unknown_field, series_opening_unknown(a_effective, a_known))?;
    let (ai, ao) = if calc_inlet { (unknown, a_known) } else { (a_known, unknown) };

    Ok(WindowOpeningResult { q, a: None, ai, ao })
}

/// Size the window openings.
///
/// # Returns
///
/// * `Ok(WindowOpeningResult)` - Airflow and opening areas
/// * `Err(CalcError::DivisionByZero)` - Zero `K`, `V` or `K × V` (equal) or zero area (unequal)
/// * `Err(CalcError::InvalidDomain)` - Known side not larger than `A_effective`, or an
///   area that overflows
/// * `Err(CalcError::InvalidInput)` - Unequal mode without its required fields
pub fn calculate(input: &WindowOpeningInput) -> CalcResult<WindowOpeningResult> {
    input.validate()?;

    let q = ensure_output(FORMULA, "Q", airflow_from_ach(input.v_room, input.n_ach))?;
    if input.equal_opening {
        size_equal(input, q)
    } else {
        size_unequal(input, q)
    }
}
