//! # vent_core - Building Ventilation Formula Engine
//!
//! `vent_core` is the computational heart of Ventilo: closed-form ventilation
//! and heat load formulas behind a clean, JSON-friendly API. All inputs and
//! outputs are serializable, so any request layer can drive the engine with
//! a route name and a JSON body.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the formula and field
//! - **Explicit Leniency**: Coercing sloppy form input is a separate, named policy
//!
//! ## Quick Start
//!
//! ```rust
//! use vent_core::calculations::window_opening::{calculate, WindowOpeningInput};
//!
//! let input = WindowOpeningInput::equal(120.0, 6.0, 0.6, 100.0);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.q, 720.0);
//!
//! // Serialize to JSON for transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"Ai\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - One module per formula (`*Input`, `*Result`, `calculate`)
//! - [`equations`] - Raw scalar formulas and the equation registry
//! - [`normalize`] - Strict and lenient reading of JSON request fields
//! - [`dispatch`] - Route name + JSON body to JSON response
//! - [`weather`] - Outdoor conditions from an external weather service
//! - [`units`] - Type-safe unit wrappers and conversion constants
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod dispatch;
pub mod equations;
pub mod errors;
pub mod normalize;
pub mod units;
pub mod weather;

// Re-export commonly used types at crate root for convenience
pub use calculations::Formula;
pub use dispatch::{evaluate, handle_request, ApiResponse};
pub use errors::{CalcError, CalcResult};
pub use normalize::{FromFields, InputPolicy};
