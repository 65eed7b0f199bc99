//! # lab_core - Strength-of-Materials Virtual Lab Engine
//!
//! `lab_core` is the computational heart of MechLab, an interactive teaching
//! environment for a strength-of-materials course. It provides the numeric
//! models behind two classroom tools: a simply-supported beam analyzer and a
//! tensile-test simulator. Page layout, sliders and plotting belong to the
//! presentation layer; this crate is the pure request/response calculator
//! they call into.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Fail-Fast**: A rejected input yields no numeric output at all
//!
//! ## Quick Start
//!
//! ```rust
//! use lab_core::calculations::beam::{calculate, BeamInput};
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     length_m: 10.0,
//!     point_load_kn: 50.0,
//!     point_position_m: 5.0,
//!     udl_kn_m: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Ra = {:.2} kN, Rb = {:.2} kN",
//!     result.reaction_left_kn, result.reaction_right_kn);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The two lab tools (beam statics, tensile test)
//! - [`materials`] - Read-only tensile-test material catalog
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use materials::Material;
