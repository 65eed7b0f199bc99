//! # Lab Calculations
//!
//! Each virtual-lab tool follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> CalcResult<*Result>` - Pure calculation function
//!
//! Every result is recomputed in full from explicit inputs on each call;
//! there is no incremental state, no caching, no background computation.
//!
//! ## Available Tools
//!
//! - [`beam`] - Simply-supported beam statics (reactions, shear, moment)
//! - [`traction`] - Tensile-test simulation (stress-strain, specimen necking)

pub mod beam;
pub mod traction;

// Re-export commonly used types
pub use beam::{BeamInput, BeamResult};
pub use traction::{SpecimenProfile, TractionInput, TractionResult};
