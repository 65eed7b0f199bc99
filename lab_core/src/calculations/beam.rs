//! # Simply-Supported Beam Analysis
//!
//! Static equilibrium solver and shear/moment field generator for a
//! single-span, simply-supported beam carrying one downward point load and
//! one full-span uniform load. No other load types are supported.
//!
//! ## Sign Convention
//! - Loads act downward, reactions upward (both entered as positive kN)
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//!
//! ## Discontinuity Policy
//! `V(x)` jumps by `-P` exactly at the load position `a`. Sample points
//! strictly greater than `a` include the jump; at `x == a` the left-limit
//! value is returned (P not yet subtracted). This is an explicit convention,
//! not floating-point luck.
//!
//! ## Example
//! ```rust
//! use lab_core::calculations::beam::{calculate, BeamInput};
//!
//! // 10 m beam, 50 kN at midspan, 10 kN/m over the full length
//! let input = BeamInput {
//!     label: "Demo".to_string(),
//!     length_m: 10.0,
//!     point_load_kn: 50.0,
//!     point_position_m: 5.0,
//!     udl_kn_m: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.reaction_left_kn - 75.0).abs() < 1e-9);
//! println!("Max moment: {:.1} kN·m", result.max_moment_knm);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Number of equally spaced sample points for the shear/moment diagrams.
///
/// A display-resolution choice (smooth plotting), not a physical one; the
/// closed-form `shear_at`/`moment_at` accessors are exact at any x.
pub const SAMPLE_POINTS: usize = 500;

/// Input parameters for a simply-supported beam.
///
/// SI units throughout: meters, kilonewtons, kilonewtons per meter.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "length_m": 10.0,
///   "point_load_kn": 50.0,
///   "point_position_m": 5.0,
///   "udl_kn_m": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    pub label: String,

    /// Span between supports L (m), must be positive
    pub length_m: f64,

    /// Point load magnitude P (kN), downward, >= 0
    pub point_load_kn: f64,

    /// Point load position a from the left support (m), 0 <= a <= L
    pub point_position_m: f64,

    /// Uniform load intensity w (kN/m) over the entire span, >= 0
    pub udl_kn_m: f64,
}

impl BeamInput {
    /// Validate input parameters.
    ///
    /// Bounded input widgets should prevent these by construction; the
    /// solver still refuses them so it never divides by zero.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Beam length must be positive",
            ));
        }
        if self.point_load_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "point_load_kn",
                self.point_load_kn.to_string(),
                "Point load must be non-negative (downward positive)",
            ));
        }
        if self.point_position_m < 0.0 || self.point_position_m > self.length_m {
            return Err(CalcError::invalid_input(
                "point_position_m",
                self.point_position_m.to_string(),
                "Load position must lie on the span [0, L]",
            ));
        }
        if self.udl_kn_m < 0.0 {
            return Err(CalcError::invalid_input(
                "udl_kn_m",
                self.udl_kn_m.to_string(),
                "Distributed load must be non-negative (downward positive)",
            ));
        }
        Ok(())
    }

    /// Support reactions (Ra, Rb) in kN, both upward.
    ///
    /// Moments about the left support give `Rb = (P·a + w·L²/2) / L`;
    /// vertical equilibrium gives `Ra = P + w·L - Rb`. Exact for this
    /// load configuration. Assumes a validated input (L > 0).
    pub fn reactions(&self) -> (f64, f64) {
        let l = self.length_m;
        let p = self.point_load_kn;
        let a = self.point_position_m;
        let w = self.udl_kn_m;

        let rb = (p * a + w * l * (l / 2.0)) / l;
        let ra = p + w * l - rb;
        (ra, rb)
    }

    /// Shear force V(x) in kN at position x (m from left support).
    ///
    /// `V(x) = Ra - w·x`, minus P for x strictly past the load. At `x == a`
    /// the left-limit value is returned.
    pub fn shear_at(&self, x_m: f64) -> f64 {
        let (ra, _) = self.reactions();
        let mut v = ra - self.udl_kn_m * x_m;
        if x_m > self.point_position_m {
            v -= self.point_load_kn;
        }
        v
    }

    /// Bending moment M(x) in kN·m at position x (m from left support).
    ///
    /// `M(x) = Ra·x - w·x²/2`, minus `P·(x - a)` for x past the load.
    /// Continuous over the whole span by construction.
    pub fn moment_at(&self, x_m: f64) -> f64 {
        let (ra, _) = self.reactions();
        let mut m = ra * x_m - self.udl_kn_m * x_m * x_m / 2.0;
        if x_m > self.point_position_m {
            m -= self.point_load_kn * (x_m - self.point_position_m);
        }
        m
    }
}

/// Results from beam analysis.
///
/// Derived, never stored: recomputed in full on every input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamResult {
    /// Left support reaction Ra (kN), upward
    pub reaction_left_kn: f64,
    /// Right support reaction Rb (kN), upward
    pub reaction_right_kn: f64,

    /// Maximum shear magnitude |V| (kN)
    pub max_shear_kn: f64,
    /// Position of maximum shear (m from left)
    pub max_shear_position_m: f64,

    /// Maximum positive moment (kN·m)
    pub max_moment_knm: f64,
    /// Position of maximum moment (m from left)
    pub max_moment_position_m: f64,

    /// Sampled (x, V(x)) pairs along the span for plotting
    pub shear_diagram: Vec<(f64, f64)>,
    /// Sampled (x, M(x)) pairs along the span for plotting
    pub moment_diagram: Vec<(f64, f64)>,
}

/// Solve the beam: reactions plus dense shear and moment diagrams.
///
/// Pure function of the input; fails with `InvalidInput` and produces no
/// partial results when the input is out of domain.
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    let (ra, rb) = input.reactions();

    let mut shear_diagram: Vec<(f64, f64)> = Vec::with_capacity(SAMPLE_POINTS);
    let mut moment_diagram: Vec<(f64, f64)> = Vec::with_capacity(SAMPLE_POINTS);

    let mut max_shear = 0.0f64;
    let mut max_shear_pos = 0.0;
    let mut max_moment = 0.0f64;
    let mut max_moment_pos = 0.0;

    for i in 0..SAMPLE_POINTS {
        let x = input.length_m * i as f64 / (SAMPLE_POINTS - 1) as f64;
        let v = input.shear_at(x);
        let m = input.moment_at(x);

        shear_diagram.push((x, v));
        moment_diagram.push((x, m));

        // Shear governs by magnitude, moment by its positive (sagging) peak
        if v.abs() > max_shear {
            max_shear = v.abs();
            max_shear_pos = x;
        }
        if m > max_moment {
            max_moment = m;
            max_moment_pos = x;
        }
    }

    Ok(BeamResult {
        reaction_left_kn: ra,
        reaction_right_kn: rb,
        max_shear_kn: max_shear,
        max_shear_position_m: max_shear_pos,
        max_moment_knm: max_moment,
        max_moment_position_m: max_moment_pos,
        shear_diagram,
        moment_diagram,
    })
}
