//! # Tensile-Test Simulation
//!
//! Piecewise nominal stress-strain model and specimen-geometry mapping for
//! the virtual tensile test. The strain comes straight from a bounded input
//! (the "machine progress" slider); there is no time integration, every
//! output is a pure function of (material, strain).
//!
//! ## Three-Zone Model
//!
//! Thresholds `ey = Sy/E` (yield) and `eu = 0.6·ef` (necking onset):
//!
//! 1. **Elastic** (ε <= ey): Hooke's law, `σ = E·ε`
//! 2. **Hardening** (ey < ε <= eu): `σ = Sy + (Su-Sy)·√((ε-ey)/(eu-ey))`
//! 3. **Necking** (eu < ε <= ef): `σ = Su - 0.15·Su·((ε-eu)/(ef-eu))²`
//!
//! The curve is continuous at both boundaries by construction: zone 1 ends
//! at exactly Sy, zones 2 and 3 both evaluate to Su at eu, and the nominal
//! stress decays to 0.85·Su at fracture.
//!
//! ## Example
//! ```rust
//! use lab_core::calculations::traction::{evaluate, TractionInput};
//!
//! let input = TractionInput {
//!     material_name: "Structural Steel (A36)".to_string(),
//!     strain_percent: 15.0, // eps = 0.15 = eu for this steel
//! };
//! let result = evaluate(&input).unwrap();
//! assert!((result.stress_mpa - 400.0).abs() < 1e-9); // sigma(eu) = Su
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{self, Material};

/// Fractional drop of nominal stress between necking onset and fracture:
/// sigma(ef) = (1 - 0.15) * Su.
pub const SOFTENING_DROP: f64 = 0.15;

/// Undeformed gauge length of the virtual specimen (display units).
pub const GAUGE_LENGTH: f64 = 8.0;

/// Undeformed full width of the virtual specimen (display units).
pub const GAUGE_WIDTH: f64 = 1.5;

/// Uniform transverse contraction per unit strain. An ad hoc visual
/// constant approximating Poisson contraction, not a material property.
const WIDTH_CONTRACTION: f64 = 0.3;

/// Additional mid-section contraction across the necking zone, reaching
/// 40% width loss at fracture.
const NECK_CONTRACTION: f64 = 0.4;

/// Sample count for the full theoretical stress-strain curve.
const CURVE_POINTS: usize = 200;

/// Nominal stress σ(ε) in MPa for a catalog material.
///
/// Fails with `InvalidInput` when eps is outside `[0, ef]`; front-ends are
/// expected to prevent that with a slider bounded at ef.
pub fn stress(material: &Material, eps: f64) -> CalcResult<f64> {
    if !(0.0..=material.fracture_strain).contains(&eps) {
        return Err(CalcError::invalid_input(
            "eps",
            eps.to_string(),
            format!(
                "Strain must lie in [0, {}] for {}",
                material.fracture_strain, material.name
            ),
        ));
    }

    let ey = material.yield_strain();
    let eu = material.necking_onset_strain();

    let sigma = if eps <= ey {
        // Elastic zone (Hooke's law); reaches exactly Sy at ey since ey = Sy/E
        material.e_mpa * eps
    } else if eps <= eu {
        // Strain hardening, square-root shaped, Sy at ey up to Su at eu
        material.sy_mpa + (material.su_mpa - material.sy_mpa) * ((eps - ey) / (eu - ey)).sqrt()
    } else {
        // Necking: quadratic decay of the nominal stress, 0.85*Su at fracture
        let t = (eps - eu) / (material.fracture_strain - eu);
        material.su_mpa - SOFTENING_DROP * material.su_mpa * t * t
    };
    Ok(sigma)
}

/// The full theoretical curve over `[0, ef]` as (ε, σ) pairs, for plotting
/// behind the live test trace.
pub fn stress_curve(material: &Material) -> Vec<(f64, f64)> {
    (0..CURVE_POINTS)
        .map(|i| {
            let eps = material.fracture_strain * i as f64 / (CURVE_POINTS - 1) as f64;
            // In-domain by construction
            let sigma = stress(material, eps).unwrap_or(0.0);
            (eps, sigma)
        })
        .collect()
}

/// Deformed specimen outline for rendering.
///
/// A symmetric 5-station polygon, not a smooth curve: each station is an
/// (axial position, half width) pair measured from the lower grip, with the
/// outline mirrored about the specimen centerline. Any graphics layer (2D
/// canvas, SVG, plotting library) can consume this without re-deriving the
/// necking approximation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecimenProfile {
    /// Deformed gauge length `L0·(1+ε)` (display units)
    pub length: f64,
    /// Five (axial, half_width) stations: ends, two shoulders, center
    pub stations: Vec<(f64, f64)>,
}

impl SpecimenProfile {
    /// Half width at mid-length, where necking localizes.
    pub fn center_half_width(&self) -> f64 {
        self.stations[2].1
    }
}

/// Deformed specimen geometry at the given strain.
///
/// Visual-only, not physically rigorous: uniform transverse contraction of
/// `1 - 0.3·ε`, plus a local neck factor `1 - 0.4·(ε-eu)/(ef-eu)` applied to
/// the mid-length station once necking has begun. Below eu all five stations
/// share the uniform half width, so the profile is continuous at eu.
pub fn specimen_geometry(material: &Material, eps: f64) -> CalcResult<SpecimenProfile> {
    if !(0.0..=material.fracture_strain).contains(&eps) {
        return Err(CalcError::invalid_input(
            "eps",
            eps.to_string(),
            format!(
                "Strain must lie in [0, {}] for {}",
                material.fracture_strain, material.name
            ),
        ));
    }

    let length = GAUGE_LENGTH * (1.0 + eps);
    let half_width = GAUGE_WIDTH * (1.0 - WIDTH_CONTRACTION * eps) / 2.0;

    let eu = material.necking_onset_strain();
    let neck_factor = if eps > eu {
        1.0 - NECK_CONTRACTION * (eps - eu) / (material.fracture_strain - eu)
    } else {
        1.0
    };

    // Ends, shoulders at 30%/70% of the deformed length, necked center
    let stations = vec![
        (0.0, half_width),
        (0.3 * length, half_width),
        (0.5 * length, half_width * neck_factor),
        (0.7 * length, half_width),
        (length, half_width),
    ];

    Ok(SpecimenProfile { length, stations })
}

/// Input for one tensile-test evaluation.
///
/// The strain arrives as a percentage because that is what the test-progress
/// slider reports (0 to ef·100).
///
/// ## JSON Example
///
/// ```json
/// {
///   "material_name": "Structural Steel (A36)",
///   "strain_percent": 12.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TractionInput {
    /// Catalog key of the material under test
    pub material_name: String,
    /// Test progress as percent elongation, 0 <= value <= ef * 100
    pub strain_percent: f64,
}

/// Results from one tensile-test evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TractionResult {
    /// Dimensionless strain ε actually evaluated
    pub strain: f64,
    /// Nominal stress σ(ε) (MPa)
    pub stress_mpa: f64,
    /// Deformed specimen outline for rendering
    pub geometry: SpecimenProfile,
}

/// Evaluate the tensile test at one slider position.
///
/// Looks up the material, converts the percent slider value to strain, and
/// derives stress and geometry. Pure function; fails with `MaterialNotFound`
/// or `InvalidInput` and produces no partial result.
pub fn evaluate(input: &TractionInput) -> CalcResult<TractionResult> {
    let material = materials::lookup(&input.material_name)?;
    let eps = input.strain_percent / 100.0;

    Ok(TractionResult {
        strain: eps,
        stress_mpa: stress(material, eps)?,
        geometry: specimen_geometry(material, eps)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials;

    const TOL: f64 = 1e-9;

    fn steel() -> &'static Material {
        materials::lookup("Structural Steel (A36)").unwrap()
    }

    #[test]
    fn test_elastic_zone() {
        // eps = 0.001 < ey = 0.00125 -> sigma = E*eps = 200 MPa
        let sigma = stress(steel(), 0.001).unwrap();
        assert!((sigma - 200.0).abs() < TOL);
    }

    #[test]
    fn test_yield_boundary() {
        // sigma(ey) = Sy exactly, since ey = Sy/E
        let sigma = stress(steel(), steel().yield_strain()).unwrap();
        assert!((sigma - 250.0).abs() < TOL);
    }

    #[test]
    fn test_necking_onset_boundary() {
        // sigma(eu) = Su exactly
        let sigma = stress(steel(), steel().necking_onset_strain()).unwrap();
        assert!((sigma - 400.0).abs() < TOL);
    }

    #[test]
    fn test_fracture_stress() {
        // sigma(ef) = Su - 0.15*Su = 0.85*Su = 340 MPa
        let sigma = stress(steel(), steel().fracture_strain).unwrap();
        assert!((sigma - 340.0).abs() < TOL);
    }

    #[test]
    fn test_continuity_for_all_materials() {
        // The two formulas meeting at each boundary must agree there: the
        // elastic zone ends at E*ey == Sy, and both the hardening and
        // softening expressions evaluate to Su at eu.
        for mat in materials::all() {
            let ey = mat.yield_strain();
            let eu = mat.necking_onset_strain();

            assert!((mat.e_mpa * ey - mat.sy_mpa).abs() < 1e-6, "{}", mat.name);
            assert!(
                (stress(mat, ey).unwrap() - mat.sy_mpa).abs() < 1e-6,
                "{}",
                mat.name
            );
            assert!(
                (stress(mat, eu).unwrap() - mat.su_mpa).abs() < 1e-6,
                "{}",
                mat.name
            );

            // Numeric probe just past each boundary; loose tolerance since
            // the hardening curve has a vertical tangent at ey
            for boundary in [ey, eu] {
                let delta = boundary * 1e-12;
                let at = stress(mat, boundary).unwrap();
                let above = stress(mat, boundary + delta).unwrap();
                assert!(
                    (above - at).abs() < 1e-3,
                    "jump past eps={} for {}",
                    boundary,
                    mat.name
                );
            }
        }
    }

    #[test]
    fn test_hardening_monotonic() {
        for mat in materials::all() {
            let ey = mat.yield_strain();
            let eu = mat.necking_onset_strain();
            let mut prev = stress(mat, ey).unwrap();
            for i in 1..=50 {
                let eps = ey + (eu - ey) * i as f64 / 50.0;
                let sigma = stress(mat, eps).unwrap();
                assert!(sigma >= prev, "hardening not monotonic for {}", mat.name);
                prev = sigma;
            }
        }
    }

    #[test]
    fn test_strain_out_of_range() {
        assert!(stress(steel(), -0.01).is_err());
        assert!(stress(steel(), 0.26).is_err());
        let err = stress(steel(), 0.26).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_stress_curve_shape() {
        let curve = stress_curve(steel());
        assert_eq!(curve.len(), 200);
        assert!(curve[0].0.abs() < TOL && curve[0].1.abs() < TOL);
        let last = curve.last().unwrap();
        assert!((last.0 - 0.25).abs() < TOL);
        assert!((last.1 - 340.0).abs() < TOL);
        // Peak of the nominal curve is Su
        let peak = curve.iter().map(|p| p.1).fold(f64::MIN, f64::max);
        assert!(peak <= 400.0 + TOL);
    }

    #[test]
    fn test_geometry_before_necking() {
        // eps = 0.1 < eu = 0.15: straight specimen, uniform width
        let profile = specimen_geometry(steel(), 0.1).unwrap();
        assert!((profile.length - 8.0 * 1.1).abs() < TOL);

        let expected_half = 1.5 * (1.0 - 0.3 * 0.1) / 2.0;
        assert_eq!(profile.stations.len(), 5);
        for &(_, hw) in &profile.stations {
            assert!((hw - expected_half).abs() < TOL);
        }
    }

    #[test]
    fn test_geometry_necked_center() {
        // eps = 0.20, eu = 0.15, ef = 0.25 -> neck factor 1 - 0.4*0.5 = 0.8
        let profile = specimen_geometry(steel(), 0.20).unwrap();
        let uniform_half = 1.5 * (1.0 - 0.3 * 0.20) / 2.0;

        assert!((profile.stations[0].1 - uniform_half).abs() < TOL);
        assert!((profile.stations[1].1 - uniform_half).abs() < TOL);
        assert!((profile.center_half_width() - uniform_half * 0.8).abs() < TOL);
        assert!((profile.stations[3].1 - uniform_half).abs() < TOL);

        // Stations sit at 0, 0.3L, 0.5L, 0.7L, L of the deformed length
        assert!((profile.stations[2].0 - 0.5 * profile.length).abs() < TOL);
        assert!((profile.stations[4].0 - profile.length).abs() < TOL);
    }

    #[test]
    fn test_geometry_continuous_at_necking_onset() {
        let eu = steel().necking_onset_strain();
        let below = specimen_geometry(steel(), eu - 1e-9).unwrap();
        let at = specimen_geometry(steel(), eu).unwrap();
        assert!((below.center_half_width() - at.center_half_width()).abs() < 1e-6);
    }

    #[test]
    fn test_evaluate_percent_slider() {
        let result = evaluate(&TractionInput {
            material_name: "Structural Steel (A36)".to_string(),
            strain_percent: 0.1, // eps = 0.001
        })
        .unwrap();
        assert!((result.strain - 0.001).abs() < TOL);
        assert!((result.stress_mpa - 200.0).abs() < TOL);
    }

    #[test]
    fn test_evaluate_unknown_material() {
        let err = evaluate(&TractionInput {
            material_name: "Unobtainium".to_string(),
            strain_percent: 1.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_evaluate_over_travel_rejected() {
        // Slider bound is ef*100 = 25% for steel
        let err = evaluate(&TractionInput {
            material_name: "Structural Steel (A36)".to_string(),
            strain_percent: 26.0,
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_result_serialization() {
        let result = evaluate(&TractionInput {
            material_name: "Annealed Copper".to_string(),
            strain_percent: 10.0,
        })
        .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: TractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.geometry.stations.len(), 5);
        assert!((parsed.stress_mpa - result.stress_mpa).abs() < TOL);
    }
}
