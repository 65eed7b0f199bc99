//! # Material Catalog
//!
//! Mechanical properties for the tensile-test materials. The catalog is a
//! process-wide read-only table built once at startup; lookups are by exact
//! display name, matching the selection widget of any front-end.
//!
//! Property values are nominal engineering approximations in MPa, suitable
//! for teaching, not for design.
//!
//! ## Example
//!
//! ```rust
//! use lab_core::materials;
//!
//! let steel = materials::lookup("Structural Steel (A36)").unwrap();
//! assert_eq!(steel.e_mpa, 200_000.0);
//! assert_eq!(steel.sy_mpa, 250.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Mechanical properties of a tensile-test material.
///
/// Immutable once constructed; the catalog owns the canonical instances and
/// hands out `'static` references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Display name, also the catalog lookup key
    pub name: String,
    /// Elastic modulus E (MPa)
    pub e_mpa: f64,
    /// Yield stress Sy (MPa)
    pub sy_mpa: f64,
    /// Ultimate stress Su (MPa)
    pub su_mpa: f64,
    /// Fracture strain ef (dimensionless, 0 < ef < 1)
    pub fracture_strain: f64,
}

/// Fraction of the fracture strain at which necking begins.
///
/// A modeling approximation, not a measured quantity: the nominal
/// stress-strain curve peaks at eu = 0.6 * ef.
pub const NECKING_ONSET_RATIO: f64 = 0.6;

impl Material {
    fn new(name: &str, e_mpa: f64, sy_mpa: f64, su_mpa: f64, fracture_strain: f64) -> Self {
        Material {
            name: name.to_string(),
            e_mpa,
            sy_mpa,
            su_mpa,
            fracture_strain,
        }
    }

    /// Yield strain ey = Sy / E, the elastic/plastic zone boundary.
    pub fn yield_strain(&self) -> f64 {
        self.sy_mpa / self.e_mpa
    }

    /// Onset-of-necking strain eu = 0.6 * ef, the plastic/necking boundary.
    pub fn necking_onset_strain(&self) -> f64 {
        NECKING_ONSET_RATIO * self.fracture_strain
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The baked-in material table. Values are the course's reference set.
static CATALOG: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        Material::new("Structural Steel (A36)", 200_000.0, 250.0, 400.0, 0.25),
        Material::new("Aluminum (6061-T6)", 69_000.0, 276.0, 310.0, 0.12),
        Material::new("Annealed Copper", 110_000.0, 33.0, 210.0, 0.45),
    ]
});

/// All catalog materials, in presentation order.
pub fn all() -> &'static [Material] {
    &CATALOG
}

/// Material names for UI selection lists.
pub fn material_names() -> Vec<&'static str> {
    CATALOG.iter().map(|m| m.name.as_str()).collect()
}

/// Look up a material by its exact display name.
pub fn lookup(name: &str) -> CalcResult<&'static Material> {
    CATALOG
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| CalcError::material_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        assert_eq!(all().len(), 3);
        assert_eq!(
            material_names(),
            vec![
                "Structural Steel (A36)",
                "Aluminum (6061-T6)",
                "Annealed Copper"
            ]
        );
    }

    #[test]
    fn test_lookup_steel() {
        let steel = lookup("Structural Steel (A36)").unwrap();
        assert_eq!(steel.e_mpa, 200_000.0);
        assert_eq!(steel.sy_mpa, 250.0);
        assert_eq!(steel.su_mpa, 400.0);
        assert_eq!(steel.fracture_strain, 0.25);
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("Unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(
            err,
            CalcError::MaterialNotFound {
                material_name: "Unobtainium".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_case_exact() {
        assert!(lookup("structural steel (a36)").is_err());
    }

    #[test]
    fn test_derived_strains() {
        let steel = lookup("Structural Steel (A36)").unwrap();
        assert!((steel.yield_strain() - 0.00125).abs() < 1e-12);
        assert!((steel.necking_onset_strain() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_properties_physically_ordered() {
        for mat in all() {
            assert!(mat.e_mpa > 0.0);
            assert!(mat.sy_mpa > 0.0 && mat.sy_mpa < mat.su_mpa, "{}", mat.name);
            assert!(
                mat.fracture_strain > 0.0 && mat.fracture_strain < 1.0,
                "{}",
                mat.name
            );
            // Yield must precede necking onset for the three-zone model
            assert!(mat.yield_strain() < mat.necking_onset_strain(), "{}", mat.name);
        }
    }

    #[test]
    fn test_material_serialization() {
        let steel = lookup("Structural Steel (A36)").unwrap();
        let json = serde_json::to_string(steel).unwrap();
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(*steel, parsed);
    }
}
