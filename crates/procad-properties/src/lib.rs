#![warn(missing_docs)]

//! Material table and engineering property calculator for procad meshes.
//!
//! Volume is a per-family closed form over the mesh's resolved
//! parameters, not a mesh integration: gear, shaft, and cylinder use
//! `π·r²·(thickness|length|height)`; every other family uses a
//! `width × height × thickness` box with 50/50/10 mm defaults for
//! parameters the family never sets. The bounding box, in contrast, is
//! exact min/max extraction over the mesh coordinates.

use std::f64::consts::PI;

use procad_math::Aabb;
use procad_mesh::Mesh;
use serde::{Deserialize, Serialize};

/// A material with the properties the calculator consults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Material name as it appears on the wire.
    pub name: &'static str,
    /// Density in g/cm³.
    pub density: f64,
    /// Yield strength in MPa.
    pub yield_strength: f64,
}

/// The static material table. Unresolved names fall back to the first
/// entry (Steel).
pub const MATERIALS: [Material; 5] = [
    Material {
        name: "Steel",
        density: 7.85,
        yield_strength: 250.0,
    },
    Material {
        name: "Aluminum",
        density: 2.7,
        yield_strength: 95.0,
    },
    Material {
        name: "Titanium",
        density: 4.5,
        yield_strength: 880.0,
    },
    Material {
        name: "Brass",
        density: 8.5,
        yield_strength: 200.0,
    },
    Material {
        name: "Copper",
        density: 8.96,
        yield_strength: 70.0,
    },
];

/// Look up a material by exact name; unknown names resolve to Steel.
pub fn material_for(name: &str) -> &'static Material {
    MATERIALS
        .iter()
        .find(|m| m.name == name)
        .unwrap_or(&MATERIALS[0])
}

/// Bounding box extents in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Extent along X.
    pub length: f64,
    /// Extent along Y.
    pub width: f64,
    /// Extent along Z.
    pub height: f64,
}

/// Derived engineering properties for a generated mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeringProperties {
    /// Volume in mm³ (closed-form, per family).
    pub volume: f64,
    /// Mass in grams.
    pub mass: f64,
    /// Material name as requested by the caller.
    pub material: String,
    /// Density in g/cm³.
    pub density: f64,
    /// Yield strength in MPa.
    pub yield_strength: f64,
    /// Mesh-derived bounding box.
    pub bounding_box: BoundingBox,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Closed-form volume in mm³ for the mesh's family, read from its
/// resolved parameters.
fn volume(mesh: &Mesh) -> f64 {
    let p = &mesh.parameters;
    match mesh.family.as_str() {
        "gear" => {
            let r = p.radius.unwrap_or_default();
            PI * r * r * p.thickness.unwrap_or_default()
        }
        "shaft" => {
            let r = p.radius.unwrap_or_default();
            PI * r * r * p.length.unwrap_or_default()
        }
        "cylinder" => {
            let r = p.radius.unwrap_or_default();
            PI * r * r * p.height.unwrap_or_default()
        }
        // Box approximation for everything else. Families that never set
        // these parameters (cube, prism, pyramid, cone, bolt, bearing)
        // fall through to the 50/50/10 defaults.
        _ => {
            p.width.unwrap_or(50.0) * p.height.unwrap_or(50.0) * p.thickness.unwrap_or(10.0)
        }
    }
}

/// Bounding box of the mesh's vertex stream; zero extents for an empty
/// mesh.
fn bounding_box(mesh: &Mesh) -> BoundingBox {
    match Aabb::from_flat(&mesh.vertices) {
        Some(bb) => {
            let (length, width, height) = bb.extent();
            BoundingBox {
                length: round2(length),
                width: round2(width),
                height: round2(height),
            }
        }
        None => BoundingBox {
            length: 0.0,
            width: 0.0,
            height: 0.0,
        },
    }
}

/// Compute the engineering properties of `mesh` for the named material.
///
/// Volume and mass are rounded to two decimals, matching the reporting
/// precision of the downstream checklist and export collaborators. Mass
/// is derived from the unrounded volume: `volume · density / 1000`
/// (mm³ × g/cm³ → grams).
pub fn compute(mesh: &Mesh, material: &str) -> EngineeringProperties {
    let resolved = material_for(material);
    let volume = volume(mesh);
    let mass = volume * resolved.density / 1000.0;

    EngineeringProperties {
        volume: round2(volume),
        mass: round2(mass),
        material: material.to_string(),
        density: resolved.density,
        yield_strength: resolved.yield_strength,
        bounding_box: bounding_box(mesh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use procad_generators as generators;
    use procad_spec::Dimensions;

    #[test]
    fn test_material_lookup_and_fallback() {
        assert_eq!(material_for("Titanium").density, 4.5);
        assert_eq!(material_for("Brass").yield_strength, 200.0);
        // Unknown and misspelled names fall back to Steel
        assert_eq!(material_for("Unobtainium").name, "Steel");
        assert_eq!(material_for("steel").name, "Steel");
    }

    #[test]
    fn test_gear_volume_is_cylindrical() {
        let dims = Dimensions {
            diameter: Some(50.0),
            teeth: Some(20),
            values: vec![50.0, 10.0],
            ..Default::default()
        };
        let props = compute(&generators::gear(&dims), "Steel");
        assert_relative_eq!(props.volume, round2(PI * 25.0 * 25.0 * 10.0));
        assert_relative_eq!(props.mass, round2(PI * 25.0 * 25.0 * 10.0 * 7.85 / 1000.0));
    }

    #[test]
    fn test_shaft_volume() {
        let dims = Dimensions {
            diameter: Some(25.0),
            values: vec![12.5, 100.0],
            ..Default::default()
        };
        let props = compute(&generators::shaft(&dims), "Aluminum");
        assert_relative_eq!(props.volume, round2(PI * 12.5 * 12.5 * 100.0));
        assert_relative_eq!(props.density, 2.7);
    }

    #[test]
    fn test_cube_volume_uses_default_box() {
        // The cube only records `size`, so the box formula reads the
        // 50/50/10 defaults: 25000, not size³ = 125000.
        let dims = Dimensions {
            size: Some(50.0),
            ..Default::default()
        };
        let props = compute(&generators::cube(&dims), "Steel");
        assert_relative_eq!(props.volume, 25000.0);
        assert_relative_eq!(props.mass, 196.25);
    }

    #[test]
    fn test_plate_volume_from_parameters() {
        let dims = Dimensions {
            values: vec![100.0, 100.0, 5.0],
            ..Default::default()
        };
        let props = compute(&generators::plate(&dims), "Steel");
        assert_relative_eq!(props.volume, 100.0 * 100.0 * 5.0);
    }

    #[test]
    fn test_bounding_box_is_exact() {
        let dims = Dimensions {
            size: Some(50.0),
            ..Default::default()
        };
        let props = compute(&generators::cube(&dims), "Steel");
        assert_eq!(props.bounding_box.length, 50.0);
        assert_eq!(props.bounding_box.width, 50.0);
        assert_eq!(props.bounding_box.height, 50.0);
    }

    #[test]
    fn test_shaft_bounding_box() {
        let dims = Dimensions {
            diameter: Some(25.0),
            values: vec![12.5, 100.0],
            ..Default::default()
        };
        let props = compute(&generators::shaft(&dims), "Steel");
        // Ring samples include angle 0 and π, so X spans the diameter
        assert_relative_eq!(props.bounding_box.length, 25.0);
        assert_relative_eq!(props.bounding_box.height, 100.0);
    }

    #[test]
    fn test_empty_mesh_bounding_box() {
        let mesh = procad_mesh::Mesh::new("generic");
        let props = compute(&mesh, "Steel");
        assert_eq!(props.bounding_box.length, 0.0);
        assert_eq!(props.bounding_box.height, 0.0);
    }

    #[test]
    fn test_properties_serialize() {
        let props = compute(&generators::cube(&Dimensions::default()), "Titanium");
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["material"], "Titanium");
        assert_eq!(json["density"], 4.5);
        assert!(json["bounding_box"]["length"].is_number());
    }
}
