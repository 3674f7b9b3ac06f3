#![warn(missing_docs)]

//! Component specification wire types for the procad engine.
//!
//! These types mirror the JSON records exchanged with the external
//! description-parsing front end: a component family tag, a sparse
//! numeric dimension record, and a material name. They are purely
//! declarative — no geometry, just the request.
//!
//! Dimension fields are all optional. A missing field is resolved to a
//! family-specific default at generator entry, so generation never fails
//! on incomplete input.

use serde::{Deserialize, Serialize};

/// The closed set of component families the engine knows how to generate.
///
/// Tags outside this set route to the generic-solid fallback generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentFamily {
    /// Spur gear with approximate involute teeth.
    Gear,
    /// Cylindrical shaft with end caps.
    Shaft,
    /// Concentric double-ring bearing race.
    Bearing,
    /// Rectangular mounting bracket.
    Bracket,
    /// Rectangular plate.
    Plate,
    /// Hex-head bolt with cylindrical shank.
    Bolt,
    /// Axis-aligned cube.
    Cube,
    /// Triangular prism.
    Prism,
    /// Cylinder along the Z axis.
    Cylinder,
    /// Sphere centered at the origin.
    Sphere,
    /// Pointed cone along the Z axis.
    Cone,
    /// Square-base pyramid.
    Pyramid,
}

/// All known families, in registry order.
pub const ALL_FAMILIES: [ComponentFamily; 12] = [
    ComponentFamily::Gear,
    ComponentFamily::Shaft,
    ComponentFamily::Bearing,
    ComponentFamily::Bracket,
    ComponentFamily::Plate,
    ComponentFamily::Bolt,
    ComponentFamily::Cube,
    ComponentFamily::Prism,
    ComponentFamily::Cylinder,
    ComponentFamily::Sphere,
    ComponentFamily::Cone,
    ComponentFamily::Pyramid,
];

impl ComponentFamily {
    /// Parse a family tag. Returns `None` for tags outside the known set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gear" => Some(Self::Gear),
            "shaft" => Some(Self::Shaft),
            "bearing" => Some(Self::Bearing),
            "bracket" => Some(Self::Bracket),
            "plate" => Some(Self::Plate),
            "bolt" => Some(Self::Bolt),
            "cube" => Some(Self::Cube),
            "prism" => Some(Self::Prism),
            "cylinder" => Some(Self::Cylinder),
            "sphere" => Some(Self::Sphere),
            "cone" => Some(Self::Cone),
            "pyramid" => Some(Self::Pyramid),
            _ => None,
        }
    }

    /// The wire tag for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gear => "gear",
            Self::Shaft => "shaft",
            Self::Bearing => "bearing",
            Self::Bracket => "bracket",
            Self::Plate => "plate",
            Self::Bolt => "bolt",
            Self::Cube => "cube",
            Self::Prism => "prism",
            Self::Cylinder => "cylinder",
            Self::Sphere => "sphere",
            Self::Cone => "cone",
            Self::Pyramid => "pyramid",
        }
    }
}

/// Sparse dimension record. Field meaning is family-specific; `values` is
/// an ordered list of raw extracted numbers (e.g. `[radius, length]` for a
/// shaft). Every field is optional and carries a family-specific default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Ordered raw numeric values; interpretation depends on the family.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<f64>,
    /// Diameter in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    /// Radius in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Height in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Length in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Width in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Gear tooth count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teeth: Option<u32>,
    /// Uniform size (cube edge) in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Base width (prism/pyramid) in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_width: Option<f64>,
    /// Base depth (pyramid) in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_depth: Option<f64>,
    /// Base height (prism cross-section) in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_height: Option<f64>,
}

impl Dimensions {
    /// The `i`-th raw value, if declared. Never reads past the end of
    /// `values`.
    pub fn value(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// The `i`-th raw value, or `default` if not declared.
    pub fn value_or(&self, i: usize, default: f64) -> f64 {
        self.value(i).unwrap_or(default)
    }
}

fn default_material() -> String {
    "Steel".to_string()
}

/// A complete generation request, as produced by the external parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Family tag. Tags outside [`ComponentFamily`] route to the
    /// generic-solid fallback.
    #[serde(rename = "type")]
    pub family: String,
    /// Sparse extracted dimensions.
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Material name; unresolved names default to Steel.
    #[serde(default = "default_material")]
    pub material: String,
}

impl ComponentSpec {
    /// Build a spec for `family` with the given dimensions and material.
    pub fn new(family: &str, dimensions: Dimensions, material: &str) -> Self {
        Self {
            family: family.to_string(),
            dimensions,
            material: material.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_tag_round_trip() {
        for family in ALL_FAMILIES {
            assert_eq!(ComponentFamily::from_tag(family.as_str()), Some(family));
        }
        assert_eq!(ComponentFamily::from_tag("widget"), None);
        assert_eq!(ComponentFamily::from_tag("Gear"), None);
    }

    #[test]
    fn test_family_serde_as_lowercase_tag() {
        let json = serde_json::to_string(&ComponentFamily::Gear).unwrap();
        assert_eq!(json, "\"gear\"");
        let back: ComponentFamily = serde_json::from_str("\"pyramid\"").unwrap();
        assert_eq!(back, ComponentFamily::Pyramid);
    }

    #[test]
    fn test_dimensions_value_access_is_bounded() {
        let dims = Dimensions {
            values: vec![25.0, 10.0],
            ..Default::default()
        };
        assert_eq!(dims.value(0), Some(25.0));
        assert_eq!(dims.value(1), Some(10.0));
        assert_eq!(dims.value(2), None);
        assert_eq!(dims.value_or(2, 15.0), 15.0);
    }

    #[test]
    fn test_spec_from_parser_json() {
        // The shape the description parser emits: sparse fields only.
        let json = r#"{
            "type": "gear",
            "dimensions": {"values": [50.0, 10.0], "teeth": 20, "diameter": 50.0},
            "material": "Titanium"
        }"#;
        let spec: ComponentSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.family, "gear");
        assert_eq!(spec.dimensions.teeth, Some(20));
        assert_eq!(spec.dimensions.diameter, Some(50.0));
        assert_eq!(spec.material, "Titanium");
    }

    #[test]
    fn test_spec_defaults() {
        let spec: ComponentSpec = serde_json::from_str(r#"{"type": "cube"}"#).unwrap();
        assert_eq!(spec.material, "Steel");
        assert!(spec.dimensions.values.is_empty());
        assert_eq!(spec.dimensions.size, None);
    }

    #[test]
    fn test_sparse_dimensions_serialize_sparse() {
        let dims = Dimensions {
            radius: Some(25.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&dims).unwrap();
        assert_eq!(json, r#"{"radius":25.0}"#);
    }
}
