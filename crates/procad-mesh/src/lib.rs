#![warn(missing_docs)]

//! Triangle mesh output contract for the procad engine.
//!
//! Every generator produces a [`Mesh`]: flat vertex/normal coordinate
//! streams, a triangle index list, and the resolved numeric parameters
//! the mesh was built from. Positions and normals are structured
//! [`Point3`]/[`Vec3`] values inside the generators and are flattened
//! only here, at the output boundary, to preserve the wire contract
//! consumed by rendering and export collaborators.

use procad_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// Resolved numeric parameters a mesh was generated from.
///
/// Each family sets only the fields it derives; everything else stays
/// `None` and is skipped during serialization. The property calculator
/// reads these back rather than integrating the mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Pitch or body radius in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Axial thickness in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Length in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Height in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Width in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Cube edge length in mm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Gear tooth count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teeth: Option<u32>,
    /// Gear module, pitch diameter / tooth count (mm per tooth).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<f64>,
    /// Base circle radius in mm: the involute base circle for gears, the
    /// base disc radius for cones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_radius: Option<f64>,
    /// Circular tessellation segment count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<u32>,
    /// Latitude band count (sphere).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rings: Option<u32>,
    /// Outer ring radius in mm (bearing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
    /// Inner ring radius in mm (bearing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    /// Hex head circumradius in mm (bolt).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_radius: Option<f64>,
    /// Hex head height in mm (bolt).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_height: Option<f64>,
    /// Base width in mm (prism/pyramid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_width: Option<f64>,
    /// Base depth in mm (pyramid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_depth: Option<f64>,
    /// Base triangle height in mm (prism).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_height: Option<f64>,
    /// Cone top radius in mm (accepted but not modeled; pointed cone only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_radius: Option<f64>,
    /// Mounting hole count (bracket).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mounting_holes: Option<u32>,
    /// Simplification note for placeholder topology.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A generated triangle mesh plus the parameters it was built from.
///
/// Invariants upheld by every generator:
/// - `vertices.len()` is a multiple of 3 (each triple is one point);
/// - `normals.len() == vertices.len()`, with `normals[i]` belonging to
///   the point at `vertices[i]`;
/// - for triangulated families, `indices.len()` is a multiple of 3 and
///   every index is `< vertex_count()`.
///
/// The bearing and bolt families are the documented exception: their
/// `indices` is the identity sequence `0..vertex_count` (a point-cloud
/// placeholder, not a triangle list) and `parameters.note` flags this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Family tag this mesh was generated for.
    #[serde(rename = "type")]
    pub family: String,
    /// Flat vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub vertices: Vec<f64>,
    /// Flat per-vertex normals, same length as `vertices`. Unit length
    /// only where the family documents it (exact for sphere; axis or
    /// radial direction vectors elsewhere).
    pub normals: Vec<f64>,
    /// Triangle index list, logically grouped in triples.
    pub indices: Vec<u32>,
    /// Resolved generation parameters.
    pub parameters: Parameters,
}

impl Mesh {
    /// Create an empty mesh for `family`.
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            vertices: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            parameters: Parameters::default(),
        }
    }

    /// Number of points.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append one point with its normal, flattening both. Returns the new
    /// vertex index.
    pub fn push_vertex(&mut self, position: Point3, normal: Vec3) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&[position.x, position.y, position.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        index
    }

    /// Append one triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Whether every index names an existing vertex and the index list
    /// forms whole triangles. False for the placeholder families.
    pub fn has_valid_topology(&self) -> bool {
        let n = self.vertex_count() as u32;
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| i < n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_triangle() -> Mesh {
        let mut mesh = Mesh::new("plate");
        let n = Vec3::new(0.0, 0.0, 1.0);
        mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), n);
        mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), n);
        mesh.push_vertex(Point3::new(0.0, 1.0, 0.0), n);
        mesh.push_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_push_vertex_flattens() {
        let mesh = one_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertices.len(), 9);
        assert_eq!(mesh.normals.len(), 9);
        assert_eq!(mesh.vertices[3..6], [1.0, 0.0, 0.0]);
        assert_eq!(mesh.normals[3..6], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_push_vertex_returns_index() {
        let mut mesh = Mesh::new("plate");
        let n = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(mesh.push_vertex(Point3::origin(), n), 0);
        assert_eq!(mesh.push_vertex(Point3::origin(), n), 1);
    }

    #[test]
    fn test_valid_topology() {
        let mut mesh = one_triangle();
        assert!(mesh.has_valid_topology());
        mesh.push_triangle(0, 1, 3);
        assert!(!mesh.has_valid_topology());
    }

    #[test]
    fn test_parameters_serialize_sparse() {
        let mut mesh = Mesh::new("cube");
        mesh.parameters.size = Some(50.0);
        let json = serde_json::to_value(&mesh).unwrap();
        assert_eq!(json["type"], "cube");
        assert_eq!(json["parameters"], serde_json::json!({"size": 50.0}));
    }
}
