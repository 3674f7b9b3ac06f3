//! Generators for the revolved families: shaft, cylinder, bearing, bolt,
//! cone, and sphere.

use std::f64::consts::PI;

use procad_math::{Point3, Vec3};
use procad_mesh::Mesh;
use procad_spec::Dimensions;

/// Segment count for shaft and cylinder lateral surfaces.
const CYLINDER_SEGMENTS: u32 = 32;
/// Segment count for bearing races.
const BEARING_SEGMENTS: u32 = 48;
/// Segment count for the bolt shank.
const BOLT_SEGMENTS: u32 = 16;
/// Latitude/longitude resolution for spheres.
const SPHERE_SEGMENTS: u32 = 16;

/// Push one ring position at `angle`: bottom and top vertices sharing the
/// radial unit normal.
fn push_ring_pair(mesh: &mut Mesh, radius: f64, angle: f64, z_bottom: f64, z_top: f64) {
    let x = radius * angle.cos();
    let y = radius * angle.sin();
    let normal = Vec3::new(x / radius, y / radius, 0.0);
    mesh.push_vertex(Point3::new(x, y, z_bottom), normal);
    mesh.push_vertex(Point3::new(x, y, z_top), normal);
}

/// Generate a cylindrical shaft.
///
/// Dimensions: `diameter` (default `values[0] * 2`, or 25), `values[1]` as
/// length (default 100). A ring of 33 sample positions contributes a
/// bottom and a top vertex each, with the radial direction as normal
/// (lateral-surface approximation; caps reuse the ring normals).
///
/// End caps fan from the first and last ring vertices; some cap triangles
/// are degenerate at the fan origin. Kept as a preview approximation.
pub fn shaft(dims: &Dimensions) -> Mesh {
    let diameter = dims
        .diameter
        .unwrap_or_else(|| dims.value(0).map_or(25.0, |v| v * 2.0));
    let length = dims.value_or(1, 100.0);
    let radius = diameter / 2.0;
    let segments = CYLINDER_SEGMENTS;

    let mut mesh = Mesh::new("shaft");
    for i in 0..=segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        push_ring_pair(&mut mesh, radius, angle, -length / 2.0, length / 2.0);
    }

    let top_center = mesh.vertex_count() as u32 - 1;
    for i in 0..segments {
        let bottom1 = i * 2;
        let bottom2 = ((i + 1) % segments) * 2;
        let top1 = bottom1 + 1;
        let top2 = bottom2 + 1;

        mesh.push_triangle(bottom1, top1, top2);
        mesh.push_triangle(bottom1, top2, bottom2);

        mesh.push_triangle(0, bottom1, bottom2);
        mesh.push_triangle(top_center, top2, top1);
    }

    mesh.parameters.radius = Some(radius);
    mesh.parameters.length = Some(length);
    mesh.parameters.segments = Some(segments);
    mesh
}

/// Generate an open cylinder (lateral surface only, no cap triangles).
///
/// Dimensions: `radius` (default `values[0]`, or 25), `height` (default
/// `values[1]`, or 50). Same ring layout and radial normals as [`shaft`].
pub fn cylinder(dims: &Dimensions) -> Mesh {
    let radius = dims.radius.unwrap_or_else(|| dims.value_or(0, 25.0));
    let height = dims.height.unwrap_or_else(|| dims.value_or(1, 50.0));
    let segments = CYLINDER_SEGMENTS;

    let mut mesh = Mesh::new("cylinder");
    for i in 0..=segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        push_ring_pair(&mut mesh, radius, angle, -height / 2.0, height / 2.0);
    }

    for i in 0..segments {
        let bottom1 = i * 2;
        let bottom2 = ((i + 1) % segments) * 2;
        let top1 = bottom1 + 1;
        let top2 = bottom2 + 1;

        mesh.push_triangle(bottom1, top1, top2);
        mesh.push_triangle(bottom1, top2, bottom2);
    }

    mesh.parameters.radius = Some(radius);
    mesh.parameters.height = Some(height);
    mesh.parameters.segments = Some(segments);
    mesh
}

/// Generate a bearing race as a concentric double ring.
///
/// Dimensions: outer `diameter` (default `values[0] * 2`, or 60),
/// `values[1] * 2` as inner diameter (default 30), `values[2]` as
/// thickness (default 15). Each of the 49 sample positions contributes
/// four vertices (outer top/bottom, inner top/bottom) with radial normals.
///
/// The race cross-section is not triangulated: `indices` is the identity
/// sequence over the vertices, a point-cloud placeholder flagged in
/// `parameters.note`. Not renderable as a solid.
pub fn bearing(dims: &Dimensions) -> Mesh {
    let outer_diameter = dims
        .diameter
        .unwrap_or_else(|| dims.value(0).map_or(60.0, |v| v * 2.0));
    let inner_diameter = dims.value(1).map_or(30.0, |v| v * 2.0);
    let thickness = dims.value_or(2, 15.0);

    let outer_radius = outer_diameter / 2.0;
    let inner_radius = inner_diameter / 2.0;
    let segments = BEARING_SEGMENTS;

    let mut mesh = Mesh::new("bearing");
    for i in 0..=segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        let (sin, cos) = angle.sin_cos();
        // Both rings share the radial direction as normal
        let normal = Vec3::new(cos, sin, 0.0);

        let (xo, yo) = (outer_radius * cos, outer_radius * sin);
        mesh.push_vertex(Point3::new(xo, yo, thickness / 2.0), normal);
        mesh.push_vertex(Point3::new(xo, yo, -thickness / 2.0), normal);

        let (xi, yi) = (inner_radius * cos, inner_radius * sin);
        mesh.push_vertex(Point3::new(xi, yi, thickness / 2.0), normal);
        mesh.push_vertex(Point3::new(xi, yi, -thickness / 2.0), normal);
    }

    mesh.indices = (0..mesh.vertex_count() as u32).collect();

    mesh.parameters.outer_radius = Some(outer_radius);
    mesh.parameters.inner_radius = Some(inner_radius);
    mesh.parameters.thickness = Some(thickness);
    mesh.parameters.note =
        Some("bearing race triangulation not implemented - simplified geometry".to_string());
    mesh
}

/// Generate a hex-head bolt.
///
/// Dimensions: shank `diameter` (default `values[0] * 2`, or 8),
/// `values[1]` as shank length (default 30). Head circumradius is 1.5×
/// the shank radius, head height 0.8×. The head contributes 12 vertices
/// (6 angular positions at two z levels), the shank a 17-position ring at
/// two z levels. All normals are the `(0, 0, 1)` placeholder.
///
/// Like [`bearing`], `indices` is the identity-sequence placeholder and
/// `parameters.note` flags the simplification.
pub fn bolt(dims: &Dimensions) -> Mesh {
    let diameter = dims
        .diameter
        .unwrap_or_else(|| dims.value(0).map_or(8.0, |v| v * 2.0));
    let length = dims.value_or(1, 30.0);

    let radius = diameter / 2.0;
    let head_radius = radius * 1.5;
    let head_height = radius * 0.8;
    let segments = BOLT_SEGMENTS;
    let normal = Vec3::new(0.0, 0.0, 1.0);

    let mut mesh = Mesh::new("bolt");

    // Hex head: 6 angular positions, bottom and top of the head
    for i in 0..6 {
        let angle = 2.0 * PI * i as f64 / 6.0;
        let x = head_radius * angle.cos();
        let y = head_radius * angle.sin();
        mesh.push_vertex(Point3::new(x, y, 0.0), normal);
        mesh.push_vertex(Point3::new(x, y, head_height), normal);
    }

    // Shank ring below the head
    for i in 0..=segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        let x = radius * angle.cos();
        let y = radius * angle.sin();
        mesh.push_vertex(Point3::new(x, y, head_height), normal);
        mesh.push_vertex(Point3::new(x, y, head_height + length), normal);
    }

    mesh.indices = (0..mesh.vertex_count() as u32).collect();

    mesh.parameters.radius = Some(radius);
    mesh.parameters.length = Some(length);
    mesh.parameters.head_radius = Some(head_radius);
    mesh.parameters.head_height = Some(head_height);
    mesh.parameters.note =
        Some("bolt head/shank triangulation not implemented - simplified geometry".to_string());
    mesh
}

/// Generate a pointed cone.
///
/// Dimensions: base `radius` (default `values[0]`, or 25), `height`
/// (default `values[1]`, or 50). One apex vertex with normal `(0, 0, 1)`,
/// a 33-position base ring with normal `(0, 0, -1)`, fan-triangulated
/// from the apex. A top radius is recorded in the parameters but the
/// geometry is always pointed.
pub fn cone(dims: &Dimensions) -> Mesh {
    let base_radius = dims.radius.unwrap_or_else(|| dims.value_or(0, 25.0));
    let height = dims.height.unwrap_or_else(|| dims.value_or(1, 50.0));
    let segments = CYLINDER_SEGMENTS;

    let mut mesh = Mesh::new("cone");
    mesh.push_vertex(Point3::new(0.0, 0.0, height / 2.0), Vec3::new(0.0, 0.0, 1.0));

    let base_normal = Vec3::new(0.0, 0.0, -1.0);
    for i in 0..=segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        let x = base_radius * angle.cos();
        let y = base_radius * angle.sin();
        mesh.push_vertex(Point3::new(x, y, -height / 2.0), base_normal);
    }

    for i in 1..=segments {
        let next = if i < segments { i + 1 } else { 1 };
        mesh.push_triangle(0, i, next);
    }

    mesh.parameters.base_radius = Some(base_radius);
    mesh.parameters.top_radius = Some(0.0);
    mesh.parameters.height = Some(height);
    mesh.parameters.segments = Some(segments);
    mesh
}

/// Generate a sphere with a latitude/longitude tessellation.
///
/// Dimensions: `radius` (default `values[0]`, or 25). 16 latitude bands ×
/// 16 longitude segments; normals are the normalized position vectors and
/// are exactly unit length. This is the one family with a fully valid
/// index list and exact normals.
pub fn sphere(dims: &Dimensions) -> Mesh {
    let radius = dims.radius.unwrap_or_else(|| dims.value_or(0, 25.0));
    let segments = SPHERE_SEGMENTS;
    let rings = SPHERE_SEGMENTS;

    let mut mesh = Mesh::new("sphere");
    for i in 0..=rings {
        let phi = PI * i as f64 / rings as f64;
        for j in 0..=segments {
            let theta = 2.0 * PI * j as f64 / segments as f64;

            let x = radius * phi.sin() * theta.cos();
            let y = radius * phi.sin() * theta.sin();
            let z = radius * phi.cos();

            let len = (x * x + y * y + z * z).sqrt();
            mesh.push_vertex(
                Point3::new(x, y, z),
                Vec3::new(x / len, y / len, z / len),
            );
        }
    }

    // Two triangles per quad cell between adjacent latitude bands
    for i in 0..rings {
        for j in 0..segments {
            let first = i * (segments + 1) + j;
            let second = first + segments + 1;

            mesh.push_triangle(first, second, first + 1);
            mesh.push_triangle(second, second + 1, first + 1);
        }
    }

    mesh.parameters.radius = Some(radius);
    mesh.parameters.segments = Some(segments);
    mesh.parameters.rings = Some(rings);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shaft_vertex_count() {
        let dims = Dimensions {
            diameter: Some(25.0),
            values: vec![12.5, 100.0],
            ..Default::default()
        };
        let mesh = shaft(&dims);
        // (32 + 1) ring positions * 2 vertices * 3 floats
        assert_eq!(mesh.vertices.len(), 198);
        assert_eq!(mesh.normals.len(), 198);
        assert_relative_eq!(mesh.parameters.radius.unwrap(), 12.5);
        assert_relative_eq!(mesh.parameters.length.unwrap(), 100.0);
    }

    #[test]
    fn test_shaft_topology_valid() {
        let mesh = shaft(&Dimensions::default());
        assert!(mesh.has_valid_topology());
        // 2 side + 2 cap triangles per segment
        assert_eq!(mesh.triangle_count(), 32 * 4);
    }

    #[test]
    fn test_shaft_radial_normals_unit() {
        let mesh = shaft(&Dimensions::default());
        for n in mesh.normals.chunks(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert_relative_eq!(len, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cylinder_defaults() {
        let mesh = cylinder(&Dimensions::default());
        assert_eq!(mesh.vertex_count(), 66);
        assert_eq!(mesh.triangle_count(), 64);
        assert!(mesh.has_valid_topology());
        assert_relative_eq!(mesh.parameters.radius.unwrap(), 25.0);
        assert_relative_eq!(mesh.parameters.height.unwrap(), 50.0);
    }

    #[test]
    fn test_bearing_is_point_cloud_placeholder() {
        let mesh = bearing(&Dimensions::default());
        // 49 positions * 4 vertices
        assert_eq!(mesh.vertex_count(), 196);
        // Identity sequence, not a triangle list
        assert_eq!(mesh.indices.len(), 196);
        assert!(mesh.indices.iter().enumerate().all(|(i, &v)| v == i as u32));
        assert!(mesh.parameters.note.is_some());
        assert_relative_eq!(mesh.parameters.outer_radius.unwrap(), 30.0);
        assert_relative_eq!(mesh.parameters.inner_radius.unwrap(), 15.0);
    }

    #[test]
    fn test_bolt_head_and_shank() {
        let dims = Dimensions {
            values: vec![4.0, 30.0],
            ..Default::default()
        };
        let mesh = bolt(&dims);
        // 12 head + 34 shank vertices
        assert_eq!(mesh.vertex_count(), 46);
        assert_eq!(mesh.indices.len(), 46);
        assert!(mesh.parameters.note.is_some());
        assert_relative_eq!(mesh.parameters.radius.unwrap(), 4.0);
        assert_relative_eq!(mesh.parameters.head_radius.unwrap(), 6.0);
        assert_relative_eq!(mesh.parameters.head_height.unwrap(), 3.2);
    }

    #[test]
    fn test_cone_apex_fan() {
        let mesh = cone(&Dimensions::default());
        assert_eq!(mesh.vertex_count(), 34);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(mesh.has_valid_topology());
        // Every triangle fans from the apex
        for tri in mesh.indices.chunks(3) {
            assert_eq!(tri[0], 0);
        }
        assert_relative_eq!(mesh.parameters.top_radius.unwrap(), 0.0);
    }

    #[test]
    fn test_sphere_counts() {
        let dims = Dimensions {
            radius: Some(25.0),
            ..Default::default()
        };
        let mesh = sphere(&dims);
        // (16 + 1) * (16 + 1) grid vertices * 3 floats
        assert_eq!(mesh.vertices.len(), 867);
        // 16 * 16 cells * 6 indices
        assert_eq!(mesh.indices.len(), 1536);
        assert!(mesh.has_valid_topology());
    }

    #[test]
    fn test_sphere_unit_normals() {
        let mesh = sphere(&Dimensions::default());
        for n in mesh.normals.chunks(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_radius_bound() {
        let dims = Dimensions {
            radius: Some(10.0),
            ..Default::default()
        };
        let mesh = sphere(&dims);
        for p in mesh.vertices.chunks(3) {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert_relative_eq!(r, 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_determinism() {
        let dims = Dimensions {
            diameter: Some(25.0),
            values: vec![12.5, 100.0],
            ..Default::default()
        };
        assert_eq!(shaft(&dims), shaft(&dims));
        assert_eq!(sphere(&dims), sphere(&dims));
    }
}
