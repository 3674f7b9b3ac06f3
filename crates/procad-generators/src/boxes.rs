//! Generators for the box-topology families: cube, plate, bracket,
//! prism, pyramid, and the generic-solid fallback.
//!
//! These families share a deliberate normal simplification: every vertex
//! carries the uniform `(0, 0, 1)` normal rather than per-face normals.

use procad_math::{Point3, Vec3};
use procad_mesh::Mesh;
use procad_spec::Dimensions;

const UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Push the 8 corners of a centered box plus the 12 triangles of its 6
/// quad faces, wound outward. Corner order: front face (+z) counter-
/// clockwise, then back face (-z) in the same x/y order.
fn push_centered_box(mesh: &mut Mesh, width: f64, height: f64, thickness: f64) {
    let (hw, hh, ht) = (width / 2.0, height / 2.0, thickness / 2.0);

    let corners = [
        Point3::new(-hw, -hh, ht),
        Point3::new(hw, -hh, ht),
        Point3::new(hw, hh, ht),
        Point3::new(-hw, hh, ht),
        Point3::new(-hw, -hh, -ht),
        Point3::new(hw, -hh, -ht),
        Point3::new(hw, hh, -ht),
        Point3::new(-hw, hh, -ht),
    ];
    for corner in corners {
        mesh.push_vertex(corner, UP);
    }

    #[rustfmt::skip]
    let triangles: [u32; 36] = [
        0, 1, 2,  0, 2, 3, // front
        4, 6, 5,  4, 7, 6, // back
        0, 4, 5,  0, 5, 1, // bottom
        1, 5, 6,  1, 6, 2, // right
        2, 6, 7,  2, 7, 3, // top
        3, 7, 4,  3, 4, 0, // left
    ];
    mesh.indices.extend_from_slice(&triangles);
}

/// Generate an axis-aligned cube.
///
/// Dimensions: `size` (default `values[0]`, or 50). Only `size` is
/// recorded in the parameters; the property calculator's box-volume
/// fallback therefore reads default extents for this family.
pub fn cube(dims: &Dimensions) -> Mesh {
    let size = dims.size.unwrap_or_else(|| dims.value_or(0, 50.0));
    let half = size / 2.0;

    let mut mesh = Mesh::new("cube");
    let corners = [
        Point3::new(-half, -half, half),
        Point3::new(half, -half, half),
        Point3::new(half, half, half),
        Point3::new(-half, half, half),
        Point3::new(-half, -half, -half),
        Point3::new(half, -half, -half),
        Point3::new(half, half, -half),
        Point3::new(-half, half, -half),
    ];
    for corner in corners {
        mesh.push_vertex(corner, UP);
    }

    #[rustfmt::skip]
    let triangles: [u32; 36] = [
        0, 1, 2,  0, 2, 3, // front
        4, 6, 5,  4, 7, 6, // back
        1, 5, 6,  1, 6, 2, // right
        0, 3, 7,  0, 7, 4, // left
        3, 2, 6,  3, 6, 7, // top
        0, 4, 5,  0, 5, 1, // bottom
    ];
    mesh.indices.extend_from_slice(&triangles);

    mesh.parameters.size = Some(size);
    mesh
}

/// Generate a rectangular plate.
///
/// Dimensions: `values[0..3]` as width/height/thickness, defaulting to
/// 100 × 100 × 5.
pub fn plate(dims: &Dimensions) -> Mesh {
    let width = dims.value_or(0, 100.0);
    let height = dims.value_or(1, 100.0);
    let thickness = dims.value_or(2, 5.0);

    let mut mesh = Mesh::new("plate");
    push_centered_box(&mut mesh, width, height, thickness);

    mesh.parameters.width = Some(width);
    mesh.parameters.height = Some(height);
    mesh.parameters.thickness = Some(thickness);
    mesh
}

/// Generate a rectangular mounting bracket.
///
/// Dimensions: `values[0..3]` as width/height/thickness, defaulting to
/// 100 × 50 × 10. Beyond the box corners, two extra vertices mark a
/// mounting-hole centerline at `(-w/3, -h/3, ±t/2)`; they are cosmetic
/// only and no triangle references them. Hole and fillet geometry is not
/// modeled, which `parameters.note` flags.
pub fn bracket(dims: &Dimensions) -> Mesh {
    let width = dims.value_or(0, 100.0);
    let height = dims.value_or(1, 50.0);
    let thickness = dims.value_or(2, 10.0);

    let mut mesh = Mesh::new("bracket");
    push_centered_box(&mut mesh, width, height, thickness);

    // Mounting-hole centerline markers
    mesh.push_vertex(Point3::new(-width / 3.0, -height / 3.0, thickness / 2.0), UP);
    mesh.push_vertex(Point3::new(-width / 3.0, -height / 3.0, -thickness / 2.0), UP);

    mesh.parameters.width = Some(width);
    mesh.parameters.height = Some(height);
    mesh.parameters.thickness = Some(thickness);
    mesh.parameters.mounting_holes = Some(4);
    mesh.parameters.note =
        Some("simplified bracket - fillets and hole geometry not modeled".to_string());
    mesh
}

/// Generate a triangular prism.
///
/// Dimensions: `base_width`/`base_height`/`length` (or `values[0..3]`),
/// defaulting to 30 × 30 × 50. Two triangular end faces connected by
/// three quads, hand-enumerated.
pub fn prism(dims: &Dimensions) -> Mesh {
    let base_width = dims.base_width.unwrap_or_else(|| dims.value_or(0, 30.0));
    let base_height = dims.base_height.unwrap_or_else(|| dims.value_or(1, 30.0));
    let length = dims.length.unwrap_or_else(|| dims.value_or(2, 50.0));

    let (hw, hh, hl) = (base_width / 2.0, base_height / 2.0, length / 2.0);

    let mut mesh = Mesh::new("prism");
    let corners = [
        Point3::new(0.0, hh, hl), // front apex
        Point3::new(-hw, -hh, hl),
        Point3::new(hw, -hh, hl),
        Point3::new(0.0, hh, -hl), // back apex
        Point3::new(-hw, -hh, -hl),
        Point3::new(hw, -hh, -hl),
    ];
    for corner in corners {
        mesh.push_vertex(corner, UP);
    }

    #[rustfmt::skip]
    let triangles: [u32; 24] = [
        0, 1, 2, // front triangle
        3, 5, 4, // back triangle
        0, 2, 5,  0, 5, 3, // right side
        1, 4, 5,  1, 5, 2, // bottom
        0, 3, 4,  0, 4, 1, // left side
    ];
    mesh.indices.extend_from_slice(&triangles);

    mesh.parameters.base_width = Some(base_width);
    mesh.parameters.base_height = Some(base_height);
    mesh.parameters.length = Some(length);
    mesh
}

/// Generate a square-base pyramid.
///
/// Dimensions: `base_width`/`base_depth`/`height` (or `values[0..3]`),
/// defaulting to 30 × 30 × 40. One apex, four base corners, four side
/// triangles, and a two-triangle base.
pub fn pyramid(dims: &Dimensions) -> Mesh {
    let base_width = dims.base_width.unwrap_or_else(|| dims.value_or(0, 30.0));
    let base_depth = dims.base_depth.unwrap_or_else(|| dims.value_or(1, 30.0));
    let height = dims.height.unwrap_or_else(|| dims.value_or(2, 40.0));

    let (hw, hd, hh) = (base_width / 2.0, base_depth / 2.0, height / 2.0);

    let mut mesh = Mesh::new("pyramid");
    let corners = [
        Point3::new(0.0, 0.0, hh), // apex
        Point3::new(-hw, -hd, -hh),
        Point3::new(hw, -hd, -hh),
        Point3::new(hw, hd, -hh),
        Point3::new(-hw, hd, -hh),
    ];
    for corner in corners {
        mesh.push_vertex(corner, UP);
    }

    #[rustfmt::skip]
    let triangles: [u32; 18] = [
        0, 1, 2,  0, 2, 3,  0, 3, 4,  0, 4, 1, // sides
        1, 3, 2,  1, 4, 3, // base
    ];
    mesh.indices.extend_from_slice(&triangles);

    mesh.parameters.base_width = Some(base_width);
    mesh.parameters.base_depth = Some(base_depth);
    mesh.parameters.height = Some(height);
    mesh
}

/// Fallback generator for unrecognized family tags: a plain box with
/// `values[0..3]` as width/height/thickness, defaulting to 50 × 50 × 10.
pub fn generic_solid(dims: &Dimensions) -> Mesh {
    let width = dims.value_or(0, 50.0);
    let height = dims.value_or(1, 50.0);
    let thickness = dims.value_or(2, 10.0);

    let mut mesh = Mesh::new("generic");
    push_centered_box(&mut mesh, width, height, thickness);

    mesh.parameters.width = Some(width);
    mesh.parameters.height = Some(height);
    mesh.parameters.thickness = Some(thickness);
    mesh
}
