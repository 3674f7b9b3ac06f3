//! Spur gear generation with an approximate involute tooth profile.

use std::f64::consts::PI;

use procad_math::{Point3, Vec3};
use procad_mesh::Mesh;
use procad_spec::Dimensions;

/// Point on the involute of a circle with `base_radius`, at unwinding
/// angle `angle`: the path traced by a point on a taut string unwound
/// from the base circle.
fn involute_point(base_radius: f64, angle: f64) -> (f64, f64) {
    let x = base_radius * (angle.cos() + angle * angle.sin());
    let y = base_radius * (angle.sin() - angle * angle.cos());
    (x, y)
}

/// Generate a spur gear.
///
/// Dimensions: `diameter` (default `values[0] * 2`, or 50), `teeth`
/// (default 20), `values[1]` as thickness (default 10). Derived gear
/// parameters use a fixed 20° pressure angle; the module is
/// `diameter / teeth` and the root circle sits at `radius - 1.25 * module`.
///
/// Each of the two faces emits one center vertex plus four silhouette
/// samples per tooth: the first half of each tooth's angular span follows
/// the involute, the rest sits on the root circle. Every vertex carries
/// the flat face normal `(0, 0, ±1)`; tooth side walls are not modeled.
/// Faces are fan-triangulated from their own center vertex, the bottom
/// face with reversed winding so both fans face outward.
pub fn gear(dims: &Dimensions) -> Mesh {
    let teeth = dims.teeth.unwrap_or(20);
    let diameter = dims
        .diameter
        .unwrap_or_else(|| dims.value(0).map_or(50.0, |v| v * 2.0));
    let thickness = dims.value_or(1, 10.0);

    let radius = diameter / 2.0;
    let module = diameter / teeth as f64;
    let dedendum = 1.25 * module;
    let pressure_angle = 20.0_f64.to_radians();
    let base_radius = radius * pressure_angle.cos();
    let root_radius = radius - dedendum;

    // 4 silhouette samples per tooth
    let angle_step = 2.0 * PI / (teeth as f64 * 4.0);
    let half_tooth_span = PI / teeth as f64;

    let mut mesh = Mesh::new("gear");

    for face in 0..2u32 {
        let (z, nz) = if face == 0 {
            (-thickness / 2.0, -1.0)
        } else {
            (thickness / 2.0, 1.0)
        };
        let normal = Vec3::new(0.0, 0.0, nz);

        let center = mesh.push_vertex(Point3::new(0.0, 0.0, z), normal);

        for i in 0..teeth {
            let angle_offset = 2.0 * PI * i as f64 / teeth as f64;
            for j in 0..4 {
                let angle = angle_offset + j as f64 * angle_step;
                let (x, y) = if angle < angle_offset + half_tooth_span {
                    // Tooth face portion of the span
                    involute_point(base_radius, angle)
                } else {
                    // Root circle portion
                    let root_angle =
                        angle_offset + half_tooth_span + (j as f64 - 2.0) * angle_step;
                    (
                        root_radius * root_angle.cos(),
                        root_radius * root_angle.sin(),
                    )
                };
                mesh.push_vertex(Point3::new(x, y, z), normal);
            }
        }

        // Fan across each tooth's sample quadruple from this face's own
        // center vertex.
        for i in 0..teeth {
            let v = center + 1 + 4 * i;
            for k in 0..3 {
                if face == 0 {
                    mesh.push_triangle(center, v + k + 1, v + k);
                } else {
                    mesh.push_triangle(center, v + k, v + k + 1);
                }
            }
        }
    }

    mesh.parameters.teeth = Some(teeth);
    mesh.parameters.radius = Some(radius);
    mesh.parameters.thickness = Some(thickness);
    mesh.parameters.module = Some(module);
    mesh.parameters.base_radius = Some(base_radius);
    mesh
}
