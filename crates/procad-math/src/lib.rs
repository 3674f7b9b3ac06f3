#![warn(missing_docs)]

//! Math types for the procad procedural geometry engine.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! mesh generation: points, vectors, and axis-aligned bounds.
//! All coordinates are conventionally millimeters.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Bounding box of a flat `[x0, y0, z0, x1, y1, z1, ...]` coordinate
    /// stream. Returns `None` if the stream holds no complete point.
    ///
    /// Min/max extraction is exact — no tolerance is applied.
    pub fn from_flat(coords: &[f64]) -> Option<Self> {
        let mut points = coords.chunks_exact(3);
        let first = points.next()?;
        let mut min = Point3::new(first[0], first[1], first[2]);
        let mut max = min;
        for p in points {
            min.x = min.x.min(p[0]);
            min.y = min.y.min(p[1]);
            min.z = min.z.min(p[2]);
            max.x = max.x.max(p[0]);
            max.y = max.y.max(p[1]);
            max.z = max.z.max(p[2]);
        }
        Some(Self { min, max })
    }

    /// Extent along each axis: `(x, y, z)` = `max - min` componentwise.
    pub fn extent(&self) -> (f64, f64, f64) {
        (
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_flat() {
        let coords = [
            -1.0, 2.0, 3.0, //
            5.0, -4.0, 0.0, //
            2.0, 2.0, 9.0,
        ];
        let bb = Aabb::from_flat(&coords).unwrap();
        assert_eq!(bb.min, Point3::new(-1.0, -4.0, 0.0));
        assert_eq!(bb.max, Point3::new(5.0, 2.0, 9.0));
        assert_eq!(bb.extent(), (6.0, 6.0, 9.0));
    }

    #[test]
    fn test_aabb_single_point() {
        let bb = Aabb::from_flat(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(bb.extent(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_aabb_empty() {
        assert!(Aabb::from_flat(&[]).is_none());
        // A trailing incomplete point is ignored
        assert!(Aabb::from_flat(&[1.0, 2.0]).is_none());
    }
}
