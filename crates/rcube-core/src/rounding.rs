//! Projection of grid coordinates onto the rounded surface
//!
//! Each raw grid coordinate is clamped into the inner box
//! `[r, size - r]` on every axis and then pushed back out by `r` along the
//! direction from the clamped point to the raw one. Faces stay flat, edges
//! become quarter cylinders and corners become sphere octants.

use glam::Vec3;

use crate::layout::{BoxResolution, Layout};

/// A vertex on the rounded surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedVertex {
    pub position: Vec3,
    /// Outward unit normal
    pub normal: Vec3,
}

/// Rounding function for one resolution and radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounding {
    resolution: BoxResolution,
    roundness: u32,
}

impl Rounding {
    /// The caller guarantees `2 * roundness <= resolution.min_axis()`;
    /// [`Layout::plan`] enforces it.
    pub fn new(resolution: BoxResolution, roundness: u32) -> Self {
        debug_assert!(roundness <= resolution.max_roundness());
        Self {
            resolution,
            roundness,
        }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        Self::new(layout.resolution(), layout.roundness())
    }

    pub fn roundness(&self) -> u32 {
        self.roundness
    }

    /// Point of the inner box closest to a raw grid coordinate
    pub fn inner(&self, x: u32, y: u32, z: u32) -> Vec3 {
        let r = self.roundness;
        Vec3::new(
            clamp_axis(x, self.resolution.x, r) as f32,
            clamp_axis(y, self.resolution.y, r) as f32,
            clamp_axis(z, self.resolution.z, r) as f32,
        )
    }

    /// Map a raw grid coordinate to its rounded position and normal
    pub fn apply(&self, x: u32, y: u32, z: u32) -> RoundedVertex {
        let raw = Vec3::new(x as f32, y as f32, z as f32);
        let inner = self.inner(x, y, z);

        // raw == inner only happens with roundness 0
        let normal = (raw - inner)
            .try_normalize()
            .unwrap_or_else(|| self.face_direction(x, y, z));

        RoundedVertex {
            position: inner + normal * self.roundness as f32,
            normal,
        }
    }

    /// Summed outward directions of the box faces a coordinate lies on
    fn face_direction(&self, x: u32, y: u32, z: u32) -> Vec3 {
        let side = |value: u32, size: u32| {
            if value == 0 {
                -1.0
            } else if value == size {
                1.0
            } else {
                0.0
            }
        };
        Vec3::new(
            side(x, self.resolution.x),
            side(y, self.resolution.y),
            side(z, self.resolution.z),
        )
        .normalize_or_zero()
    }
}

fn clamp_axis(value: u32, size: u32, roundness: u32) -> u32 {
    if value < roundness {
        roundness
    } else if value > size - roundness {
        size - roundness
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GEOMETRY_EPSILON;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < GEOMETRY_EPSILON, "{a:?} != {b:?}");
    }

    #[test]
    fn test_flat_face_is_unchanged() {
        let rounding = Rounding::new(BoxResolution::new(4, 4, 4), 1);
        let v = rounding.apply(2, 0, 2);
        assert_vec_eq(v.position, Vec3::new(2.0, 0.0, 2.0));
        assert_vec_eq(v.normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_edge_normal_is_diagonal() {
        let rounding = Rounding::new(BoxResolution::new(4, 4, 4), 1);
        let v = rounding.apply(0, 0, 2);
        let expected = Vec3::new(-1.0, -1.0, 0.0).normalize();
        assert_vec_eq(v.normal, expected);
        assert_vec_eq(v.position, Vec3::new(1.0, 1.0, 2.0) + expected);
    }

    #[test]
    fn test_corner_normal() {
        let rounding = Rounding::new(BoxResolution::new(2, 2, 2), 1);
        let v = rounding.apply(2, 2, 2);
        let expected = Vec3::ONE.normalize();
        assert_vec_eq(v.normal, expected);
        assert_vec_eq(v.position, Vec3::ONE + expected);
    }

    #[test]
    fn test_position_at_roundness_from_inner() {
        let resolution = BoxResolution::new(6, 4, 5);
        let rounding = Rounding::new(resolution, 2);
        for (x, y, z) in [(0, 0, 0), (1, 0, 3), (6, 2, 0), (3, 4, 5), (0, 1, 1)] {
            let v = rounding.apply(x, y, z);
            let distance = (v.position - rounding.inner(x, y, z)).length();
            assert!((distance - 2.0).abs() < GEOMETRY_EPSILON);
            assert!((v.normal.length() - 1.0).abs() < GEOMETRY_EPSILON);
        }
    }

    #[test]
    fn test_zero_roundness_keeps_raw_position() {
        let rounding = Rounding::new(BoxResolution::new(3, 2, 3), 0);
        let v = rounding.apply(1, 0, 2);
        assert_eq!(v.position, Vec3::new(1.0, 0.0, 2.0));
        assert_vec_eq(v.normal, Vec3::NEG_Y);

        let corner = rounding.apply(3, 2, 0);
        assert_eq!(corner.position, Vec3::new(3.0, 2.0, 0.0));
        assert_vec_eq(corner.normal, Vec3::new(1.0, 1.0, -1.0).normalize());
    }

    #[test]
    fn test_inner_clamp() {
        let rounding = Rounding::new(BoxResolution::new(6, 4, 6), 2);
        assert_eq!(rounding.inner(0, 4, 3), Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(rounding.inner(6, 1, 5), Vec3::new(4.0, 2.0, 4.0));
    }
}
