//! Vertex buffer layout planning
//!
//! The vertex buffer is laid out as `y + 1` horizontal rings followed by the
//! top-cap interior grid and then the bottom-cap interior grid. Everything
//! downstream addresses vertices by offsets computed from a [`Layout`], so
//! this is the single place the sizes are derived.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_X_SIZE, DEFAULT_Y_SIZE, DEFAULT_Z_SIZE};
use crate::error::GenerateError;
use crate::mesh::Submesh;

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase axis name
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of grid cells along each axis
///
/// This is grid granularity, not physical size: a resolution of `(4, 2, 4)`
/// with roundness 1 produces a box spanning `[0, 4] × [0, 2] × [0, 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxResolution {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Default for BoxResolution {
    fn default() -> Self {
        Self::new(DEFAULT_X_SIZE, DEFAULT_Y_SIZE, DEFAULT_Z_SIZE)
    }
}

impl BoxResolution {
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Resolution along a single axis
    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Smallest of the three axis resolutions
    pub fn min_axis(&self) -> u32 {
        self.x.min(self.y).min(self.z)
    }

    /// Largest roundness that still yields a non-intersecting surface
    pub fn max_roundness(&self) -> u32 {
        self.min_axis() / 2
    }

    /// Extent of the grid as a float vector
    pub fn extent(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Reject any axis below 1
    pub fn validate(&self) -> Result<(), GenerateError> {
        for axis in Axis::ALL {
            let value = self.get(axis);
            if value < 1 {
                return Err(GenerateError::InvalidResolution { axis, value });
            }
        }
        Ok(())
    }

    /// Closed-form vertex count: corners, edge runs and face interiors
    ///
    /// Saturates at `u64::MAX` for absurd resolutions. Call
    /// [`validate`](Self::validate) first; axes of 0 underflow.
    pub fn vertex_count(&self) -> u64 {
        let (x, y, z) = (self.x as u64, self.y as u64, self.z as u64);
        let corner_vertices = 8u64;
        let edge_vertices = (x + y + z - 3) * 4;
        let face_vertices = ((x - 1) * (y - 1))
            .saturating_add((x - 1) * (z - 1))
            .saturating_add((y - 1) * (z - 1))
            .saturating_mul(2);
        corner_vertices
            .saturating_add(edge_vertices)
            .saturating_add(face_vertices)
    }
}

/// Sizes and offsets shared by vertex generation and triangulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    resolution: BoxResolution,
    roundness: u32,
    ring_length: u32,
    vertex_count: u32,
    top_interior_start: u32,
    bottom_interior_start: u32,
}

impl Layout {
    /// Validate the parameters and derive every size the generator needs
    pub fn plan(resolution: BoxResolution, roundness: u32) -> Result<Self, GenerateError> {
        resolution.validate()?;

        let max = resolution.max_roundness();
        if roundness > max {
            return Err(GenerateError::DegenerateRoundness { roundness, max });
        }

        let count = resolution.vertex_count();
        let vertex_count = u32::try_from(count).map_err(|_| GenerateError::TooManyVertices {
            count,
            max: u32::MAX as u64,
        })?;

        let ring_length = 2 * (resolution.x + resolution.z);
        let interior = (resolution.x - 1) * (resolution.z - 1);
        let top_interior_start = ring_length * (resolution.y + 1);
        let bottom_interior_start = top_interior_start + interior;
        debug_assert_eq!(bottom_interior_start + interior, vertex_count);

        Ok(Self {
            resolution,
            roundness,
            ring_length,
            vertex_count,
            top_interior_start,
            bottom_interior_start,
        })
    }

    pub fn resolution(&self) -> BoxResolution {
        self.resolution
    }

    pub fn roundness(&self) -> u32 {
        self.roundness
    }

    /// Vertices per horizontal ring: `2 * (x + z)`
    pub fn ring_length(&self) -> u32 {
        self.ring_length
    }

    /// Number of rings (`y + 1`)
    pub fn ring_count(&self) -> u32 {
        self.resolution.y + 1
    }

    /// Total vertex count
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// First vertex of the ring at height `layer`
    pub fn ring_start(&self, layer: u32) -> u32 {
        layer * self.ring_length
    }

    /// Vertices in one row of a cap interior grid (`x - 1`)
    pub fn interior_row_length(&self) -> u32 {
        self.resolution.x - 1
    }

    /// Vertices in one cap interior grid
    pub fn interior_count(&self) -> u32 {
        (self.resolution.x - 1) * (self.resolution.z - 1)
    }

    /// First vertex of the top-cap interior grid
    pub fn top_interior_start(&self) -> u32 {
        self.top_interior_start
    }

    /// First vertex of the bottom-cap interior grid
    pub fn bottom_interior_start(&self) -> u32 {
        self.bottom_interior_start
    }

    /// Exact index count of a submesh list
    pub fn index_count(&self, submesh: Submesh) -> usize {
        let BoxResolution { x, y, z } = self.resolution;
        let quads = match submesh {
            Submesh::FacingZ => x as usize * y as usize,
            Submesh::FacingX => y as usize * z as usize,
            Submesh::FacingY => x as usize * z as usize,
        };
        // Two opposite faces, two triangles per quad, three indices each
        quads * 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_formula() {
        assert_eq!(BoxResolution::new(1, 1, 1).vertex_count(), 8);
        assert_eq!(BoxResolution::new(2, 2, 2).vertex_count(), 26);
        assert_eq!(BoxResolution::new(4, 2, 4).vertex_count(), 66);
    }

    #[test]
    fn test_vertex_count_matches_ring_layout() {
        for x in 1..6 {
            for y in 1..6 {
                for z in 1..6 {
                    let layout = Layout::plan(BoxResolution::new(x, y, z), 0).unwrap();
                    let rings = layout.ring_count() * layout.ring_length();
                    assert_eq!(
                        layout.vertex_count(),
                        rings + 2 * layout.interior_count(),
                        "resolution {x}x{y}x{z}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_ring_length() {
        let layout = Layout::plan(BoxResolution::new(3, 5, 2), 1).unwrap();
        assert_eq!(layout.ring_length(), 10);
        assert_eq!(layout.ring_count(), 6);
        assert_eq!(layout.ring_start(2), 20);
    }

    #[test]
    fn test_interior_offsets() {
        let layout = Layout::plan(BoxResolution::new(2, 1, 2), 0).unwrap();
        assert_eq!(layout.top_interior_start(), 16);
        assert_eq!(layout.bottom_interior_start(), 17);
        assert_eq!(layout.vertex_count(), 18);
        assert_eq!(layout.interior_row_length(), 1);
        assert_eq!(layout.interior_count(), 1);
    }

    #[test]
    fn test_index_counts() {
        let layout = Layout::plan(BoxResolution::new(3, 2, 4), 1).unwrap();
        assert_eq!(layout.index_count(Submesh::FacingZ), 72);
        assert_eq!(layout.index_count(Submesh::FacingX), 96);
        assert_eq!(layout.index_count(Submesh::FacingY), 144);
    }

    #[test]
    fn test_invalid_resolution() {
        let result = Layout::plan(BoxResolution::new(2, 0, 2), 0);
        assert_eq!(
            result,
            Err(GenerateError::InvalidResolution {
                axis: Axis::Y,
                value: 0
            })
        );
    }

    #[test]
    fn test_degenerate_roundness() {
        let result = Layout::plan(BoxResolution::new(6, 3, 6), 2);
        assert_eq!(
            result,
            Err(GenerateError::DegenerateRoundness {
                roundness: 2,
                max: 1
            })
        );
        assert!(Layout::plan(BoxResolution::new(6, 4, 6), 2).is_ok());

        // A single-layer box only admits a sharp cube
        assert!(Layout::plan(BoxResolution::new(2, 1, 2), 1).is_err());
        assert!(Layout::plan(BoxResolution::new(2, 1, 2), 0).is_ok());
    }

    #[test]
    fn test_too_many_vertices() {
        let result = Layout::plan(BoxResolution::new(100_000, 100_000, 100_000), 0);
        assert!(matches!(result, Err(GenerateError::TooManyVertices { .. })));
    }
}
