//! Side faces: quads between consecutive rings

use super::set_quad;
use crate::layout::Layout;
use crate::mesh::Submesh;

/// Index lists for the four side faces
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SideIndices {
    /// Faces at z = 0 and z = Z
    pub facing_z: Vec<u32>,
    /// Faces at x = X and x = 0
    pub facing_x: Vec<u32>,
}

/// Triangulate the side faces by walking every ring
///
/// The ring's four segments alternate between the two lists. The last quad
/// of the fourth segment closes the loop onto the first vertex of the same
/// ring.
pub fn triangulate_sides(layout: &Layout) -> SideIndices {
    let resolution = layout.resolution();
    let ring = layout.ring_length();

    let mut facing_z = vec![0u32; layout.index_count(Submesh::FacingZ)];
    let mut facing_x = vec![0u32; layout.index_count(Submesh::FacingX)];
    let (mut tz, mut tx) = (0, 0);

    let segments = [
        (resolution.x, Submesh::FacingZ),
        (resolution.z, Submesh::FacingX),
        (resolution.x, Submesh::FacingZ),
        (resolution.z - 1, Submesh::FacingX),
    ];

    for y in 0..resolution.y {
        let ring_start = layout.ring_start(y);
        let mut v = ring_start;

        for (quads, submesh) in segments {
            for _ in 0..quads {
                match submesh {
                    Submesh::FacingZ => {
                        tz = set_quad(&mut facing_z, tz, v, v + 1, v + ring, v + ring + 1);
                    }
                    _ => {
                        tx = set_quad(&mut facing_x, tx, v, v + 1, v + ring, v + ring + 1);
                    }
                }
                v += 1;
            }
        }

        // v is the last vertex of the ring
        tx = set_quad(&mut facing_x, tx, v, ring_start, v + ring, ring_start + ring);
    }

    debug_assert_eq!(tz, facing_z.len());
    debug_assert_eq!(tx, facing_x.len());
    SideIndices { facing_z, facing_x }
}
