//! Vertex buffer generation
//!
//! Walks the grid in the order the triangulators expect:
//!
//! ```text
//! ring 0 .. ring y      each: z=0 (+x), x=X (+z), z=Z (-x), x=0 (-z)
//! top interior grid     rows z = 1..Z-1, columns x = 1..X-1, at y = Y
//! bottom interior grid  same rows and columns, at y = 0
//! ```

use glam::UVec3;

use crate::layout::{BoxResolution, Layout};
use crate::rounding::Rounding;

/// Vertex positions and normals, index-aligned
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vertices {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

/// Raw grid coordinates in vertex-buffer order
pub fn grid_coordinates(resolution: BoxResolution) -> impl Iterator<Item = UVec3> {
    let BoxResolution { x: sx, y: sy, z: sz } = resolution;

    let rings = (0..=sy).flat_map(move |y| {
        let first = (0..=sx).map(move |x| UVec3::new(x, y, 0));
        let second = (1..=sz).map(move |z| UVec3::new(sx, y, z));
        let third = (0..sx).rev().map(move |x| UVec3::new(x, y, sz));
        let fourth = (1..sz).rev().map(move |z| UVec3::new(0, y, z));
        first.chain(second).chain(third).chain(fourth)
    });

    rings
        .chain(interior_grid(sx, sz, sy))
        .chain(interior_grid(sx, sz, 0))
}

fn interior_grid(sx: u32, sz: u32, y: u32) -> impl Iterator<Item = UVec3> {
    (1..sz).flat_map(move |z| (1..sx).map(move |x| UVec3::new(x, y, z)))
}

/// Fill the vertex buffer, rounding every grid coordinate once
pub fn generate_vertices(layout: &Layout) -> Vertices {
    let rounding = Rounding::from_layout(layout);
    let count = layout.vertex_count() as usize;

    let mut positions = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);

    for coord in grid_coordinates(layout.resolution()) {
        let vertex = rounding.apply(coord.x, coord.y, coord.z);
        positions.push(vertex.position.to_array());
        normals.push(vertex.normal.to_array());
    }

    debug_assert_eq!(positions.len(), count);
    Vertices { positions, normals }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn coords(x: u32, y: u32, z: u32) -> Vec<UVec3> {
        grid_coordinates(BoxResolution::new(x, y, z)).collect()
    }

    #[test]
    fn test_count_matches_layout() {
        for (x, y, z) in [(1, 1, 1), (2, 2, 2), (4, 2, 4), (5, 3, 1), (1, 4, 6)] {
            let layout = Layout::plan(BoxResolution::new(x, y, z), 0).unwrap();
            let vertices = generate_vertices(&layout);
            assert_eq!(vertices.positions.len(), layout.vertex_count() as usize);
            assert_eq!(vertices.normals.len(), layout.vertex_count() as usize);
        }
    }

    #[test]
    fn test_ring_order() {
        let all = coords(2, 1, 2);
        let ring: Vec<[u32; 3]> = all[..8].iter().map(|c| c.to_array()).collect();
        assert_eq!(
            ring,
            vec![
                [0, 0, 0],
                [1, 0, 0],
                [2, 0, 0],
                [2, 0, 1],
                [2, 0, 2],
                [1, 0, 2],
                [0, 0, 2],
                [0, 0, 1],
            ]
        );
        // Second ring repeats the walk one layer up
        assert_eq!(all[8], UVec3::new(0, 1, 0));
        assert_eq!(all[15], UVec3::new(0, 1, 1));
    }

    #[test]
    fn test_interior_grids_follow_rings() {
        let resolution = BoxResolution::new(3, 2, 3);
        let layout = Layout::plan(resolution, 1).unwrap();
        let all = coords(3, 2, 3);

        let top = layout.top_interior_start() as usize;
        assert_eq!(all[top], UVec3::new(1, 2, 1));
        assert_eq!(all[top + 1], UVec3::new(2, 2, 1));
        assert_eq!(all[top + 2], UVec3::new(1, 2, 2));

        let bottom = layout.bottom_interior_start() as usize;
        assert_eq!(all[bottom], UVec3::new(1, 0, 1));
        assert_eq!(all.last(), Some(&UVec3::new(2, 0, 2)));
    }

    #[test]
    fn test_coordinates_unique_and_on_surface() {
        let (sx, sy, sz) = (4, 3, 5);
        let all = coords(sx, sy, sz);
        let unique: HashSet<[u32; 3]> = all.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), all.len());

        for c in &all {
            let on_surface = c.x == 0
                || c.x == sx
                || c.y == 0
                || c.y == sy
                || c.z == 0
                || c.z == sz;
            assert!(on_surface, "{c:?} is not on the box surface");
        }
    }

    #[test]
    fn test_thin_box_has_no_interior() {
        let all = coords(1, 2, 3);
        assert_eq!(all.len(), 3 * 8);
    }
}
