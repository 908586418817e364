//! Generated mesh buffers handed to the renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::SUBMESH_COUNT;
use crate::layout::BoxResolution;

/// One of the three index lists, grouped by dominant outward axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Submesh {
    /// Side faces at z = 0 and z = Z
    FacingZ = 0,
    /// Side faces at x = 0 and x = X
    FacingX = 1,
    /// Top and bottom caps
    FacingY = 2,
}

impl Submesh {
    pub const ALL: [Submesh; SUBMESH_COUNT] = [Submesh::FacingZ, Submesh::FacingX, Submesh::FacingY];

    /// Material slot of this submesh
    pub fn slot(&self) -> usize {
        *self as usize
    }
}

/// Interleaved vertex record for GPU vertex buffers
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Vertex buffer plus three triangle index lists
///
/// Built once per generation and never mutated afterwards; a parameter
/// change produces a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub name: String,
    pub resolution: BoxResolution,
    pub roundness: u32,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// Index lists in [`Submesh::slot`] order
    pub submeshes: [Vec<u32>; SUBMESH_COUNT],
}

impl MeshBuffers {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Triangles across all submeshes
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|list| list.len() / 3).sum()
    }

    /// Index list of one submesh
    #[inline]
    pub fn indices(&self, submesh: Submesh) -> &[u32] {
        &self.submeshes[submesh.slot()]
    }

    /// Index lists paired with their submesh, in slot order
    pub fn submeshes(&self) -> impl Iterator<Item = (Submesh, &[u32])> + '_ {
        Submesh::ALL
            .into_iter()
            .map(move |submesh| (submesh, self.indices(submesh)))
    }

    /// Iterate all triangles with the submesh they belong to
    pub fn triangles(&self) -> impl Iterator<Item = (Submesh, [u32; 3])> + '_ {
        self.submeshes().flat_map(move |(submesh, list)| {
            list.chunks_exact(3)
                .map(move |tri| (submesh, [tri[0], tri[1], tri[2]]))
        })
    }

    /// Position of a vertex
    #[inline]
    pub fn position(&self, index: u32) -> Vec3 {
        Vec3::from(self.positions[index as usize])
    }

    /// Normal of a vertex
    #[inline]
    pub fn normal(&self, index: u32) -> Vec3 {
        Vec3::from(self.normals[index as usize])
    }

    /// Axis-aligned bounds of the positions as (min, max)
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.positions.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        let mut min = Vec3::from(*first);
        let mut max = min;
        for p in &self.positions[1..] {
            let p = Vec3::from(*p);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Centre of the grid the box was generated on
    pub fn center(&self) -> Vec3 {
        self.resolution.extent() / 2.0
    }

    /// Positions and normals interleaved for upload
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| MeshVertex { position, normal })
            .collect()
    }

    /// Raw bytes of an interleaved vertex slice
    pub fn vertex_bytes(vertices: &[MeshVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
