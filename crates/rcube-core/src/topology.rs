//! Surface topology validation
//!
//! A generated box must be a closed, consistently oriented 2-manifold: every
//! directed edge appears in exactly one triangle and its reverse in another.

use std::collections::HashSet;

use crate::mesh::{MeshBuffers, Submesh};

/// Counts gathered from a valid mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyReport {
    pub vertices: usize,
    /// Undirected edges
    pub edges: usize,
    pub triangles: usize,
    /// V - E + F, 2 for a closed genus-0 surface
    pub euler: i64,
}

/// First violated topology rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("{positions} positions but {normals} normals")]
    NormalCountMismatch { positions: usize, normals: usize },
    #[error("{submesh:?} index list has length {len}, not a multiple of 3")]
    PartialTriangle { submesh: Submesh, len: usize },
    #[error("{submesh:?} references vertex {index} but only {count} exist")]
    IndexOutOfRange {
        submesh: Submesh,
        index: u32,
        count: usize,
    },
    #[error("{submesh:?} triangle {triangle:?} repeats a vertex")]
    DegenerateTriangle { submesh: Submesh, triangle: [u32; 3] },
    #[error("vertex {0} is not referenced by any triangle")]
    UnreferencedVertex(u32),
    #[error("directed edge {from} -> {to} is used more than once")]
    DuplicateEdge { from: u32, to: u32 },
    #[error("edge {from} -> {to} has no opposite, surface is open")]
    BoundaryEdge { from: u32, to: u32 },
}

/// Validate the index buffers of a mesh
pub fn check(mesh: &MeshBuffers) -> Result<TopologyReport, TopologyError> {
    let count = mesh.vertex_count();
    if mesh.normals.len() != count {
        return Err(TopologyError::NormalCountMismatch {
            positions: count,
            normals: mesh.normals.len(),
        });
    }

    for submesh in Submesh::ALL {
        let list = mesh.indices(submesh);
        if list.len() % 3 != 0 {
            return Err(TopologyError::PartialTriangle {
                submesh,
                len: list.len(),
            });
        }
        if let Some(&index) = list.iter().find(|&&i| i as usize >= count) {
            return Err(TopologyError::IndexOutOfRange {
                submesh,
                index,
                count,
            });
        }
    }

    let mut referenced = vec![false; count];
    let mut directed: HashSet<(u32, u32)> = HashSet::new();
    let mut triangles = 0;

    for (submesh, triangle) in mesh.triangles() {
        let [a, b, c] = triangle;
        if a == b || b == c || c == a {
            return Err(TopologyError::DegenerateTriangle { submesh, triangle });
        }
        for (from, to) in [(a, b), (b, c), (c, a)] {
            if !directed.insert((from, to)) {
                return Err(TopologyError::DuplicateEdge { from, to });
            }
        }
        for v in triangle {
            referenced[v as usize] = true;
        }
        triangles += 1;
    }

    if let Some(v) = referenced.iter().position(|&r| !r) {
        return Err(TopologyError::UnreferencedVertex(v as u32));
    }

    if let Some(&(from, to)) = directed
        .iter()
        .filter(|&&(from, to)| !directed.contains(&(to, from)))
        .min()
    {
        return Err(TopologyError::BoundaryEdge { from, to });
    }
    let edges = directed.len() / 2;

    let report = TopologyReport {
        vertices: count,
        edges,
        triangles,
        euler: count as i64 - edges as i64 + triangles as i64,
    };
    tracing::debug!(
        "Topology ok: V={} E={} F={} (euler {})",
        report.vertices,
        report.edges,
        report.triangles,
        report.euler
    );
    Ok(report)
}
