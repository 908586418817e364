//! Generation entry point

use crate::config::RoundedCubeConfig;
use crate::constants::MESH_NAME;
use crate::error::GenerateError;
use crate::layout::{BoxResolution, Layout};
use crate::mesh::MeshBuffers;
use crate::triangulate::{triangulate_caps, triangulate_sides};
use crate::vertices::generate_vertices;

/// Generate a rounded box mesh
///
/// Input is validated before anything is allocated. The result is fully
/// determined by the arguments.
///
/// # Example
///
/// ```rust
/// use rcube_core::{BoxResolution, Submesh, generate};
///
/// let mesh = generate(BoxResolution::new(2, 2, 2), 1).unwrap();
/// assert_eq!(mesh.vertex_count(), 26);
/// assert_eq!(mesh.indices(Submesh::FacingY).len(), 48);
/// ```
pub fn generate(resolution: BoxResolution, roundness: u32) -> Result<MeshBuffers, GenerateError> {
    let layout = Layout::plan(resolution, roundness)?;

    let vertices = generate_vertices(&layout);
    let sides = triangulate_sides(&layout);
    let caps = triangulate_caps(&layout);

    let mesh = MeshBuffers {
        name: MESH_NAME.to_string(),
        resolution,
        roundness,
        positions: vertices.positions,
        normals: vertices.normals,
        submeshes: [sides.facing_z, sides.facing_x, caps],
    };

    tracing::debug!(
        "Generated '{}' {}x{}x{} (roundness {}): {} vertices, {} triangles",
        mesh.name,
        resolution.x,
        resolution.y,
        resolution.z,
        roundness,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Generate from a stored configuration
pub fn generate_from_config(config: &RoundedCubeConfig) -> Result<MeshBuffers, GenerateError> {
    generate(config.resolution, config.roundness)
}
