//! Binary STL export

use std::io::{BufWriter, Write};
use std::path::Path;

use glam::Vec3;

use crate::mesh::MeshBuffers;

/// Write every submesh of `mesh` to an STL file
pub fn save_stl(mesh: &MeshBuffers, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    write_stl(mesh, &mut writer)?;
    writer.flush().map_err(|e| ExportError::Io(e.to_string()))?;

    tracing::info!(
        "Saved {} triangles to {}",
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}

/// Write every submesh of `mesh` as binary STL
pub fn write_stl<W: Write>(mesh: &MeshBuffers, writer: &mut W) -> Result<(), ExportError> {
    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles()
        .map(|(_, [a, b, c])| {
            let (v0, v1, v2) = (mesh.position(a), mesh.position(b), mesh.position(c));
            stl_io::Triangle {
                normal: stl_io::Normal::new(face_normal(v0, v1, v2).to_array()),
                vertices: [
                    stl_io::Vertex::new(v0.to_array()),
                    stl_io::Vertex::new(v1.to_array()),
                    stl_io::Vertex::new(v2.to_array()),
                ],
            }
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter()).map_err(|e| ExportError::Write(e.to_string()))
}

/// Unit normal `(v1 - v0) × (v2 - v0)` following the triangle order, +z for degenerate faces
fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).try_normalize().unwrap_or(Vec3::Z)
}

/// Export-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Write error: {0}")]
    Write(String),
}
