//! Global constants for rcube-core

/// Name given to every generated mesh
pub const MESH_NAME: &str = "Procedural Cube";

/// Number of index lists (submeshes) in a generated mesh
pub const SUBMESH_COUNT: usize = 3;

/// Default grid resolution along the x axis
pub const DEFAULT_X_SIZE: u32 = 4;

/// Default grid resolution along the vertical y axis
pub const DEFAULT_Y_SIZE: u32 = 2;

/// Default grid resolution along the z axis
pub const DEFAULT_Z_SIZE: u32 = 4;

/// Default rounding radius, in grid cells
pub const DEFAULT_ROUNDNESS: u32 = 1;

/// Tolerance for float comparisons on generated geometry
pub const GEOMETRY_EPSILON: f32 = 1e-5;
