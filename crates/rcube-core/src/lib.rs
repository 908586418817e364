//! Rounded Cube Core
//!
//! Procedural generation of rounded box meshes on an integer grid:
//! - Layout: vertex budget and index ranges for a resolution
//! - Rounding: positions and normals pulled onto the rounded surface
//! - Triangulate: side rings and cap grids split into three submeshes
//! - RoundedCube: parameters plus the last valid mesh
//! - Export: binary STL output

pub mod config;
pub mod constants;
pub mod cube;
pub mod error;
pub mod export;
pub mod generate;
pub mod layout;
pub mod mesh;
pub mod rounding;
pub mod topology;
pub mod triangulate;
pub mod vertices;

pub use config::*;
pub use constants::*;
pub use cube::*;
pub use error::*;
pub use export::*;
pub use generate::*;
pub use layout::*;
pub use mesh::*;
pub use rounding::*;
pub use topology::{TopologyError, TopologyReport};
pub use vertices::*;
