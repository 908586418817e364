//! Mesh export

mod stl;

pub use stl::*;
