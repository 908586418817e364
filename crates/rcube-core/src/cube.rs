//! Rounded cube owned by a scene object
//!
//! Holds the current parameters together with the buffers built from them.
//! Buffers are only ever replaced wholesale, and a rejected parameter change
//! leaves the last valid mesh in place.

use glam::Vec3;

use crate::config::RoundedCubeConfig;
use crate::error::GenerateError;
use crate::generate::generate_from_config;
use crate::layout::BoxResolution;
use crate::mesh::MeshBuffers;

/// Parameters plus the mesh generated from them
#[derive(Debug, Clone)]
pub struct RoundedCube {
    config: RoundedCubeConfig,
    mesh: MeshBuffers,
    /// Successful generations so far, starting at 1
    generation: u64,
}

impl RoundedCube {
    /// Generate the initial mesh
    pub fn new(config: RoundedCubeConfig) -> Result<Self, GenerateError> {
        let mesh = generate_from_config(&config)?;
        Ok(Self {
            config,
            mesh,
            generation: 1,
        })
    }

    pub fn config(&self) -> &RoundedCubeConfig {
        &self.config
    }

    /// The last successfully generated mesh
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Centre of the cube in local space
    pub fn center(&self) -> Vec3 {
        self.mesh.center()
    }

    /// Apply new parameters, regenerating if they changed
    ///
    /// Returns whether the mesh was rebuilt. On error the previous config and
    /// mesh stay current.
    pub fn set_config(&mut self, config: RoundedCubeConfig) -> Result<bool, GenerateError> {
        if config == self.config {
            return Ok(false);
        }

        match generate_from_config(&config) {
            Ok(mesh) => {
                self.config = config;
                self.mesh = mesh;
                self.generation += 1;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(
                    "Keeping previous mesh ({}x{}x{}, roundness {}): {}",
                    self.config.resolution.x,
                    self.config.resolution.y,
                    self.config.resolution.z,
                    self.config.roundness,
                    e
                );
                Err(e)
            }
        }
    }

    pub fn set_resolution(&mut self, resolution: BoxResolution) -> Result<bool, GenerateError> {
        self.set_config(RoundedCubeConfig {
            resolution,
            ..self.config
        })
    }

    pub fn set_roundness(&mut self, roundness: u32) -> Result<bool, GenerateError> {
        self.set_config(RoundedCubeConfig {
            roundness,
            ..self.config
        })
    }
}
