//! Terrain pass: a flat ground grid drawn with the material shader so
//! it receives the same lighting and shadows as the scene.

use crate::error::RenderResult;
use crate::gl::{Gl, UniformBuffer};
use crate::pipeline::geometry::GeometryBuffers;
use crate::resources::{mesh, Material};
use glam::Vec3;

const GROUND_SIZE: f32 = 20.0;
const GROUND_CELLS: u32 = 20;

pub struct TerrainPass {
    geometry: GeometryBuffers,
}

impl TerrainPass {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let ground = Material::new("ground")
            .with_ambient(Vec3::new(0.15, 0.15, 0.15))
            .with_diffuse(Vec3::new(0.4, 0.45, 0.4))
            .with_specular(Vec3::splat(0.05), 8.0);
        let (vertices, indices) = mesh::grid(GROUND_SIZE, GROUND_CELLS);
        Ok(Self {
            geometry: GeometryBuffers::new(gl, &[ground], &vertices, &indices)?,
        })
    }

    pub fn draw_vertices(&self) {
        self.geometry.draw_vertices();
    }

    pub fn materials_buffer(&self) -> &UniformBuffer {
        self.geometry.materials_buffer()
    }
}
