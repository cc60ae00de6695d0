//! Material coefficients and their GPU uniform-block layout

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Capacity of the material uniform block. The GLSL block declares the
/// same fixed-length array, so the uploaded buffer always matches the
/// block size exactly.
pub const MAX_MATERIALS: usize = 64;

/// Shading coefficients of one imported material.
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(0.5),
            shininess: 32.0,
        }
    }
}

impl Material {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: Vec3) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: Vec3) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: Vec3, shininess: f32) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    pub fn to_gpu(&self) -> GpuMaterial {
        GpuMaterial {
            ambient: [self.ambient.x, self.ambient.y, self.ambient.z, 0.0],
            diffuse: [self.diffuse.x, self.diffuse.y, self.diffuse.z, 0.0],
            specular: [
                self.specular.x,
                self.specular.y,
                self.specular.z,
                self.shininess,
            ],
        }
    }
}

/// std140 layout of one material block entry; shininess rides in
/// `specular.w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuMaterial {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

/// Pack materials into the fixed-length array the uniform block declares.
/// Anything past [`MAX_MATERIALS`] is dropped with a warning; indices past
/// the limit would misrender regardless.
pub fn pack_materials(materials: &[Material]) -> [GpuMaterial; MAX_MATERIALS] {
    if materials.len() > MAX_MATERIALS {
        log::warn!(
            "{} materials exceed the uniform block capacity of {}; extra entries dropped",
            materials.len(),
            MAX_MATERIALS
        );
    }
    let mut packed = [GpuMaterial::zeroed(); MAX_MATERIALS];
    for (slot, material) in packed.iter_mut().zip(materials.iter()) {
        *slot = material.to_gpu();
    }
    packed
}
