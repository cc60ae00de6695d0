//! Mesh vertex layout and generators

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Interleaved vertex as the importer flattens it and the vertex array
/// describes it: position, normal, texture coordinate, material index.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
    pub material_index: u32,
}

/// Byte stride of one interleaved vertex.
pub const VERTEX_STRIDE: i32 = std::mem::size_of::<MeshVertex>() as i32;

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3, texcoord: [f32; 2], material_index: u32) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            texcoord,
            material_index,
        }
    }
}

/// Generate a flat grid on the XZ plane centered at the origin:
/// `cells`²·2 triangles spanning `size` world units per side, normals up,
/// all vertices on material 0.
pub fn grid(size: f32, cells: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((cells + 1) * (cells + 1)) as usize);
    let mut indices = Vec::with_capacity((cells * cells * 6) as usize);
    let step = size / cells as f32;
    let half = size / 2.0;
    for z in 0..=cells {
        for x in 0..=cells {
            let px = x as f32 * step - half;
            let pz = z as f32 * step - half;
            vertices.push(MeshVertex::new(
                Vec3::new(px, 0.0, pz),
                Vec3::Y,
                [x as f32 / cells as f32, z as f32 / cells as f32],
                0,
            ));
        }
    }
    let row = cells + 1;
    for z in 0..cells {
        for x in 0..cells {
            let i = z * row + x;
            // Two CCW triangles per cell, seen from +Y.
            indices.extend_from_slice(&[i, i + row, i + 1, i + 1, i + row, i + row + 1]);
        }
    }
    (vertices, indices)
}
