//! Geometry and material data shared between import and the render passes

pub mod material;
pub mod mesh;

pub use material::{GpuMaterial, Material, MAX_MATERIALS};
pub use mesh::{MeshVertex, VERTEX_STRIDE};
