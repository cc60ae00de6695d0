//! Binding-slot protocol
//!
//! Single source of truth for the numbered slots that tie shader
//! declarations to buffer and texture attachments. Both sides of each
//! contract (the program's block/sampler setup and the buffer/texture
//! bind) take their number from here, so the correspondence is never
//! repeated as a bare literal.

/// Uniform block binding slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockBinding {
    Materials = 0,
}

impl BlockBinding {
    pub fn slot(self) -> u32 {
        self as u32
    }
}

/// Texture units, one per sampler this pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureUnit {
    ShadowDepth = 0,
    Screen = 1,
}

impl TextureUnit {
    pub fn unit(self) -> u32 {
        self as u32
    }
}

/// Vertex attribute locations of the interleaved mesh layout, matching
/// the `layout(location = ...)` declarations in the shaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribLocation {
    Position = 0,
    Normal = 1,
    TexCoord = 2,
    MaterialIndex = 3,
}

impl AttribLocation {
    pub fn location(self) -> u32 {
        self as u32
    }
}

/// Uniform block name declared by the material fragment shader.
pub const MATERIAL_BLOCK: &str = "MaterialBlock";
