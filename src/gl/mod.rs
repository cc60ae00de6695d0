//! GL API boundary and resource ownership layer
//!
//! Everything that talks to OpenGL goes through the [`GlApi`] trait. The
//! production implementation wraps a [`glow::Context`]; tests substitute a
//! call-recording double. The RAII wrappers in the submodules own exactly
//! one GL object each and release it on drop.

pub mod buffer;
pub mod glow_backend;
pub mod shader;
pub mod texture;
pub mod vertex_array;

#[cfg(test)]
pub(crate) mod recording;

pub use buffer::{ElementBuffer, UniformBuffer, VertexBuffer};
pub use glow_backend::GlowBackend;
pub use shader::ShaderProgram;
pub use texture::{Framebuffer, Texture};
pub use vertex_array::VertexArray;

use crate::error::RenderResult;
use std::rc::Rc;

/// Shared reference to the GL API.
///
/// The whole renderer is single-threaded and issues commands immediately,
/// so `Rc` (not `Arc`) is the right sharing primitive.
pub type Gl = Rc<dyn GlApi>;

/// Opaque GL object name. `0` is the canonical released sentinel, matching
/// the underlying API's null object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlHandle(pub(crate) u32);

impl GlHandle {
    pub const RELEASED: Self = Self(0);

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn is_released(self) -> bool {
        self.0 == 0
    }
}

/// Location of a uniform within a linked program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLocation(pub u32);

/// Buffer binding targets used by this renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    Vertex,
    Element,
    Uniform,
}

/// Buffer usage hint for data uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times.
    Static,
    /// Re-uploaded frequently.
    Stream,
}

/// Shader stage identifier, carried in compile errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullFaceMode {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontFace {
    Cw,
    Ccw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    Triangles,
    TriangleStrip,
    Points,
}

/// Texture storage formats used by this renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Depth24,
    Rgba8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

/// Framebuffer attachment points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    Depth,
    Color0,
}

/// Result of a framebuffer completeness check. Anything but `Complete`
/// carries the raw GL status code for the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete,
    Incomplete(u32),
}

/// Snapshot of the rasterizer flags a pass may touch.
///
/// Passes snapshot this on `begin()` and re-apply it on `end()` so that no
/// rasterizer-state change leaks across a pass boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterizerState {
    pub depth_test: bool,
    pub cull_face: bool,
    pub cull_face_mode: CullFaceMode,
    pub front_face: FrontFace,
}

impl RasterizerState {
    /// Read the current global state.
    pub fn read(gl: &dyn GlApi) -> Self {
        Self {
            depth_test: gl.depth_test(),
            cull_face: gl.cull_face(),
            cull_face_mode: gl.cull_face_mode(),
            front_face: gl.front_face(),
        }
    }

    /// Force the global state to match this snapshot.
    pub fn apply(&self, gl: &dyn GlApi) {
        gl.set_depth_test(self.depth_test);
        gl.set_cull_face(self.cull_face);
        gl.set_cull_face_mode(self.cull_face_mode);
        gl.set_front_face(self.front_face);
    }
}

/// The exact OpenGL-ES-like surface this renderer issues.
///
/// Object creation returns [`crate::error::RenderError::ResourceExhausted`]
/// when the API refuses a handle; that condition is fatal, there is no
/// recovery path. All methods take `&self`: the underlying context is a
/// single process-wide state machine and implementations use interior
/// mutability where they need it.
pub trait GlApi {
    // --- buffers ---
    fn create_buffer(&self) -> RenderResult<GlHandle>;
    fn delete_buffer(&self, buffer: GlHandle);
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<GlHandle>);
    /// Full-replace upload into the buffer currently bound to `target`.
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);
    /// Attach the buffer to an indexed binding slot (uniform blocks).
    fn bind_buffer_base(&self, target: BufferTarget, slot: u32, buffer: Option<GlHandle>);

    // --- vertex arrays ---
    fn create_vertex_array(&self) -> RenderResult<GlHandle>;
    fn delete_vertex_array(&self, vao: GlHandle);
    fn bind_vertex_array(&self, vao: Option<GlHandle>);
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Float attribute pointer into the currently bound vertex buffer.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);
    /// Integer attribute pointer into the currently bound vertex buffer.
    fn vertex_attrib_pointer_u32(&self, index: u32, size: i32, stride: i32, offset: i32);

    // --- textures ---
    fn create_texture(&self) -> RenderResult<GlHandle>;
    fn delete_texture(&self, texture: GlHandle);
    /// Bind to the 2D target of the currently active texture unit.
    fn bind_texture(&self, texture: Option<GlHandle>);
    fn active_texture(&self, unit: u32);
    /// Allocate level-0 storage for the currently bound texture.
    fn tex_image_2d(&self, format: TextureFormat, width: i32, height: i32);
    fn tex_filter(&self, filter: TextureFilter);
    fn tex_wrap_clamp(&self);

    // --- framebuffers ---
    fn create_framebuffer(&self) -> RenderResult<GlHandle>;
    fn delete_framebuffer(&self, fbo: GlHandle);
    fn bind_framebuffer(&self, fbo: Option<GlHandle>);
    /// Attach a texture image to the currently bound framebuffer.
    fn framebuffer_texture_2d(&self, attachment: Attachment, texture: GlHandle, level: i32);
    fn check_framebuffer_status(&self) -> FramebufferStatus;

    // --- shaders and programs ---
    fn create_shader(&self, stage: ShaderStage) -> RenderResult<GlHandle>;
    fn delete_shader(&self, shader: GlHandle);
    fn shader_source(&self, shader: GlHandle, source: &str);
    fn compile_shader(&self, shader: GlHandle);
    fn compile_status(&self, shader: GlHandle) -> bool;
    fn shader_info_log(&self, shader: GlHandle) -> String;
    fn create_program(&self) -> RenderResult<GlHandle>;
    fn delete_program(&self, program: GlHandle);
    fn attach_shader(&self, program: GlHandle, shader: GlHandle);
    fn link_program(&self, program: GlHandle);
    fn link_status(&self, program: GlHandle) -> bool;
    fn program_info_log(&self, program: GlHandle) -> String;
    fn use_program(&self, program: Option<GlHandle>);
    /// Enumerate the active uniforms of a linked program. Built once per
    /// program into a name -> location table; block members are excluded.
    fn active_uniforms(&self, program: GlHandle) -> Vec<(String, UniformLocation)>;
    fn uniform_block_index(&self, program: GlHandle, name: &str) -> Option<u32>;
    fn uniform_block_binding(&self, program: GlHandle, block_index: u32, slot: u32);

    // --- uniform uploads (into the active program) ---
    fn uniform_f32(&self, location: UniformLocation, value: f32);
    fn uniform_i32(&self, location: UniformLocation, value: i32);
    fn uniform_u32(&self, location: UniformLocation, value: u32);
    fn uniform_vec3(&self, location: UniformLocation, value: [f32; 3]);
    fn uniform_vec4(&self, location: UniformLocation, value: [f32; 4]);
    /// Column-major 4x4 matrix upload.
    fn uniform_mat4(&self, location: UniformLocation, value: [f32; 16]);

    // --- rasterizer state ---
    fn set_depth_test(&self, enabled: bool);
    fn depth_test(&self) -> bool;
    fn set_cull_face(&self, enabled: bool);
    fn cull_face(&self) -> bool;
    fn set_cull_face_mode(&self, mode: CullFaceMode);
    fn cull_face_mode(&self) -> CullFaceMode;
    fn set_front_face(&self, winding: FrontFace);
    fn front_face(&self) -> FrontFace;

    // --- framebuffer operations ---
    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn viewport(&self) -> [i32; 4];
    /// Clear the depth attachment of the bound framebuffer to the maximum
    /// depth value.
    fn clear_depth(&self);
    /// Clear the color attachment of the bound framebuffer.
    fn clear_color_buffer(&self, color: [f32; 4]);

    // --- draws ---
    /// Indexed draw over `u32` indices starting at `offset` bytes.
    fn draw_elements(&self, mode: PrimitiveMode, count: i32, offset: i32);
    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32);

    /// Block until all previously issued GPU work completes. The frame
    /// orchestrator calls this once per frame for accurate frame timing.
    fn finish(&self);
}
