//! Shadow pass: renders scene depth from the light's point of view into
//! an offscreen depth texture sampled later by the material pass.

use crate::error::RenderResult;
use crate::gl::{Framebuffer, Gl, GlHandle, ShaderProgram, Texture};
use crate::scene::Light;
use glam::{Mat4, Vec3};
use std::rc::Rc;

/// Extent of the orthographic shadow volume, in world units each side
/// of the light axis, plus the depth-texture resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    pub resolution: i32,
    pub extent: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            resolution: 2048,
            extent: 10.0,
            near: 0.1,
            far: 50.0,
        }
    }
}

pub struct ShadowPass {
    gl: Gl,
    shader: ShaderProgram,
    framebuffer: Framebuffer,
    depth_texture: Texture,
    settings: ShadowSettings,
    saved_viewport: Option<[i32; 4]>,
    saved_depth_test: bool,
    saved_cull_face: bool,
}

impl ShadowPass {
    pub fn new(gl: &Gl, settings: ShadowSettings) -> RenderResult<Self> {
        let shader = ShaderProgram::compile(
            gl,
            include_str!("../../shaders/depth.vert"),
            include_str!("../../shaders/depth.frag"),
        )?;
        let depth_texture = Texture::new(gl)?;
        depth_texture.alloc_depth(settings.resolution);
        let framebuffer = Framebuffer::new(gl)?;
        framebuffer.attach_depth_texture(&depth_texture)?;
        log::debug!(
            "shadow pass ready, {}x{} depth target",
            settings.resolution,
            settings.resolution
        );
        Ok(Self {
            gl: Rc::clone(gl),
            shader,
            framebuffer,
            depth_texture,
            settings,
            saved_viewport: None,
            saved_depth_test: false,
            saved_cull_face: false,
        })
    }

    /// Redirect rendering into the shadow framebuffer. The previous
    /// viewport and depth/cull flags are restored by `end`.
    pub fn begin(&mut self) {
        self.saved_viewport = Some(self.gl.viewport());
        self.saved_depth_test = self.gl.depth_test();
        self.saved_cull_face = self.gl.cull_face();

        self.gl
            .set_viewport(0, 0, self.settings.resolution, self.settings.resolution);
        self.gl.set_depth_test(true);
        self.gl.set_cull_face(false);
        self.framebuffer.bind();
        self.gl.clear_depth();
        self.shader.bind();
    }

    pub fn set_mvp(&self, mvp: &Mat4) {
        self.shader.set_mat4("uMVP", mvp);
    }

    pub fn end(&mut self) {
        self.shader.unbind();
        self.framebuffer.unbind();
        self.gl.set_cull_face(self.saved_cull_face);
        self.gl.set_depth_test(self.saved_depth_test);
        if let Some([x, y, w, h]) = self.saved_viewport.take() {
            self.gl.set_viewport(x, y, w, h);
        }
    }

    pub fn projection(&self) -> Mat4 {
        let e = self.settings.extent;
        Mat4::orthographic_rh_gl(-e, e, -e, e, self.settings.near, self.settings.far)
    }

    /// View matrix looking from the light position toward the origin.
    /// A light directly above the scene would make the conventional up
    /// axis degenerate, so it falls back to world Z there.
    pub fn light_view(&self, light: &Light) -> Mat4 {
        let dir = (Vec3::ZERO - light.position).normalize_or_zero();
        let up = if dir.cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(light.position, Vec3::ZERO, up)
    }

    pub fn light_space_matrix(&self, light: &Light) -> Mat4 {
        self.projection() * self.light_view(light)
    }

    pub fn depth_texture(&self) -> &Texture {
        &self.depth_texture
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn program_handle(&self) -> GlHandle {
        self.shader.handle()
    }
}
