//! Material pass: opaque scene geometry with Blinn-Phong shading and
//! shadow lookup

use crate::error::RenderResult;
use crate::gl::{
    CullFaceMode, FrontFace, Gl, GlHandle, RasterizerState, ShaderProgram, Texture, UniformBuffer,
};
use crate::pipeline::bindings::{BlockBinding, TextureUnit, MATERIAL_BLOCK};
use crate::pipeline::geometry::GeometryBuffers;
use crate::resources::{Material, MeshVertex};
use crate::scene::Light;
use glam::{Mat4, Vec3};
use std::rc::Rc;

const SPECULAR_POWER: f32 = 32.0;
const SHININESS_SCALE: f32 = 2000.0;

/// Geometry side of the material pass: owns the scene's shared
/// vertex/element buffer pair and the packed material uniform block,
/// uploaded once from imported scene data.
pub struct MaterialPass {
    geometry: GeometryBuffers,
}

impl MaterialPass {
    pub fn new(
        gl: &Gl,
        materials: &[Material],
        vertices: &[MeshVertex],
        indices: &[u32],
    ) -> RenderResult<Self> {
        Ok(Self {
            geometry: GeometryBuffers::new(gl, materials, vertices, indices)?,
        })
    }

    pub fn draw_vertices(&self) {
        self.geometry.draw_vertices();
    }

    pub fn materials_buffer(&self) -> &UniformBuffer {
        self.geometry.materials_buffer()
    }
}

/// Shading side of the material pass.
///
/// `begin`/`end` bracket the pass's exclusive access to the global
/// rasterizer flags: `begin` snapshots them and forces the state this
/// pass requires, `end` restores the snapshot exactly, so the pass is
/// state-neutral to its caller.
pub struct MaterialShader {
    gl: Gl,
    shader: ShaderProgram,
    saved: Option<RasterizerState>,
}

impl MaterialShader {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let shader = ShaderProgram::compile(
            gl,
            include_str!("../../shaders/material.vert"),
            include_str!("../../shaders/material.frag"),
        )?;
        // Wire the fixed slots once; the matching buffer/texture binds use
        // the same bindings constants.
        shader.bind();
        shader.set_uniform_block_binding(MATERIAL_BLOCK, BlockBinding::Materials.slot());
        shader.set_i32("uDepthTexture", TextureUnit::ShadowDepth.unit() as i32);
        shader.unbind();
        Ok(Self {
            gl: Rc::clone(gl),
            shader,
            saved: None,
        })
    }

    pub fn begin(&mut self) {
        self.saved = Some(RasterizerState::read(self.gl.as_ref()));
        self.gl.set_depth_test(true);
        self.gl.set_cull_face(true);
        self.gl.set_cull_face_mode(CullFaceMode::Back);
        self.gl.set_front_face(FrontFace::Ccw);
    }

    pub fn end(&mut self) {
        self.gl.use_program(None);
        if let Some(saved) = self.saved.take() {
            saved.apply(self.gl.as_ref());
        }
    }

    /// Upload the per-draw transform and lighting uniforms and make the
    /// program active for the following draw calls.
    pub fn set_uniforms(
        &self,
        camera_pos: Vec3,
        light: &Light,
        mvp: &Mat4,
        light_mvp: &Mat4,
        model: &Mat4,
    ) {
        self.shader.bind();
        self.shader.set_vec3("uCameraPos", camera_pos);
        self.shader.set_vec3("uAmbientLightColor", light.ambient_color);
        self.shader.set_vec3("uLightDir", light.direction);
        self.shader.set_vec3("uLightColor", light.color);
        self.shader.set_vec3("uLightPos", light.position);
        self.shader.set_mat4("uMVP", mvp);
        self.shader.set_mat4("uLightMVP", light_mvp);
        self.shader.set_mat4("uModelMatrix", model);
        self.shader.set_f32("uSpecularPower", SPECULAR_POWER);
        self.shader.set_f32("uShininessScale", SHININESS_SCALE);
    }

    /// Attach a material uniform block to the pass's fixed binding slot.
    pub fn bind_materials_buffer(&self, buffer: &UniformBuffer) {
        buffer.bind_base(BlockBinding::Materials.slot());
    }

    /// Bind the shadow-map depth texture to the pass's fixed sampler unit.
    pub fn bind_depth_texture(&self, texture: &Texture) {
        self.gl.active_texture(TextureUnit::ShadowDepth.unit());
        texture.bind();
    }

    pub fn program_handle(&self) -> GlHandle {
        self.shader.handle()
    }
}
