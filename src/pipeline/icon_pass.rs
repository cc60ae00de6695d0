//! Icon pass: draws a single point sprite marking the light's position.

use crate::error::RenderResult;
use crate::gl::{Gl, GlHandle, ShaderProgram, VertexArray};
use glam::Vec4;
use std::rc::Rc;

const POINT_SIZE: f32 = 12.0;

/// The vertex position arrives as a uniform already in clip space, so
/// the pass needs no vertex buffer, only an empty vertex array to
/// satisfy the draw call.
pub struct IconPass {
    gl: Gl,
    shader: ShaderProgram,
    vao: VertexArray,
}

impl IconPass {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let shader = ShaderProgram::compile(
            gl,
            include_str!("../../shaders/icon.vert"),
            include_str!("../../shaders/icon.frag"),
        )?;
        let vao = VertexArray::new(gl)?;
        Ok(Self {
            gl: Rc::clone(gl),
            shader,
            vao,
        })
    }

    pub fn draw(&self, position: Vec4, color: Vec4) {
        self.shader.bind();
        self.shader.set_vec4("uPosition", position);
        self.shader.set_vec4("uColor", color);
        self.shader.set_f32("uPointSize", POINT_SIZE);
        self.vao.bind();
        self.gl.draw_arrays(crate::gl::PrimitiveMode::Points, 0, 1);
        self.vao.unbind();
        self.shader.unbind();
    }

    pub fn program_handle(&self) -> GlHandle {
        self.shader.handle()
    }
}
