//! Screen pass: blits a texture onto a fullscreen quad, used to inspect
//! the shadow depth map.

use crate::error::RenderResult;
use crate::gl::{
    BufferUsage, Gl, GlHandle, PrimitiveMode, ShaderProgram, Texture, VertexArray, VertexBuffer,
};
use crate::pipeline::bindings::TextureUnit;
use std::rc::Rc;

// Clip-space corners, triangle strip order.
const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

pub struct ScreenPass {
    gl: Gl,
    shader: ShaderProgram,
    vao: VertexArray,
    _quad: VertexBuffer,
}

impl ScreenPass {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let shader = ShaderProgram::compile(
            gl,
            include_str!("../../shaders/screen.vert"),
            include_str!("../../shaders/screen.frag"),
        )?;
        shader.bind();
        shader.set_i32("uScreenTexture", TextureUnit::Screen.unit() as i32);
        shader.unbind();

        let quad = VertexBuffer::new(gl)?;
        quad.upload(bytemuck::cast_slice(&QUAD), BufferUsage::Static);
        let vao = VertexArray::new(gl)?;
        vao.bind();
        vao.attrib_pointer_f32(&quad, 0, 2, 8, 0);
        vao.unbind();

        Ok(Self {
            gl: Rc::clone(gl),
            shader,
            vao,
            _quad: quad,
        })
    }

    pub fn draw(&self, texture: &Texture) {
        self.shader.bind();
        self.gl.active_texture(TextureUnit::Screen.unit());
        texture.bind();
        self.vao.bind();
        self.gl.draw_arrays(PrimitiveMode::TriangleStrip, 0, 4);
        self.vao.unbind();
        self.shader.unbind();
    }

    pub fn program_handle(&self) -> GlHandle {
        self.shader.handle()
    }
}
