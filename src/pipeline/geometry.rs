//! Shared geometry/material buffer ownership for the mesh-drawing passes

use crate::error::RenderResult;
use crate::gl::{BufferUsage, ElementBuffer, Gl, PrimitiveMode, UniformBuffer, VertexArray, VertexBuffer};
use crate::pipeline::bindings::AttribLocation;
use crate::resources::material::pack_materials;
use crate::resources::{Material, MeshVertex, VERTEX_STRIDE};
use std::rc::Rc;

/// One mesh's worth of GPU buffers: a shared vertex + element buffer
/// pair, the vertex array describing the interleaved layout, and the
/// uniform buffer holding the packed per-material coefficients.
pub(crate) struct GeometryBuffers {
    gl: Gl,
    vao: VertexArray,
    ubo: UniformBuffer,
    _vbo: VertexBuffer,
    _ebo: ElementBuffer,
    element_count: i32,
}

impl GeometryBuffers {
    pub fn new(
        gl: &Gl,
        materials: &[Material],
        vertices: &[MeshVertex],
        indices: &[u32],
    ) -> RenderResult<Self> {
        let vbo = VertexBuffer::new(gl)?;
        vbo.upload(bytemuck::cast_slice(vertices), BufferUsage::Static);
        let ebo = ElementBuffer::new(gl)?;
        ebo.upload(bytemuck::cast_slice(indices), BufferUsage::Static);
        let ubo = UniformBuffer::new(gl)?;
        ubo.upload(
            bytemuck::cast_slice(&pack_materials(materials)),
            BufferUsage::Static,
        );

        let vao = VertexArray::new(gl)?;
        vao.bind();
        // The element binding latches into the bound vertex array.
        ebo.bind();
        vao.attrib_pointer_f32(&vbo, AttribLocation::Position.location(), 3, VERTEX_STRIDE, 0);
        vao.attrib_pointer_f32(&vbo, AttribLocation::Normal.location(), 3, VERTEX_STRIDE, 12);
        vao.attrib_pointer_f32(&vbo, AttribLocation::TexCoord.location(), 2, VERTEX_STRIDE, 24);
        vao.attrib_pointer_u32(
            &vbo,
            AttribLocation::MaterialIndex.location(),
            1,
            VERTEX_STRIDE,
            32,
        );
        vao.unbind();
        ebo.unbind();

        Ok(Self {
            gl: Rc::clone(gl),
            vao,
            ubo,
            _vbo: vbo,
            _ebo: ebo,
            element_count: indices.len() as i32,
        })
    }

    /// One indexed draw over the whole element range, with the vertex
    /// array bound only for the duration of the call.
    pub fn draw_vertices(&self) {
        self.vao.bind();
        self.gl
            .draw_elements(PrimitiveMode::Triangles, self.element_count, 0);
        self.vao.unbind();
    }

    pub fn materials_buffer(&self) -> &UniformBuffer {
        &self.ubo
    }
}
