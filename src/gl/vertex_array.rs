//! Vertex array wrapper
//!
//! A vertex array records attribute-location -> buffer mappings for one
//! mesh's draw call. It owns no buffer data itself: attribute
//! configuration borrows externally owned vertex buffers, binds them
//! transiently, and leaves the global buffer binding clean afterwards.

use crate::error::RenderResult;
use crate::gl::{Gl, GlHandle, VertexBuffer};
use std::rc::Rc;

pub struct VertexArray {
    gl: Gl,
    handle: GlHandle,
}

impl VertexArray {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let handle = gl.create_vertex_array()?;
        Ok(Self {
            gl: Rc::clone(gl),
            handle,
        })
    }

    /// Must be called before any attribute configuration or draw that
    /// references this array.
    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.handle));
    }

    pub fn unbind(&self) {
        self.gl.bind_vertex_array(None);
    }

    /// Configure a float attribute against `buffer`. The array must be
    /// bound; the buffer is bound only for the duration of the call.
    pub fn attrib_pointer_f32(
        &self,
        buffer: &VertexBuffer,
        index: u32,
        size: i32,
        stride: i32,
        offset: i32,
    ) {
        self.gl.enable_vertex_attrib_array(index);
        buffer.bind();
        self.gl.vertex_attrib_pointer_f32(index, size, stride, offset);
        buffer.unbind();
    }

    /// Configure an unsigned integer attribute against `buffer`.
    pub fn attrib_pointer_u32(
        &self,
        buffer: &VertexBuffer,
        index: u32,
        size: i32,
        stride: i32,
        offset: i32,
    ) {
        self.gl.enable_vertex_attrib_array(index);
        buffer.bind();
        self.gl.vertex_attrib_pointer_u32(index, size, stride, offset);
        buffer.unbind();
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    pub fn release(&mut self) {
        if !self.handle.is_released() {
            self.gl.delete_vertex_array(self.handle);
            self.handle = GlHandle::RELEASED;
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.release();
    }
}
