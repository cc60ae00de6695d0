//! RAII buffer wrappers
//!
//! Each wrapper owns exactly one GL buffer object: allocated on
//! construction, deleted on drop. The types are move-only (no `Clone`),
//! so a handle never has two owners; an explicit [`release`] leaves the
//! wrapper holding the `0` sentinel, which drop then skips.
//!
//! [`release`]: VertexBuffer::release

use crate::error::RenderResult;
use crate::gl::{BufferTarget, BufferUsage, Gl, GlHandle};
use std::rc::Rc;

/// Vertex attribute data buffer.
pub struct VertexBuffer {
    gl: Gl,
    handle: GlHandle,
}

impl VertexBuffer {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let handle = gl.create_buffer()?;
        Ok(Self {
            gl: Rc::clone(gl),
            handle,
        })
    }

    /// Full-replace upload. Leaves the vertex buffer binding clean.
    pub fn upload(&self, data: &[u8], usage: BufferUsage) {
        self.bind();
        self.gl.buffer_data(BufferTarget::Vertex, data, usage);
        self.unbind();
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(BufferTarget::Vertex, Some(self.handle));
    }

    pub fn unbind(&self) {
        self.gl.bind_buffer(BufferTarget::Vertex, None);
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    /// Delete the buffer now. Safe to call more than once.
    pub fn release(&mut self) {
        if !self.handle.is_released() {
            self.gl.delete_buffer(self.handle);
            self.handle = GlHandle::RELEASED;
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        self.release();
    }
}

/// Index (element) data buffer.
///
/// The element binding is recorded into the bound vertex array, so
/// [`bind`] must be called while the mesh's vertex array is bound when
/// wiring up a draw layout.
///
/// [`bind`]: ElementBuffer::bind
pub struct ElementBuffer {
    gl: Gl,
    handle: GlHandle,
}

impl ElementBuffer {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let handle = gl.create_buffer()?;
        Ok(Self {
            gl: Rc::clone(gl),
            handle,
        })
    }

    /// Full-replace upload. Leaves the element buffer binding clean, so
    /// call this before configuring any vertex array that uses the buffer.
    pub fn upload(&self, data: &[u8], usage: BufferUsage) {
        self.bind();
        self.gl.buffer_data(BufferTarget::Element, data, usage);
        self.unbind();
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(BufferTarget::Element, Some(self.handle));
    }

    pub fn unbind(&self) {
        self.gl.bind_buffer(BufferTarget::Element, None);
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    pub fn release(&mut self) {
        if !self.handle.is_released() {
            self.gl.delete_buffer(self.handle);
            self.handle = GlHandle::RELEASED;
        }
    }
}

impl Drop for ElementBuffer {
    fn drop(&mut self) {
        self.release();
    }
}

/// Uniform block buffer, attachable to an indexed binding slot.
pub struct UniformBuffer {
    gl: Gl,
    handle: GlHandle,
}

impl UniformBuffer {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let handle = gl.create_buffer()?;
        Ok(Self {
            gl: Rc::clone(gl),
            handle,
        })
    }

    pub fn upload(&self, data: &[u8], usage: BufferUsage) {
        self.bind();
        self.gl.buffer_data(BufferTarget::Uniform, data, usage);
        self.unbind();
    }

    /// Attach the buffer to an indexed uniform binding slot. The slot must
    /// match the one the consuming shader bound its block to; both sides
    /// take it from [`crate::pipeline::bindings`].
    pub fn bind_base(&self, slot: u32) {
        self.gl
            .bind_buffer_base(BufferTarget::Uniform, slot, Some(self.handle));
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(BufferTarget::Uniform, Some(self.handle));
    }

    pub fn unbind(&self) {
        self.gl.bind_buffer(BufferTarget::Uniform, None);
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    pub fn release(&mut self) {
        if !self.handle.is_released() {
            self.gl.delete_buffer(self.handle);
            self.handle = GlHandle::RELEASED;
        }
    }
}

impl Drop for UniformBuffer {
    fn drop(&mut self) {
        self.release();
    }
}
