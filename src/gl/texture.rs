//! Texture and framebuffer wrappers

use crate::error::{RenderError, RenderResult};
use crate::gl::{
    Attachment, FramebufferStatus, Gl, GlHandle, TextureFilter, TextureFormat,
};
use std::rc::Rc;

/// 2D texture object.
pub struct Texture {
    gl: Gl,
    handle: GlHandle,
}

impl Texture {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let handle = gl.create_texture()?;
        Ok(Self {
            gl: Rc::clone(gl),
            handle,
        })
    }

    /// Allocate square depth storage and set the sampling parameters a
    /// shadow map needs. Leaves the texture binding clean.
    pub fn alloc_depth(&self, size: i32) {
        self.bind();
        self.gl.tex_image_2d(TextureFormat::Depth24, size, size);
        self.gl.tex_filter(TextureFilter::Nearest);
        self.gl.tex_wrap_clamp();
        self.unbind();
    }

    /// Bind to the 2D target of the currently active texture unit.
    pub fn bind(&self) {
        self.gl.bind_texture(Some(self.handle));
    }

    pub fn unbind(&self) {
        self.gl.bind_texture(None);
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    pub fn release(&mut self) {
        if !self.handle.is_released() {
            self.gl.delete_texture(self.handle);
            self.handle = GlHandle::RELEASED;
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.release();
    }
}

/// Off-screen render target.
pub struct Framebuffer {
    gl: Gl,
    handle: GlHandle,
}

impl Framebuffer {
    pub fn new(gl: &Gl) -> RenderResult<Self> {
        let handle = gl.create_framebuffer()?;
        Ok(Self {
            gl: Rc::clone(gl),
            handle,
        })
    }

    pub fn bind(&self) {
        self.gl.bind_framebuffer(Some(self.handle));
    }

    pub fn unbind(&self) {
        self.gl.bind_framebuffer(None);
    }

    /// Attach `texture` as the depth attachment and verify completeness.
    /// The framebuffer is bound during the call and unbound afterwards.
    pub fn attach_depth_texture(&self, texture: &Texture) -> RenderResult<()> {
        self.bind();
        self.gl
            .framebuffer_texture_2d(Attachment::Depth, texture.handle(), 0);
        let status = self.gl.check_framebuffer_status();
        self.unbind();
        match status {
            FramebufferStatus::Complete => Ok(()),
            FramebufferStatus::Incomplete(status) => {
                Err(RenderError::FramebufferIncomplete { status })
            }
        }
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    pub fn release(&mut self) {
        if !self.handle.is_released() {
            self.gl.delete_framebuffer(self.handle);
            self.handle = GlHandle::RELEASED;
        }
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        self.release();
    }
}
