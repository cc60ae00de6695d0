//! Shader program compilation, linking and uniform upload
//!
//! Uniform locations are resolved once at link time into a name ->
//! location table validated against the compiled program. Setters for
//! names absent from the table are silent no-ops: shader compilers may
//! legally strip unused uniforms, and that must not fail a draw.

use crate::error::{RenderError, RenderResult};
use crate::gl::{Gl, GlHandle, ShaderStage, UniformLocation};
use glam::{Mat4, Vec3, Vec4};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

pub struct ShaderProgram {
    gl: Gl,
    handle: GlHandle,
    uniforms: HashMap<String, UniformLocation>,
}

impl fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("handle", &self.handle)
            .field("uniforms", &self.uniforms.len())
            .finish()
    }
}

impl ShaderProgram {
    /// Compile and link a vertex + fragment stage pair.
    ///
    /// Every failure path deletes the intermediate stage objects (and the
    /// program, where one was created) before the error propagates, so a
    /// failed construction leaks no GPU handles.
    pub fn compile(gl: &Gl, vertex_src: &str, fragment_src: &str) -> RenderResult<Self> {
        let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_src, &[])?;
        let fragment = compile_stage(gl, ShaderStage::Fragment, fragment_src, &[vertex])?;

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(err) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(err);
            }
        };
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        let linked = gl.link_status(program);
        // The stage objects are no longer needed whether linking worked or
        // not; the linked binary lives in the program object.
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
        if !linked {
            let log = gl.program_info_log(program);
            gl.delete_program(program);
            return Err(RenderError::ShaderLink { log });
        }

        let uniforms = gl.active_uniforms(program).into_iter().collect();
        Ok(Self {
            gl: Rc::clone(gl),
            handle: program,
            uniforms,
        })
    }

    /// Load the two stage sources from plain-text files and compile.
    pub fn from_files(
        gl: &Gl,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> RenderResult<Self> {
        let vertex_path = vertex_path.as_ref();
        let fragment_path = fragment_path.as_ref();
        let vertex_src = read_source(vertex_path)?;
        let fragment_src = read_source(fragment_path)?;
        log::info!(
            "loaded shaders: {}, {}",
            vertex_path.display(),
            fragment_path.display()
        );
        Self::compile(gl, &vertex_src, &fragment_src)
    }

    /// Make this the active program for subsequent uniform and draw calls.
    pub fn bind(&self) {
        self.gl.use_program(Some(self.handle));
    }

    pub fn unbind(&self) {
        self.gl.use_program(None);
    }

    /// Bind a named uniform block to a fixed slot so a uniform buffer can
    /// be attached via `bind_base` against the same slot. Warns (and does
    /// nothing) if the program declares no such block.
    pub fn set_uniform_block_binding(&self, name: &str, slot: u32) {
        match self.gl.uniform_block_index(self.handle, name) {
            Some(index) => self.gl.uniform_block_binding(self.handle, index, slot),
            None => log::warn!("uniform block {name:?} not found in program"),
        }
    }

    pub fn set_f32(&self, name: &str, value: f32) {
        if let Some(&loc) = self.uniforms.get(name) {
            self.gl.uniform_f32(loc, value);
        }
    }

    pub fn set_i32(&self, name: &str, value: i32) {
        if let Some(&loc) = self.uniforms.get(name) {
            self.gl.uniform_i32(loc, value);
        }
    }

    pub fn set_u32(&self, name: &str, value: u32) {
        if let Some(&loc) = self.uniforms.get(name) {
            self.gl.uniform_u32(loc, value);
        }
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        if let Some(&loc) = self.uniforms.get(name) {
            self.gl.uniform_vec3(loc, value.to_array());
        }
    }

    pub fn set_vec4(&self, name: &str, value: Vec4) {
        if let Some(&loc) = self.uniforms.get(name) {
            self.gl.uniform_vec4(loc, value.to_array());
        }
    }

    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        if let Some(&loc) = self.uniforms.get(name) {
            self.gl.uniform_mat4(loc, value.to_cols_array());
        }
    }

    pub fn handle(&self) -> GlHandle {
        self.handle
    }

    /// Number of uniforms resolved at link time.
    pub fn uniform_count(&self) -> usize {
        self.uniforms.len()
    }

    pub fn release(&mut self) {
        if !self.handle.is_released() {
            self.gl.delete_program(self.handle);
            self.handle = GlHandle::RELEASED;
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.release();
    }
}

/// Compile one stage; on failure delete it together with every
/// previously compiled stage in `earlier`.
fn compile_stage(
    gl: &Gl,
    stage: ShaderStage,
    source: &str,
    earlier: &[GlHandle],
) -> RenderResult<GlHandle> {
    let shader = match gl.create_shader(stage) {
        Ok(shader) => shader,
        Err(err) => {
            for &s in earlier {
                gl.delete_shader(s);
            }
            return Err(err);
        }
    };
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if gl.compile_status(shader) {
        Ok(shader)
    } else {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        for &s in earlier {
            gl.delete_shader(s);
        }
        Err(RenderError::ShaderCompile { stage, log })
    }
}

fn read_source(path: &Path) -> RenderResult<String> {
    std::fs::read_to_string(path).map_err(|source| RenderError::ShaderIo {
        path: path.to_path_buf(),
        source,
    })
}
