//! Production [`GlApi`] implementation over a [`glow::Context`]
//!
//! This is the only module that issues raw FFI calls. Handle values cross
//! the trait boundary as plain `u32` names with `0` as the null object,
//! which maps one-to-one onto glow's `NonZeroU32` native handles.

use crate::error::{RenderError, RenderResult};
use crate::gl::{
    Attachment, BufferTarget, BufferUsage, CullFaceMode, FramebufferStatus, FrontFace, GlApi,
    GlHandle, PrimitiveMode, ShaderStage, TextureFilter, TextureFormat, UniformLocation,
};
use glow::HasContext;
use std::num::NonZeroU32;

pub struct GlowBackend {
    ctx: glow::Context,
}

impl GlowBackend {
    /// Wrap an already-created GL context.
    ///
    /// Logs the driver identification strings and, where the context
    /// supports it, installs a debug callback that routes GL validation
    /// messages into the `log` crate. Steady-state GL errors surface
    /// there, never as returned errors.
    pub fn new(mut ctx: glow::Context) -> Self {
        unsafe {
            log::info!(
                "GL vendor: {}, renderer: {}, version: {}",
                ctx.get_parameter_string(glow::VENDOR),
                ctx.get_parameter_string(glow::RENDERER),
                ctx.get_parameter_string(glow::VERSION),
            );
            if ctx.supports_debug() {
                ctx.enable(glow::DEBUG_OUTPUT);
                ctx.debug_message_callback(|source, ty, id, severity, message: &str| {
                    if severity == glow::DEBUG_SEVERITY_NOTIFICATION {
                        return;
                    }
                    if ty == glow::DEBUG_TYPE_ERROR {
                        log::error!("GL error [src 0x{source:x} id {id}]: {message}");
                    } else {
                        log::warn!("GL [src 0x{source:x} id {id}]: {message}");
                    }
                });
            }
        }
        Self { ctx }
    }
}

fn buffer_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Vertex => glow::ARRAY_BUFFER,
        BufferTarget::Element => glow::ELEMENT_ARRAY_BUFFER,
        BufferTarget::Uniform => glow::UNIFORM_BUFFER,
    }
}

fn buffer_usage(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::Static => glow::STATIC_DRAW,
        BufferUsage::Stream => glow::STREAM_DRAW,
    }
}

fn primitive_mode(mode: PrimitiveMode) -> u32 {
    match mode {
        PrimitiveMode::Triangles => glow::TRIANGLES,
        PrimitiveMode::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveMode::Points => glow::POINTS,
    }
}

fn native_buffer(h: GlHandle) -> Option<glow::NativeBuffer> {
    NonZeroU32::new(h.raw()).map(glow::NativeBuffer)
}

fn native_vao(h: GlHandle) -> Option<glow::NativeVertexArray> {
    NonZeroU32::new(h.raw()).map(glow::NativeVertexArray)
}

fn native_texture(h: GlHandle) -> Option<glow::NativeTexture> {
    NonZeroU32::new(h.raw()).map(glow::NativeTexture)
}

fn native_framebuffer(h: GlHandle) -> Option<glow::NativeFramebuffer> {
    NonZeroU32::new(h.raw()).map(glow::NativeFramebuffer)
}

fn native_shader(h: GlHandle) -> Option<glow::NativeShader> {
    NonZeroU32::new(h.raw()).map(glow::NativeShader)
}

fn native_program(h: GlHandle) -> Option<glow::NativeProgram> {
    NonZeroU32::new(h.raw()).map(glow::NativeProgram)
}

impl GlApi for GlowBackend {
    fn create_buffer(&self) -> RenderResult<GlHandle> {
        unsafe {
            self.ctx
                .create_buffer()
                .map(|b| GlHandle(b.0.get()))
                .map_err(|_| RenderError::ResourceExhausted { kind: "buffer" })
        }
    }

    fn delete_buffer(&self, buffer: GlHandle) {
        if let Some(b) = native_buffer(buffer) {
            unsafe { self.ctx.delete_buffer(b) };
        }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<GlHandle>) {
        unsafe {
            self.ctx
                .bind_buffer(buffer_target(target), buffer.and_then(native_buffer));
        }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        unsafe {
            self.ctx
                .buffer_data_u8_slice(buffer_target(target), data, buffer_usage(usage));
        }
    }

    fn bind_buffer_base(&self, target: BufferTarget, slot: u32, buffer: Option<GlHandle>) {
        unsafe {
            self.ctx
                .bind_buffer_base(buffer_target(target), slot, buffer.and_then(native_buffer));
        }
    }

    fn create_vertex_array(&self) -> RenderResult<GlHandle> {
        unsafe {
            self.ctx
                .create_vertex_array()
                .map(|v| GlHandle(v.0.get()))
                .map_err(|_| RenderError::ResourceExhausted { kind: "vertex array" })
        }
    }

    fn delete_vertex_array(&self, vao: GlHandle) {
        if let Some(v) = native_vao(vao) {
            unsafe { self.ctx.delete_vertex_array(v) };
        }
    }

    fn bind_vertex_array(&self, vao: Option<GlHandle>) {
        unsafe { self.ctx.bind_vertex_array(vao.and_then(native_vao)) };
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.ctx.enable_vertex_attrib_array(index) };
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        unsafe {
            self.ctx
                .vertex_attrib_pointer_f32(index, size, glow::FLOAT, false, stride, offset);
        }
    }

    fn vertex_attrib_pointer_u32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        unsafe {
            self.ctx
                .vertex_attrib_pointer_i32(index, size, glow::UNSIGNED_INT, stride, offset);
        }
    }

    fn create_texture(&self) -> RenderResult<GlHandle> {
        unsafe {
            self.ctx
                .create_texture()
                .map(|t| GlHandle(t.0.get()))
                .map_err(|_| RenderError::ResourceExhausted { kind: "texture" })
        }
    }

    fn delete_texture(&self, texture: GlHandle) {
        if let Some(t) = native_texture(texture) {
            unsafe { self.ctx.delete_texture(t) };
        }
    }

    fn bind_texture(&self, texture: Option<GlHandle>) {
        unsafe {
            self.ctx
                .bind_texture(glow::TEXTURE_2D, texture.and_then(native_texture));
        }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { self.ctx.active_texture(glow::TEXTURE0 + unit) };
    }

    fn tex_image_2d(&self, format: TextureFormat, width: i32, height: i32) {
        let (internal, format, ty) = match format {
            TextureFormat::Depth24 => (
                glow::DEPTH_COMPONENT24 as i32,
                glow::DEPTH_COMPONENT,
                glow::UNSIGNED_INT,
            ),
            TextureFormat::Rgba8 => (glow::RGBA8 as i32, glow::RGBA, glow::UNSIGNED_BYTE),
        };
        unsafe {
            self.ctx.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal,
                width,
                height,
                0,
                format,
                ty,
                None,
            );
        }
    }

    fn tex_filter(&self, filter: TextureFilter) {
        let f = match filter {
            TextureFilter::Nearest => glow::NEAREST as i32,
            TextureFilter::Linear => glow::LINEAR as i32,
        };
        unsafe {
            self.ctx
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, f);
            self.ctx
                .tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, f);
        }
    }

    fn tex_wrap_clamp(&self) {
        unsafe {
            self.ctx.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            self.ctx.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
        }
    }

    fn create_framebuffer(&self) -> RenderResult<GlHandle> {
        unsafe {
            self.ctx
                .create_framebuffer()
                .map(|f| GlHandle(f.0.get()))
                .map_err(|_| RenderError::ResourceExhausted { kind: "framebuffer" })
        }
    }

    fn delete_framebuffer(&self, fbo: GlHandle) {
        if let Some(f) = native_framebuffer(fbo) {
            unsafe { self.ctx.delete_framebuffer(f) };
        }
    }

    fn bind_framebuffer(&self, fbo: Option<GlHandle>) {
        unsafe {
            self.ctx
                .bind_framebuffer(glow::FRAMEBUFFER, fbo.and_then(native_framebuffer));
        }
    }

    fn framebuffer_texture_2d(&self, attachment: Attachment, texture: GlHandle, level: i32) {
        let attachment = match attachment {
            Attachment::Depth => glow::DEPTH_ATTACHMENT,
            Attachment::Color0 => glow::COLOR_ATTACHMENT0,
        };
        unsafe {
            self.ctx.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                attachment,
                glow::TEXTURE_2D,
                native_texture(texture),
                level,
            );
        }
    }

    fn check_framebuffer_status(&self) -> FramebufferStatus {
        let status = unsafe { self.ctx.check_framebuffer_status(glow::FRAMEBUFFER) };
        if status == glow::FRAMEBUFFER_COMPLETE {
            FramebufferStatus::Complete
        } else {
            FramebufferStatus::Incomplete(status)
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> RenderResult<GlHandle> {
        let ty = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe {
            self.ctx
                .create_shader(ty)
                .map(|s| GlHandle(s.0.get()))
                .map_err(|_| RenderError::ResourceExhausted { kind: "shader" })
        }
    }

    fn delete_shader(&self, shader: GlHandle) {
        if let Some(s) = native_shader(shader) {
            unsafe { self.ctx.delete_shader(s) };
        }
    }

    fn shader_source(&self, shader: GlHandle, source: &str) {
        if let Some(s) = native_shader(shader) {
            unsafe { self.ctx.shader_source(s, source) };
        }
    }

    fn compile_shader(&self, shader: GlHandle) {
        if let Some(s) = native_shader(shader) {
            unsafe { self.ctx.compile_shader(s) };
        }
    }

    fn compile_status(&self, shader: GlHandle) -> bool {
        match native_shader(shader) {
            Some(s) => unsafe { self.ctx.get_shader_compile_status(s) },
            None => false,
        }
    }

    fn shader_info_log(&self, shader: GlHandle) -> String {
        match native_shader(shader) {
            Some(s) => unsafe { self.ctx.get_shader_info_log(s) },
            None => String::new(),
        }
    }

    fn create_program(&self) -> RenderResult<GlHandle> {
        unsafe {
            self.ctx
                .create_program()
                .map(|p| GlHandle(p.0.get()))
                .map_err(|_| RenderError::ResourceExhausted { kind: "program" })
        }
    }

    fn delete_program(&self, program: GlHandle) {
        if let Some(p) = native_program(program) {
            unsafe { self.ctx.delete_program(p) };
        }
    }

    fn attach_shader(&self, program: GlHandle, shader: GlHandle) {
        if let (Some(p), Some(s)) = (native_program(program), native_shader(shader)) {
            unsafe { self.ctx.attach_shader(p, s) };
        }
    }

    fn link_program(&self, program: GlHandle) {
        if let Some(p) = native_program(program) {
            unsafe { self.ctx.link_program(p) };
        }
    }

    fn link_status(&self, program: GlHandle) -> bool {
        match native_program(program) {
            Some(p) => unsafe { self.ctx.get_program_link_status(p) },
            None => false,
        }
    }

    fn program_info_log(&self, program: GlHandle) -> String {
        match native_program(program) {
            Some(p) => unsafe { self.ctx.get_program_info_log(p) },
            None => String::new(),
        }
    }

    fn use_program(&self, program: Option<GlHandle>) {
        unsafe { self.ctx.use_program(program.and_then(native_program)) };
    }

    fn active_uniforms(&self, program: GlHandle) -> Vec<(String, UniformLocation)> {
        let Some(p) = native_program(program) else {
            return Vec::new();
        };
        let mut uniforms = Vec::new();
        unsafe {
            let count = self.ctx.get_active_uniforms(p);
            for index in 0..count {
                let Some(active) = self.ctx.get_active_uniform(p, index) else {
                    continue;
                };
                // Block members report no location and are reached through
                // the uniform buffer instead.
                if let Some(location) = self.ctx.get_uniform_location(p, &active.name) {
                    uniforms.push((active.name, UniformLocation(location.0)));
                }
            }
        }
        uniforms
    }

    fn uniform_block_index(&self, program: GlHandle, name: &str) -> Option<u32> {
        let p = native_program(program)?;
        unsafe { self.ctx.get_uniform_block_index(p, name) }
    }

    fn uniform_block_binding(&self, program: GlHandle, block_index: u32, slot: u32) {
        if let Some(p) = native_program(program) {
            unsafe { self.ctx.uniform_block_binding(p, block_index, slot) };
        }
    }

    fn uniform_f32(&self, location: UniformLocation, value: f32) {
        let loc = glow::NativeUniformLocation(location.0);
        unsafe { self.ctx.uniform_1_f32(Some(&loc), value) };
    }

    fn uniform_i32(&self, location: UniformLocation, value: i32) {
        let loc = glow::NativeUniformLocation(location.0);
        unsafe { self.ctx.uniform_1_i32(Some(&loc), value) };
    }

    fn uniform_u32(&self, location: UniformLocation, value: u32) {
        let loc = glow::NativeUniformLocation(location.0);
        unsafe { self.ctx.uniform_1_u32(Some(&loc), value) };
    }

    fn uniform_vec3(&self, location: UniformLocation, value: [f32; 3]) {
        let loc = glow::NativeUniformLocation(location.0);
        unsafe { self.ctx.uniform_3_f32_slice(Some(&loc), &value) };
    }

    fn uniform_vec4(&self, location: UniformLocation, value: [f32; 4]) {
        let loc = glow::NativeUniformLocation(location.0);
        unsafe { self.ctx.uniform_4_f32_slice(Some(&loc), &value) };
    }

    fn uniform_mat4(&self, location: UniformLocation, value: [f32; 16]) {
        let loc = glow::NativeUniformLocation(location.0);
        unsafe { self.ctx.uniform_matrix_4_f32_slice(Some(&loc), false, &value) };
    }

    fn set_depth_test(&self, enabled: bool) {
        unsafe {
            if enabled {
                self.ctx.enable(glow::DEPTH_TEST);
            } else {
                self.ctx.disable(glow::DEPTH_TEST);
            }
        }
    }

    fn depth_test(&self) -> bool {
        unsafe { self.ctx.is_enabled(glow::DEPTH_TEST) }
    }

    fn set_cull_face(&self, enabled: bool) {
        unsafe {
            if enabled {
                self.ctx.enable(glow::CULL_FACE);
            } else {
                self.ctx.disable(glow::CULL_FACE);
            }
        }
    }

    fn cull_face(&self) -> bool {
        unsafe { self.ctx.is_enabled(glow::CULL_FACE) }
    }

    fn set_cull_face_mode(&self, mode: CullFaceMode) {
        let mode = match mode {
            CullFaceMode::Front => glow::FRONT,
            CullFaceMode::Back => glow::BACK,
        };
        unsafe { self.ctx.cull_face(mode) };
    }

    fn cull_face_mode(&self) -> CullFaceMode {
        let mode = unsafe { self.ctx.get_parameter_i32(glow::CULL_FACE_MODE) };
        if mode == glow::FRONT as i32 {
            CullFaceMode::Front
        } else {
            CullFaceMode::Back
        }
    }

    fn set_front_face(&self, winding: FrontFace) {
        let winding = match winding {
            FrontFace::Cw => glow::CW,
            FrontFace::Ccw => glow::CCW,
        };
        unsafe { self.ctx.front_face(winding) };
    }

    fn front_face(&self) -> FrontFace {
        let winding = unsafe { self.ctx.get_parameter_i32(glow::FRONT_FACE) };
        if winding == glow::CW as i32 {
            FrontFace::Cw
        } else {
            FrontFace::Ccw
        }
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { self.ctx.viewport(x, y, width, height) };
    }

    fn viewport(&self) -> [i32; 4] {
        let mut vp = [0i32; 4];
        unsafe { self.ctx.get_parameter_i32_slice(glow::VIEWPORT, &mut vp) };
        vp
    }

    fn clear_depth(&self) {
        unsafe { self.ctx.clear(glow::DEPTH_BUFFER_BIT) };
    }

    fn clear_color_buffer(&self, color: [f32; 4]) {
        unsafe {
            self.ctx.clear_color(color[0], color[1], color[2], color[3]);
            self.ctx.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn draw_elements(&self, mode: PrimitiveMode, count: i32, offset: i32) {
        unsafe {
            self.ctx
                .draw_elements(primitive_mode(mode), count, glow::UNSIGNED_INT, offset);
        }
    }

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        unsafe { self.ctx.draw_arrays(primitive_mode(mode), first, count) };
    }

    fn finish(&self) {
        unsafe { self.ctx.finish() };
    }
}
