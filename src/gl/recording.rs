//! Call-recording [`GlApi`] double for tests
//!
//! Models just enough of the GL state machine to verify the properties
//! this crate cares about: one release per allocated handle, clean bind
//! state, save/restore bracketing, binding-slot agreement and uniform
//! payloads. Invalid command sequences (uploading with no buffer bound,
//! drawing with no program, configuring attributes with no vertex array)
//! panic so that bind-order bugs fail tests loudly.
//!
//! Program linking scrapes uniform declarations out of the attached GLSL
//! sources line by line; a uniform block's opening brace must sit on its
//! declaration line, which holds for every shader in this crate.

use crate::error::RenderResult;
use crate::gl::{
    Attachment, BufferTarget, BufferUsage, CullFaceMode, FramebufferStatus, FrontFace, GlApi,
    GlHandle, PrimitiveMode, ShaderStage, TextureFilter, TextureFormat, UniformLocation,
};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Buffer,
    VertexArray,
    Texture,
    Framebuffer,
    Shader,
    Program,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    F32(f32),
    I32(i32),
    U32(u32),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat4([f32; 16]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttribConfig {
    pub vao: Option<GlHandle>,
    pub buffer: Option<GlHandle>,
    pub index: u32,
    pub size: i32,
    pub stride: i32,
    pub offset: i32,
    pub integer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub fbo: Option<GlHandle>,
    pub program: Option<GlHandle>,
    pub vao: Option<GlHandle>,
    pub mode: PrimitiveMode,
    pub count: i32,
}

#[derive(Debug, Default)]
struct ProgramState {
    attached: Vec<u32>,
    linked: bool,
    link_log: String,
    /// name -> location, in declaration order.
    uniforms: Vec<(String, u32)>,
    /// block name -> block index.
    blocks: Vec<String>,
    /// block index -> slot.
    block_bindings: HashMap<u32, u32>,
}

#[derive(Debug)]
struct State {
    next_handle: u32,
    created: Vec<(Kind, u32)>,
    deleted: Vec<(Kind, u32)>,

    fail_compile: Option<(ShaderStage, String)>,
    fail_link: Option<String>,
    force_incomplete: Option<u32>,

    shaders: HashMap<u32, (ShaderStage, String, bool)>,
    programs: HashMap<u32, ProgramState>,
    current_program: Option<u32>,

    bound_buffers: HashMap<BufferTarget, u32>,
    buffer_data: HashMap<u32, Vec<u8>>,
    buffer_bases: HashMap<u32, u32>,

    bound_vao: Option<u32>,
    attrib_configs: Vec<AttribConfig>,

    active_unit: u32,
    texture_units: HashMap<u32, u32>,

    bound_fbo: Option<u32>,
    attachments: HashMap<(u32, Attachment), u32>,

    depth_test: bool,
    cull_face: bool,
    cull_face_mode: CullFaceMode,
    front_face: FrontFace,
    viewport: [i32; 4],

    uniform_writes: Vec<(u32, u32, UniformValue)>,
    depth_clears: Vec<Option<GlHandle>>,
    color_clears: Vec<[f32; 4]>,
    draws: Vec<DrawCall>,
    finish_calls: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_handle: 0,
            created: Vec::new(),
            deleted: Vec::new(),
            fail_compile: None,
            fail_link: None,
            force_incomplete: None,
            shaders: HashMap::new(),
            programs: HashMap::new(),
            current_program: None,
            bound_buffers: HashMap::new(),
            buffer_data: HashMap::new(),
            buffer_bases: HashMap::new(),
            bound_vao: None,
            attrib_configs: Vec::new(),
            active_unit: 0,
            texture_units: HashMap::new(),
            bound_fbo: None,
            attachments: HashMap::new(),
            depth_test: false,
            cull_face: false,
            cull_face_mode: CullFaceMode::Back,
            front_face: FrontFace::Ccw,
            viewport: [0, 0, 1600, 1200],
            uniform_writes: Vec::new(),
            depth_clears: Vec::new(),
            color_clears: Vec::new(),
            draws: Vec::new(),
            finish_calls: 0,
        }
    }
}

pub struct RecordingGl {
    state: RefCell<State>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::default()),
        }
    }

    fn alloc(&self, kind: Kind) -> RenderResult<GlHandle> {
        let mut s = self.state.borrow_mut();
        s.next_handle += 1;
        let handle = s.next_handle;
        s.created.push((kind, handle));
        Ok(GlHandle(handle))
    }

    fn record_delete(&self, kind: Kind, handle: GlHandle) {
        self.state.borrow_mut().deleted.push((kind, handle.raw()));
    }

    // --- failure injection ---

    pub fn fail_compile(&self, stage: ShaderStage, log: &str) {
        self.state.borrow_mut().fail_compile = Some((stage, log.to_string()));
    }

    pub fn fail_link(&self, log: &str) {
        self.state.borrow_mut().fail_link = Some(log.to_string());
    }

    pub fn force_framebuffer_incomplete(&self, status: u32) {
        self.state.borrow_mut().force_incomplete = Some(status);
    }

    // --- inspection ---

    pub fn delete_count(&self, kind: Kind, handle: GlHandle) -> usize {
        self.state
            .borrow()
            .deleted
            .iter()
            .filter(|&&(k, h)| k == kind && h == handle.raw())
            .count()
    }

    /// Created handles of `kind` with no delete call recorded.
    pub fn live_count(&self, kind: Kind) -> usize {
        let s = self.state.borrow();
        s.created
            .iter()
            .filter(|&&(k, h)| k == kind && !s.deleted.contains(&(k, h)))
            .count()
    }

    pub fn bound_buffer(&self, target: BufferTarget) -> Option<GlHandle> {
        self.state
            .borrow()
            .bound_buffers
            .get(&target)
            .copied()
            .map(GlHandle)
    }

    pub fn buffer_contents(&self, buffer: GlHandle) -> Vec<u8> {
        self.state
            .borrow()
            .buffer_data
            .get(&buffer.raw())
            .cloned()
            .unwrap_or_default()
    }

    pub fn bound_base(&self, slot: u32) -> Option<GlHandle> {
        self.state
            .borrow()
            .buffer_bases
            .get(&slot)
            .copied()
            .map(GlHandle)
    }

    pub fn attrib_configs(&self) -> Vec<AttribConfig> {
        self.state.borrow().attrib_configs.clone()
    }

    pub fn bound_framebuffer(&self) -> Option<GlHandle> {
        self.state.borrow().bound_fbo.map(GlHandle)
    }

    pub fn depth_attachment(&self, fbo: GlHandle) -> Option<GlHandle> {
        self.state
            .borrow()
            .attachments
            .get(&(fbo.raw(), Attachment::Depth))
            .copied()
            .map(GlHandle)
    }

    pub fn texture_at_unit(&self, unit: u32) -> Option<GlHandle> {
        self.state
            .borrow()
            .texture_units
            .get(&unit)
            .copied()
            .map(GlHandle)
    }

    /// Slot a named uniform block of `program` was bound to, if any.
    pub fn block_binding(&self, program: GlHandle, name: &str) -> Option<u32> {
        let s = self.state.borrow();
        let p = s.programs.get(&program.raw())?;
        let index = p.blocks.iter().position(|b| b == name)? as u32;
        p.block_bindings.get(&index).copied()
    }

    pub fn uniform_write_count(&self) -> usize {
        self.state.borrow().uniform_writes.len()
    }

    fn uniform_value(&self, program: GlHandle, name: &str) -> Option<UniformValue> {
        let s = self.state.borrow();
        let p = s.programs.get(&program.raw())?;
        let loc = p
            .uniforms
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, loc)| loc)?;
        s.uniform_writes
            .iter()
            .rev()
            .find(|&&(prog, l, _)| prog == program.raw() && l == loc)
            .map(|&(_, _, value)| value)
    }

    pub fn uniform_f32(&self, program: GlHandle, name: &str) -> Option<f32> {
        match self.uniform_value(program, name)? {
            UniformValue::F32(v) => Some(v),
            _ => None,
        }
    }

    pub fn uniform_i32(&self, program: GlHandle, name: &str) -> Option<i32> {
        match self.uniform_value(program, name)? {
            UniformValue::I32(v) => Some(v),
            _ => None,
        }
    }

    pub fn uniform_vec3(&self, program: GlHandle, name: &str) -> Option<[f32; 3]> {
        match self.uniform_value(program, name)? {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn uniform_vec4(&self, program: GlHandle, name: &str) -> Option<[f32; 4]> {
        match self.uniform_value(program, name)? {
            UniformValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn uniform_mat4(&self, program: GlHandle, name: &str) -> Option<[f32; 16]> {
        match self.uniform_value(program, name)? {
            UniformValue::Mat4(v) => Some(v),
            _ => None,
        }
    }

    /// Framebuffer that was bound each time the depth buffer was cleared.
    pub fn depth_clears(&self) -> Vec<Option<GlHandle>> {
        self.state.borrow().depth_clears.clone()
    }

    pub fn color_clears(&self) -> Vec<[f32; 4]> {
        self.state.borrow().color_clears.clone()
    }

    pub fn draws(&self) -> Vec<DrawCall> {
        self.state.borrow().draws.clone()
    }

    pub fn finish_count(&self) -> usize {
        self.state.borrow().finish_calls
    }
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrape uniform and uniform-block declarations from GLSL source text.
fn scrape_uniforms(source: &str, uniforms: &mut Vec<String>, blocks: &mut Vec<String>) {
    let mut in_block = false;
    for raw in source.lines() {
        let line = raw.trim();
        let line = match line.find("//") {
            Some(pos) => line[..pos].trim_end(),
            None => line,
        };
        if in_block {
            if line.starts_with('}') {
                in_block = false;
            }
            continue;
        }
        let is_uniform = line.starts_with("uniform ") || line.contains(") uniform ");
        if !is_uniform {
            continue;
        }
        if line.ends_with('{') {
            let after = line.split("uniform").nth(1).unwrap_or("");
            let name = after.trim_end_matches('{').trim();
            if !name.is_empty() && !blocks.iter().any(|b| b == name) {
                blocks.push(name.to_string());
            }
            in_block = true;
        } else if let Some(decl) = line.strip_suffix(';') {
            if let Some(name) = decl.split_whitespace().last() {
                let name = name.split('[').next().unwrap_or(name);
                if !uniforms.iter().any(|u| u == name) {
                    uniforms.push(name.to_string());
                }
            }
        }
    }
}

impl GlApi for RecordingGl {
    fn create_buffer(&self) -> RenderResult<GlHandle> {
        self.alloc(Kind::Buffer)
    }

    fn delete_buffer(&self, buffer: GlHandle) {
        self.record_delete(Kind::Buffer, buffer);
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<GlHandle>) {
        let mut s = self.state.borrow_mut();
        match buffer {
            Some(b) => {
                s.bound_buffers.insert(target, b.raw());
            }
            None => {
                s.bound_buffers.remove(&target);
            }
        }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], _usage: BufferUsage) {
        let mut s = self.state.borrow_mut();
        let bound = *s
            .bound_buffers
            .get(&target)
            .unwrap_or_else(|| panic!("buffer_data with no buffer bound to {target:?}"));
        s.buffer_data.insert(bound, data.to_vec());
    }

    fn bind_buffer_base(&self, _target: BufferTarget, slot: u32, buffer: Option<GlHandle>) {
        let mut s = self.state.borrow_mut();
        match buffer {
            Some(b) => {
                s.buffer_bases.insert(slot, b.raw());
            }
            None => {
                s.buffer_bases.remove(&slot);
            }
        }
    }

    fn create_vertex_array(&self) -> RenderResult<GlHandle> {
        self.alloc(Kind::VertexArray)
    }

    fn delete_vertex_array(&self, vao: GlHandle) {
        self.record_delete(Kind::VertexArray, vao);
    }

    fn bind_vertex_array(&self, vao: Option<GlHandle>) {
        self.state.borrow_mut().bound_vao = vao.map(GlHandle::raw);
    }

    fn enable_vertex_attrib_array(&self, _index: u32) {
        assert!(
            self.state.borrow().bound_vao.is_some(),
            "enable_vertex_attrib_array with no vertex array bound"
        );
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        let mut s = self.state.borrow_mut();
        assert!(
            s.bound_vao.is_some(),
            "vertex_attrib_pointer with no vertex array bound"
        );
        let config = AttribConfig {
            vao: s.bound_vao.map(GlHandle),
            buffer: s.bound_buffers.get(&BufferTarget::Vertex).copied().map(GlHandle),
            index,
            size,
            stride,
            offset,
            integer: false,
        };
        s.attrib_configs.push(config);
    }

    fn vertex_attrib_pointer_u32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        let mut s = self.state.borrow_mut();
        assert!(
            s.bound_vao.is_some(),
            "vertex_attrib_pointer with no vertex array bound"
        );
        let config = AttribConfig {
            vao: s.bound_vao.map(GlHandle),
            buffer: s.bound_buffers.get(&BufferTarget::Vertex).copied().map(GlHandle),
            index,
            size,
            stride,
            offset,
            integer: true,
        };
        s.attrib_configs.push(config);
    }

    fn create_texture(&self) -> RenderResult<GlHandle> {
        self.alloc(Kind::Texture)
    }

    fn delete_texture(&self, texture: GlHandle) {
        self.record_delete(Kind::Texture, texture);
    }

    fn bind_texture(&self, texture: Option<GlHandle>) {
        let mut s = self.state.borrow_mut();
        let unit = s.active_unit;
        match texture {
            Some(t) => {
                s.texture_units.insert(unit, t.raw());
            }
            None => {
                s.texture_units.remove(&unit);
            }
        }
    }

    fn active_texture(&self, unit: u32) {
        self.state.borrow_mut().active_unit = unit;
    }

    fn tex_image_2d(&self, _format: TextureFormat, _width: i32, _height: i32) {
        let s = self.state.borrow();
        assert!(
            s.texture_units.contains_key(&s.active_unit),
            "tex_image_2d with no texture bound"
        );
    }

    fn tex_filter(&self, _filter: TextureFilter) {}

    fn tex_wrap_clamp(&self) {}

    fn create_framebuffer(&self) -> RenderResult<GlHandle> {
        self.alloc(Kind::Framebuffer)
    }

    fn delete_framebuffer(&self, fbo: GlHandle) {
        self.record_delete(Kind::Framebuffer, fbo);
    }

    fn bind_framebuffer(&self, fbo: Option<GlHandle>) {
        self.state.borrow_mut().bound_fbo = fbo.map(GlHandle::raw);
    }

    fn framebuffer_texture_2d(&self, attachment: Attachment, texture: GlHandle, _level: i32) {
        let mut s = self.state.borrow_mut();
        let fbo = s
            .bound_fbo
            .expect("framebuffer_texture_2d with no framebuffer bound");
        s.attachments.insert((fbo, attachment), texture.raw());
    }

    fn check_framebuffer_status(&self) -> FramebufferStatus {
        match self.state.borrow().force_incomplete {
            Some(status) => FramebufferStatus::Incomplete(status),
            None => FramebufferStatus::Complete,
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> RenderResult<GlHandle> {
        let handle = self.alloc(Kind::Shader)?;
        self.state
            .borrow_mut()
            .shaders
            .insert(handle.raw(), (stage, String::new(), true));
        Ok(handle)
    }

    fn delete_shader(&self, shader: GlHandle) {
        self.record_delete(Kind::Shader, shader);
    }

    fn shader_source(&self, shader: GlHandle, source: &str) {
        if let Some(entry) = self.state.borrow_mut().shaders.get_mut(&shader.raw()) {
            entry.1 = source.to_string();
        }
    }

    fn compile_shader(&self, shader: GlHandle) {
        let mut s = self.state.borrow_mut();
        let fail_stage = s.fail_compile.as_ref().map(|&(stage, _)| stage);
        if let Some(entry) = s.shaders.get_mut(&shader.raw()) {
            entry.2 = fail_stage != Some(entry.0);
        }
    }

    fn compile_status(&self, shader: GlHandle) -> bool {
        self.state
            .borrow()
            .shaders
            .get(&shader.raw())
            .map(|&(_, _, ok)| ok)
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: GlHandle) -> String {
        let s = self.state.borrow();
        match (s.shaders.get(&shader.raw()), s.fail_compile.as_ref()) {
            (Some(&(stage, _, false)), Some((fail_stage, log))) if stage == *fail_stage => {
                log.clone()
            }
            _ => String::new(),
        }
    }

    fn create_program(&self) -> RenderResult<GlHandle> {
        let handle = self.alloc(Kind::Program)?;
        self.state
            .borrow_mut()
            .programs
            .insert(handle.raw(), ProgramState::default());
        Ok(handle)
    }

    fn delete_program(&self, program: GlHandle) {
        self.record_delete(Kind::Program, program);
    }

    fn attach_shader(&self, program: GlHandle, shader: GlHandle) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program.raw()) {
            p.attached.push(shader.raw());
        }
    }

    fn link_program(&self, program: GlHandle) {
        let mut s = self.state.borrow_mut();
        if let Some(log) = s.fail_link.clone() {
            if let Some(p) = s.programs.get_mut(&program.raw()) {
                p.linked = false;
                p.link_log = log;
            }
            return;
        }
        let sources: Vec<String> = s
            .programs
            .get(&program.raw())
            .map(|p| {
                p.attached
                    .iter()
                    .filter_map(|sh| s.shaders.get(sh).map(|(_, src, _)| src.clone()))
                    .collect()
            })
            .unwrap_or_default();
        let mut names = Vec::new();
        let mut blocks = Vec::new();
        for source in &sources {
            scrape_uniforms(source, &mut names, &mut blocks);
        }
        if let Some(p) = s.programs.get_mut(&program.raw()) {
            p.linked = true;
            p.uniforms = names
                .into_iter()
                .enumerate()
                .map(|(loc, name)| (name, loc as u32))
                .collect();
            p.blocks = blocks;
        }
    }

    fn link_status(&self, program: GlHandle) -> bool {
        self.state
            .borrow()
            .programs
            .get(&program.raw())
            .map(|p| p.linked)
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: GlHandle) -> String {
        self.state
            .borrow()
            .programs
            .get(&program.raw())
            .map(|p| p.link_log.clone())
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<GlHandle>) {
        self.state.borrow_mut().current_program = program.map(GlHandle::raw);
    }

    fn active_uniforms(&self, program: GlHandle) -> Vec<(String, UniformLocation)> {
        self.state
            .borrow()
            .programs
            .get(&program.raw())
            .map(|p| {
                p.uniforms
                    .iter()
                    .map(|(name, loc)| (name.clone(), UniformLocation(*loc)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn uniform_block_index(&self, program: GlHandle, name: &str) -> Option<u32> {
        self.state
            .borrow()
            .programs
            .get(&program.raw())?
            .blocks
            .iter()
            .position(|b| b == name)
            .map(|i| i as u32)
    }

    fn uniform_block_binding(&self, program: GlHandle, block_index: u32, slot: u32) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program.raw()) {
            p.block_bindings.insert(block_index, slot);
        }
    }

    fn uniform_f32(&self, location: UniformLocation, value: f32) {
        self.record_uniform(location, UniformValue::F32(value));
    }

    fn uniform_i32(&self, location: UniformLocation, value: i32) {
        self.record_uniform(location, UniformValue::I32(value));
    }

    fn uniform_u32(&self, location: UniformLocation, value: u32) {
        self.record_uniform(location, UniformValue::U32(value));
    }

    fn uniform_vec3(&self, location: UniformLocation, value: [f32; 3]) {
        self.record_uniform(location, UniformValue::Vec3(value));
    }

    fn uniform_vec4(&self, location: UniformLocation, value: [f32; 4]) {
        self.record_uniform(location, UniformValue::Vec4(value));
    }

    fn uniform_mat4(&self, location: UniformLocation, value: [f32; 16]) {
        self.record_uniform(location, UniformValue::Mat4(value));
    }

    fn set_depth_test(&self, enabled: bool) {
        self.state.borrow_mut().depth_test = enabled;
    }

    fn depth_test(&self) -> bool {
        self.state.borrow().depth_test
    }

    fn set_cull_face(&self, enabled: bool) {
        self.state.borrow_mut().cull_face = enabled;
    }

    fn cull_face(&self) -> bool {
        self.state.borrow().cull_face
    }

    fn set_cull_face_mode(&self, mode: CullFaceMode) {
        self.state.borrow_mut().cull_face_mode = mode;
    }

    fn cull_face_mode(&self) -> CullFaceMode {
        self.state.borrow().cull_face_mode
    }

    fn set_front_face(&self, winding: FrontFace) {
        self.state.borrow_mut().front_face = winding;
    }

    fn front_face(&self) -> FrontFace {
        self.state.borrow().front_face
    }

    fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.state.borrow_mut().viewport = [x, y, width, height];
    }

    fn viewport(&self) -> [i32; 4] {
        self.state.borrow().viewport
    }

    fn clear_depth(&self) {
        let mut s = self.state.borrow_mut();
        let fbo = s.bound_fbo.map(GlHandle);
        s.depth_clears.push(fbo);
    }

    fn clear_color_buffer(&self, color: [f32; 4]) {
        self.state.borrow_mut().color_clears.push(color);
    }

    fn draw_elements(&self, mode: PrimitiveMode, count: i32, _offset: i32) {
        let mut s = self.state.borrow_mut();
        assert!(s.current_program.is_some(), "draw_elements with no program");
        assert!(s.bound_vao.is_some(), "draw_elements with no vertex array");
        let call = DrawCall {
            fbo: s.bound_fbo.map(GlHandle),
            program: s.current_program.map(GlHandle),
            vao: s.bound_vao.map(GlHandle),
            mode,
            count,
        };
        s.draws.push(call);
    }

    fn draw_arrays(&self, mode: PrimitiveMode, _first: i32, count: i32) {
        let mut s = self.state.borrow_mut();
        assert!(s.current_program.is_some(), "draw_arrays with no program");
        let call = DrawCall {
            fbo: s.bound_fbo.map(GlHandle),
            program: s.current_program.map(GlHandle),
            vao: s.bound_vao.map(GlHandle),
            mode,
            count,
        };
        s.draws.push(call);
    }

    fn finish(&self) {
        self.state.borrow_mut().finish_calls += 1;
    }
}

impl RecordingGl {
    fn record_uniform(&self, location: UniformLocation, value: UniformValue) {
        let mut s = self.state.borrow_mut();
        let program = s
            .current_program
            .expect("uniform upload with no active program");
        s.uniform_writes.push((program, location.0, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scraper_ignores_trailing_line_comments() {
        let source = "#version 300 es\n\
            uniform vec4 uPosition; // clip space\n\
            uniform float uPointSize;\n";
        let mut uniforms = Vec::new();
        let mut blocks = Vec::new();
        scrape_uniforms(source, &mut uniforms, &mut blocks);
        assert_eq!(uniforms, ["uPosition", "uPointSize"]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn scraper_separates_blocks_from_plain_uniforms() {
        let source = "layout(std140) uniform MaterialBlock {\n\
            vec4 ambient; // rgb only\n\
            };\n\
            uniform sampler2D uDepthTexture;\n";
        let mut uniforms = Vec::new();
        let mut blocks = Vec::new();
        scrape_uniforms(source, &mut uniforms, &mut blocks);
        assert_eq!(uniforms, ["uDepthTexture"]);
        assert_eq!(blocks, ["MaterialBlock"]);
    }
}
