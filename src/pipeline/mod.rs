//! Frame rendering pipeline.
//!
//! A frame is a fixed sequence of passes over shared GPU resources:
//! the shadow pass fills the depth map from the light's view, the
//! material pass shades scene and terrain geometry sampling that map,
//! the icon pass marks the light, and an optional screen pass shows
//! the raw depth map for debugging. Every pass restores the global
//! state it touched, so pass order is the only cross-pass coupling.

pub mod bindings;
pub(crate) mod geometry;
pub mod icon_pass;
pub mod material_pass;
pub mod screen_pass;
pub mod shadow_pass;
pub mod terrain_pass;

pub use icon_pass::IconPass;
pub use material_pass::{MaterialPass, MaterialShader};
pub use screen_pass::ScreenPass;
pub use shadow_pass::{ShadowPass, ShadowSettings};
pub use terrain_pass::TerrainPass;

use crate::error::RenderResult;
use crate::gl::Gl;
use crate::resources::{Material, MeshVertex};
use crate::scene::{Camera, Light};
use glam::Mat4;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub shadow: ShadowSettings,
    pub clear_color: [f32; 4],
    /// Replace the final image with the raw shadow depth map.
    pub show_depth_debug: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            shadow: ShadowSettings::default(),
            clear_color: [0.3, 0.3, 0.3, 1.0],
            show_depth_debug: false,
        }
    }
}

/// Owns every pass and drives them in order once per frame.
pub struct Renderer {
    gl: Gl,
    config: RendererConfig,
    shadow: ShadowPass,
    material_shader: MaterialShader,
    scene: MaterialPass,
    terrain: TerrainPass,
    icon: IconPass,
    screen: ScreenPass,
}

impl Renderer {
    pub fn new(
        gl: &Gl,
        materials: &[Material],
        vertices: &[MeshVertex],
        indices: &[u32],
        config: RendererConfig,
    ) -> RenderResult<Self> {
        log::info!(
            "renderer init, {} materials, {} vertices, {} indices",
            materials.len(),
            vertices.len(),
            indices.len()
        );
        Ok(Self {
            gl: Rc::clone(gl),
            shadow: ShadowPass::new(gl, config.shadow)?,
            material_shader: MaterialShader::new(gl)?,
            scene: MaterialPass::new(gl, materials, vertices, indices)?,
            terrain: TerrainPass::new(gl)?,
            icon: IconPass::new(gl)?,
            screen: ScreenPass::new(gl)?,
            config,
        })
    }

    /// Draw one frame into the default framebuffer at `width` x `height`.
    pub fn render_frame(
        &mut self,
        camera: &Camera,
        light: &Light,
        model: &Mat4,
        width: i32,
        height: i32,
    ) {
        self.gl.set_viewport(0, 0, width, height);
        self.gl.clear_color_buffer(self.config.clear_color);
        self.gl.clear_depth();

        let view_proj = camera.view_projection();
        let light_space = self.shadow.light_space_matrix(light);

        self.shadow.begin();
        self.shadow.set_mvp(&(light_space * *model));
        self.scene.draw_vertices();
        self.shadow.set_mvp(&light_space);
        self.terrain.draw_vertices();
        self.shadow.end();

        self.material_shader.begin();
        self.material_shader
            .bind_depth_texture(self.shadow.depth_texture());
        self.material_shader.set_uniforms(
            camera.position(),
            light,
            &(view_proj * *model),
            &(light_space * *model),
            model,
        );
        self.material_shader
            .bind_materials_buffer(self.scene.materials_buffer());
        self.scene.draw_vertices();
        self.material_shader.set_uniforms(
            camera.position(),
            light,
            &view_proj,
            &light_space,
            &Mat4::IDENTITY,
        );
        self.material_shader
            .bind_materials_buffer(self.terrain.materials_buffer());
        self.terrain.draw_vertices();
        self.material_shader.end();

        self.icon.draw(
            view_proj * light.position.extend(1.0),
            light.color.extend(1.0),
        );

        if self.config.show_depth_debug {
            self.screen.draw(self.shadow.depth_texture());
        }

        self.gl.finish();
    }

    pub fn set_show_depth_debug(&mut self, enabled: bool) {
        self.config.show_depth_debug = enabled;
    }

    pub fn shadow_pass(&self) -> &ShadowPass {
        &self.shadow
    }

    #[cfg(test)]
    pub(crate) fn material_shader(&self) -> &MaterialShader {
        &self.material_shader
    }
}
