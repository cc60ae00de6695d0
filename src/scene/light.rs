//! Scene lighting state

use glam::Vec3;

/// Single light feeding both the shadow pass (light-space transform) and
/// the material pass (shading uniforms). Immutable within a frame.
#[derive(Debug, Clone)]
pub struct Light {
    pub ambient_color: Vec3,
    pub direction: Vec3,
    pub position: Vec3,
    pub color: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::splat(0.2),
            direction: Vec3::new(-0.3, -1.0, -0.2).normalize(),
            position: Vec3::new(4.0, 8.0, 4.0),
            color: Vec3::ONE,
        }
    }
}

impl Light {
    pub fn new(ambient_color: Vec3, direction: Vec3, position: Vec3, color: Vec3) -> Self {
        Self {
            ambient_color,
            direction: direction.normalize_or_zero(),
            position,
            color,
        }
    }
}
