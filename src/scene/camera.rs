//! Camera state and interactive orbit controls

use glam::{Mat4, Vec3};

/// Camera for viewing the scene.
///
/// The view transform is kept as a single 4x4 matrix encoding position and
/// orientation; interactive controls mutate it in place, the passes read
/// it every frame to derive projection and view-projection matrices.
#[derive(Debug, Clone)]
pub struct Camera {
    /// View matrix (world -> eye).
    pub transform: Mat4,
    /// Orbit target point, in world space.
    pub target: Vec3,
    pub aspect_ratio: f32,
    /// Vertical field of view, degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Mat4::look_at_rh(Vec3::new(0.0, 5.0, 5.0), Vec3::ZERO, Vec3::Y),
            target: Vec3::ZERO,
            aspect_ratio: 4.0 / 3.0,
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            transform: Mat4::look_at_rh(position, target, Vec3::Y),
            target,
            ..Default::default()
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.transform
    }

    /// Camera position in world space, extracted from the view matrix.
    pub fn position(&self) -> Vec3 {
        self.transform.inverse().w_axis.truncate()
    }

    /// Move along the camera's forward axis toward/away from the target.
    pub fn zoom(&mut self, amount: f32) {
        let forward = self.view_row(2).normalize();
        self.transform *= Mat4::from_translation(forward * amount);
    }

    /// Orbit around the target about the world Y axis.
    pub fn orbit_yaw(&mut self, amount: f32) {
        self.transform = self.transform
            * Mat4::from_translation(self.target)
            * Mat4::from_rotation_y(amount * 0.01)
            * Mat4::from_translation(-self.target);
    }

    /// Orbit around the target about the camera's right axis.
    pub fn orbit_pitch(&mut self, amount: f32) {
        let right = self.view_row(0).normalize();
        self.transform = self.transform
            * Mat4::from_translation(self.target)
            * Mat4::from_axis_angle(right, amount * 0.01)
            * Mat4::from_translation(-self.target);
    }

    /// Pan the view; the orbit target slides with it.
    pub fn slide(&mut self, x_amount: f32, y_amount: f32) {
        let right = self.view_row(0).normalize();
        let up = self.view_row(1).normalize();
        let translation = up * y_amount * 0.01 + right * -x_amount * 0.01;
        self.transform *= Mat4::from_translation(translation);
        self.target -= translation;
    }

    // Rows of the view matrix are the camera basis vectors in world space.
    fn view_row(&self, row: usize) -> Vec3 {
        Vec3::new(
            self.transform.x_axis[row],
            self.transform.y_axis[row],
            self.transform.z_axis[row],
        )
    }
}
