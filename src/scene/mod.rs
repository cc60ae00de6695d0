//! Scene-level state read by the render passes each frame

pub mod camera;
pub mod light;

pub use camera::Camera;
pub use light::Light;
