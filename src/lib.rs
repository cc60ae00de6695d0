//! Forward renderer over an OpenGL-ES-3 class API.
//!
//! The crate is organised in three layers: [`gl`] owns the raw API
//! boundary and RAII resource wrappers, [`scene`] and [`resources`]
//! hold CPU-side state, and [`pipeline`] composes the per-frame passes
//! into a [`pipeline::Renderer`].

pub mod error;
pub mod gl;
pub mod pipeline;
pub mod resources;
pub mod scene;

pub use error::{RenderError, RenderResult};
pub use pipeline::{Renderer, RendererConfig, ShadowSettings};
pub use scene::{Camera, Light};
