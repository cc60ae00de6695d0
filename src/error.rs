//! Renderer error types

use crate::gl::ShaderStage;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building GPU resources.
///
/// All of these are initialization-time failures: the renderer does not
/// retry or fall back, it reports the API's diagnostic text and aborts
/// startup. Steady-state draw errors are surfaced through the GL debug
/// callback instead and never reach this type.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to compile {stage} shader:\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("failed to link shader program:\n{log}")]
    ShaderLink { log: String },
    #[error("failed to read shader source {path}: {source}")]
    ShaderIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("framebuffer incomplete (status 0x{status:x})")]
    FramebufferIncomplete { status: u32 },
    #[error("GL refused to allocate a {kind} object")]
    ResourceExhausted { kind: &'static str },
}

pub type RenderResult<T> = Result<T, RenderError>;
