//! Contracts between the engine core and a native graphics backend.
//!
//! The engine itself never talks to a graphics API. Leaf scene-graph
//! nodes create their GPU resources through a [`RenderBackend`] and issue
//! their draw sequences through the [`Program`], [`Geometry`] and
//! [`TextureBinding`] traits; a host application supplies the concrete
//! implementations.
//!
//! Backend failures are structured values, never panics: every way a
//! backend call can fail maps to its own [`BackendError`] kind so callers
//! can tell a missing uniform from a mistyped one, or a shader that failed
//! to compile from a program that failed to link. This is deliberately a
//! separate regime from the math kernel, which treats its precondition
//! violations as debug assertions instead.

pub mod geometry;
pub mod program;

pub use geometry::{Geometry, TextureBinding};
pub use program::{Program, ShaderSource, ShaderStage, UniformValue};

use std::fmt;

use crate::data_structures::texture::Texture;
use crate::data_structures::vertex::MeshVertex;

/// A failure reported by the graphics binding layer.
#[derive(Debug)]
pub enum BackendError {
    /// The implementation failed to create a backend object.
    ResourceAllocation { detail: String },
    /// A shader failed to compile; carries the offending source text.
    ShaderCompilation {
        stage: ShaderStage,
        log: String,
        source: String,
    },
    /// A program failed to link.
    ProgramLink { log: String },
    /// The named uniform does not exist in the bound program.
    UniformNotFound { name: String },
    /// The named uniform exists but the provided value has the wrong
    /// type.
    UniformTypeMismatch { name: String, detail: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::ResourceAllocation { detail } => {
                write!(f, "failed to create a backend object: {detail}")
            }
            BackendError::ShaderCompilation { stage, log, .. } => {
                write!(f, "failed to compile {stage} shader: {log}")
            }
            BackendError::ProgramLink { log } => {
                write!(f, "failed to link program: {log}")
            }
            BackendError::UniformNotFound { name } => {
                write!(f, "no uniform named '{name}' in the bound program")
            }
            BackendError::UniformTypeMismatch { name, detail } => {
                write!(f, "uniform '{name}' has a mismatched type: {detail}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

/// Factory for the backend objects a scene-graph node owns.
pub trait RenderBackend {
    /// Compiles and links the provided shaders into a program.
    fn create_program(&self, shaders: &[ShaderSource]) -> Result<Box<dyn Program>, BackendError>;

    /// Uploads a vertex/index buffer pair.
    fn create_geometry(
        &self,
        vertices: &[MeshVertex],
        indices: &[u32],
    ) -> Result<Box<dyn Geometry>, BackendError>;

    /// Uploads a texture.
    fn create_texture(&self, texture: &Texture) -> Result<Box<dyn TextureBinding>, BackendError>;
}
