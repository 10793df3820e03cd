//! Shader program contracts.

use std::fmt;

use super::BackendError;
use crate::math::{Color4F, Matrix4x4F, Point3F, Vector3F};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Source code for one stage of a program.
#[derive(Clone, Debug)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub source: String,
}

impl ShaderSource {
    pub fn vertex(source: impl Into<String>) -> Self {
        Self {
            stage: ShaderStage::Vertex,
            source: source.into(),
        }
    }

    pub fn fragment(source: impl Into<String>) -> Self {
        Self {
            stage: ShaderStage::Fragment,
            source: source.into(),
        }
    }
}

/// A value assignable to a named program uniform.
#[derive(Clone, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(value: [f32; 2]) -> Self {
        UniformValue::Vec2(value)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(value: [f32; 3]) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(value: [f32; 4]) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Vector3F> for UniformValue {
    fn from(value: Vector3F) -> Self {
        UniformValue::Vec3(*value.as_array())
    }
}

impl From<Point3F> for UniformValue {
    fn from(value: Point3F) -> Self {
        UniformValue::Vec3(*value.as_array())
    }
}

impl From<Color4F> for UniformValue {
    fn from(value: Color4F) -> Self {
        UniformValue::Vec4(*value.as_array())
    }
}

/// A compiled, linked shader program.
///
/// Programs are linked on creation (see
/// [`RenderBackend::create_program`](super::RenderBackend::create_program)),
/// so an unusable program value never exists.
pub trait Program {
    /// Makes this program current.
    fn bind(&self);

    /// Makes this program no longer current.
    fn unbind(&self);

    /// Assigns the named uniform of the bound program.
    fn set_uniform(&self, name: &str, value: UniformValue) -> Result<(), BackendError>;

    /// Assigns the named matrix uniform from the matrix's contiguous
    /// element view.
    fn set_matrix_uniform(&self, name: &str, matrix: &Matrix4x4F) -> Result<(), BackendError>;
}
