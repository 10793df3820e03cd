//! Shared test fixtures: a recording graphics backend and small mesh
//! builders.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use dusk_ngin::backend::{
    BackendError, Geometry, Program, RenderBackend, ShaderSource, TextureBinding, UniformValue,
};
use dusk_ngin::data_structures::mesh::{Mesh, SubMesh};
use dusk_ngin::data_structures::texture::Texture;
use dusk_ngin::data_structures::vertex::MeshVertex;
use dusk_ngin::math::Matrix4x4F;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Everything a scene node asked the backend to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendEvent {
    CreateProgram { shader_count: usize },
    CreateGeometry { vertex_count: usize, index_count: usize },
    CreateTexture { width: u32, height: u32 },
    BindProgram,
    UnbindProgram,
    SetUniform { name: String, value: UniformValue },
    SetMatrixUniform { name: String, elements: Vec<f32> },
    BindGeometry,
    UnbindGeometry,
    Draw { first: usize, count: usize },
    BindTexture,
    UnbindTexture,
}

pub type EventLog = Rc<RefCell<Vec<BackendEvent>>>;

/// A backend whose objects record every call instead of touching a GPU.
pub struct RecordingBackend {
    events: EventLog,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<BackendEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn create_program(&self, shaders: &[ShaderSource]) -> Result<Box<dyn Program>, BackendError> {
        self.events.borrow_mut().push(BackendEvent::CreateProgram {
            shader_count: shaders.len(),
        });
        Ok(Box::new(RecordingProgram {
            events: Rc::clone(&self.events),
        }))
    }

    fn create_geometry(
        &self,
        vertices: &[MeshVertex],
        indices: &[u32],
    ) -> Result<Box<dyn Geometry>, BackendError> {
        self.events.borrow_mut().push(BackendEvent::CreateGeometry {
            vertex_count: vertices.len(),
            index_count: indices.len(),
        });
        Ok(Box::new(RecordingGeometry {
            events: Rc::clone(&self.events),
        }))
    }

    fn create_texture(&self, texture: &Texture) -> Result<Box<dyn TextureBinding>, BackendError> {
        self.events.borrow_mut().push(BackendEvent::CreateTexture {
            width: texture.width(),
            height: texture.height(),
        });
        Ok(Box::new(RecordingTexture {
            events: Rc::clone(&self.events),
        }))
    }
}

struct RecordingProgram {
    events: EventLog,
}

impl Program for RecordingProgram {
    fn bind(&self) {
        self.events.borrow_mut().push(BackendEvent::BindProgram);
    }

    fn unbind(&self) {
        self.events.borrow_mut().push(BackendEvent::UnbindProgram);
    }

    fn set_uniform(&self, name: &str, value: UniformValue) -> Result<(), BackendError> {
        self.events.borrow_mut().push(BackendEvent::SetUniform {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn set_matrix_uniform(&self, name: &str, matrix: &Matrix4x4F) -> Result<(), BackendError> {
        self.events.borrow_mut().push(BackendEvent::SetMatrixUniform {
            name: name.to_string(),
            elements: matrix.as_slice().to_vec(),
        });
        Ok(())
    }
}

struct RecordingGeometry {
    events: EventLog,
}

impl Geometry for RecordingGeometry {
    fn bind(&self) {
        self.events.borrow_mut().push(BackendEvent::BindGeometry);
    }

    fn unbind(&self) {
        self.events.borrow_mut().push(BackendEvent::UnbindGeometry);
    }

    fn draw(&self, first: usize, count: usize) {
        self.events
            .borrow_mut()
            .push(BackendEvent::Draw { first, count });
    }
}

struct RecordingTexture {
    events: EventLog,
}

impl TextureBinding for RecordingTexture {
    fn bind(&self) {
        self.events.borrow_mut().push(BackendEvent::BindTexture);
    }

    fn unbind(&self) {
        self.events.borrow_mut().push(BackendEvent::UnbindTexture);
    }
}

/// A single-triangle mesh with one material group.
pub fn triangle_mesh() -> Mesh {
    let vertices = vec![
        MeshVertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
        MeshVertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
        MeshVertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
    ];
    Mesh::new(vertices, Vec::new(), vec![SubMesh::new(0, vec![0, 1, 2])])
}
