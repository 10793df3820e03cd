//! Static 3D mesh data.

use super::material::Material;
use super::vertex::MeshVertex;

/// A discrete rendering unit inside a [`Mesh`]: the indices of one
/// sub-mesh and the material they are drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct SubMesh {
    /// Index into the mesh's material list.
    pub material_index: usize,
    /// Indices into the mesh's shared vertex list.
    pub indices: Vec<u32>,
}

impl SubMesh {
    pub fn new(material_index: usize, indices: Vec<u32>) -> Self {
        Self {
            material_index,
            indices,
        }
    }
}

/// A general-purpose static mesh: one shared vertex list, the materials
/// it references, and the indexed sub-mesh groups that partition it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<MeshVertex>,
    materials: Vec<Material>,
    sub_meshes: Vec<SubMesh>,
}

impl Mesh {
    pub fn new(vertices: Vec<MeshVertex>, materials: Vec<Material>, sub_meshes: Vec<SubMesh>) -> Self {
        Self {
            vertices,
            materials,
            sub_meshes,
        }
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn sub_meshes(&self) -> &[SubMesh] {
        &self.sub_meshes
    }

    /// The total number of indices across all sub-meshes.
    pub fn index_count(&self) -> usize {
        self.sub_meshes.iter().map(|sub| sub.indices.len()).sum()
    }

    /// The vertex list as raw bytes, in the exact in-memory layout of
    /// [`MeshVertex`], for zero-copy upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
