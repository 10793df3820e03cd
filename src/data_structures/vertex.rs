//! The vertex layout shared between meshes and the graphics backend.

/// One interleaved vertex: position, normal, texture coordinates.
///
/// The layout is `repr(C)` and `Pod` so a vertex slice can be handed to a
/// backend as raw bytes without copying.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }
}
