//! Leaf scene-graph nodes: the nodes that issue actual draw sequences.
//!
//! Each renderable owns its backend resources, created fallibly through a
//! [`RenderBackend`] at construction so an unusable node never enters the
//! graph. Rendering follows the same sequence everywhere: bind the
//! program, set the per-frame uniforms from the camera, bind the
//! geometry, draw, then unbind in reverse. Any failure in that sequence
//! propagates unchanged to the caller.

use crate::backend::{
    BackendError, Geometry, Program, RenderBackend, ShaderSource, TextureBinding, UniformValue,
};
use crate::camera::Camera;
use crate::data_structures::heightmap::Heightmap;
use crate::data_structures::light::{AmbientLight, DirectionalLight};
use crate::data_structures::mesh::Mesh;
use crate::data_structures::scene_graph::{ChildList, SceneGraphNode};
use crate::data_structures::texture::Texture;
use crate::data_structures::vertex::MeshVertex;
use crate::math::Vector3F;

const MESH_VERTEX_SHADER_SRC: &str = "\
#version 330 core
in vec3 position;
in vec3 normal;
in vec2 uv_in;
out vec2 uv_out;
uniform vec3 offset;
uniform mat4 projection;
uniform mat4 orientation;
void main() {
    vec4 eye = orientation * vec4(position + offset, 1.0);
    gl_Position = projection * eye;
    uv_out = uv_in;
}";

const MESH_FRAGMENT_SHADER_SRC: &str = "\
#version 330 core
in vec2 uv_out;
out vec4 frag_color;
uniform sampler2D tex;
void main() {
    frag_color = texture(tex, uv_out);
}";

/// A mesh placed in the scene.
pub struct MeshNode {
    mesh: Mesh,
    program: Box<dyn Program>,
    geometry: Box<dyn Geometry>,
    children: ChildList<f32>,
}

impl MeshNode {
    pub fn new(mesh: Mesh, backend: &dyn RenderBackend) -> Result<Self, BackendError> {
        let program = backend.create_program(&[
            ShaderSource::vertex(MESH_VERTEX_SHADER_SRC),
            ShaderSource::fragment(MESH_FRAGMENT_SHADER_SRC),
        ])?;
        let indices: Vec<u32> = mesh
            .sub_meshes()
            .iter()
            .flat_map(|sub| sub.indices.iter().copied())
            .collect();
        let geometry = backend.create_geometry(mesh.vertices(), &indices)?;
        Ok(Self {
            mesh,
            program,
            geometry,
            children: ChildList::new(),
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

impl SceneGraphNode<f32> for MeshNode {
    fn render(&self, camera: &Camera<f32>) -> Result<(), BackendError> {
        self.program.bind();
        self.program
            .set_uniform("offset", UniformValue::from(*camera.position()))?;
        self.program
            .set_matrix_uniform("projection", camera.projection())?;
        self.program
            .set_matrix_uniform("orientation", camera.orientation())?;
        self.geometry.bind();
        self.geometry.draw(0, self.mesh.index_count());
        self.geometry.unbind();
        self.program.unbind();

        self.children.render_each(camera)
    }

    fn add(&mut self, child: Box<dyn SceneGraphNode<f32>>) {
        self.children.add(child);
    }

    fn is_pickable(&self) -> bool {
        true
    }
}

const SKYBOX_VERTEX_SHADER_SRC: &str = "\
#version 330 core
in vec3 position;
out vec3 direction;
uniform mat4 projection;
uniform mat4 orientation;
void main() {
    direction = position;
    vec4 eye = projection * orientation * vec4(position, 1.0);
    gl_Position = eye.xyww;
}";

const SKYBOX_FRAGMENT_SHADER_SRC: &str = "\
#version 330 core
in vec3 direction;
out vec4 frag_color;
uniform sampler2D sky;
void main() {
    frag_color = texture(sky, direction.xy * 0.5 + 0.5);
}";

// Two triangles per cube face, counter-clockwise from the inside.
const SKYBOX_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, // near
    5, 4, 7, 7, 6, 5, // far
    4, 0, 3, 3, 7, 4, // left
    1, 5, 6, 6, 2, 1, // right
    3, 2, 6, 6, 7, 3, // top
    4, 5, 1, 1, 0, 4, // bottom
];

/// A camera-locked box drawn around the whole scene.
///
/// The skybox ignores the camera position so it always appears infinitely
/// far away; only orientation and projection apply.
pub struct Skybox {
    extent: Vector3F,
    program: Box<dyn Program>,
    geometry: Box<dyn Geometry>,
    texture: Box<dyn TextureBinding>,
    children: ChildList<f32>,
}

impl Skybox {
    pub fn new(
        width: f32,
        height: f32,
        length: f32,
        texture: &Texture,
        backend: &dyn RenderBackend,
    ) -> Result<Self, BackendError> {
        let program = backend.create_program(&[
            ShaderSource::vertex(SKYBOX_VERTEX_SHADER_SRC),
            ShaderSource::fragment(SKYBOX_FRAGMENT_SHADER_SRC),
        ])?;
        let vertices = Self::corners(width, height, length);
        let geometry = backend.create_geometry(&vertices, &SKYBOX_INDICES)?;
        let texture = backend.create_texture(texture)?;
        Ok(Self {
            extent: Vector3F::new([width, height, length]),
            program,
            geometry,
            texture,
            children: ChildList::new(),
        })
    }

    pub fn extent(&self) -> &Vector3F {
        &self.extent
    }

    fn corners(width: f32, height: f32, length: f32) -> [MeshVertex; 8] {
        let (x, y, z) = (width / 2.0, height / 2.0, length / 2.0);
        let corner = |px: f32, py: f32, pz: f32| MeshVertex::new([px, py, pz], [0.0; 3], [0.0; 2]);
        [
            corner(-x, -y, -z),
            corner(x, -y, -z),
            corner(x, y, -z),
            corner(-x, y, -z),
            corner(-x, -y, z),
            corner(x, -y, z),
            corner(x, y, z),
            corner(-x, y, z),
        ]
    }
}

impl SceneGraphNode<f32> for Skybox {
    fn render(&self, camera: &Camera<f32>) -> Result<(), BackendError> {
        self.program.bind();
        self.program
            .set_matrix_uniform("projection", camera.projection())?;
        self.program
            .set_matrix_uniform("orientation", camera.orientation())?;
        self.texture.bind();
        self.geometry.bind();
        self.geometry.draw(0, SKYBOX_INDICES.len());
        self.geometry.unbind();
        self.texture.unbind();
        self.program.unbind();

        self.children.render_each(camera)
    }

    fn add(&mut self, child: Box<dyn SceneGraphNode<f32>>) {
        self.children.add(child);
    }

    fn is_pickable(&self) -> bool {
        false
    }
}

const TERRAIN_VERTEX_SHADER_SRC: &str = "\
#version 330 core
in vec3 position;
in vec3 normal;
in vec2 uv_in;
out vec2 uv_out;
out vec3 normal_out;
uniform vec3 offset;
uniform mat4 projection;
uniform mat4 orientation;
void main() {
    vec4 eye = orientation * vec4(position + offset, 1.0);
    gl_Position = projection * eye;
    uv_out = uv_in;
    normal_out = normal;
}";

const TERRAIN_FRAGMENT_SHADER_SRC: &str = "\
#version 330 core
in vec2 uv_out;
in vec3 normal_out;
out vec4 frag_color;
uniform sampler2D ground;
uniform vec4 ambient_color;
uniform float ambient_intensity;
uniform vec4 light_color;
uniform vec3 light_direction;
void main() {
    vec4 ambient = ambient_color * ambient_intensity;
    float facing = max(dot(normalize(normal_out), -normalize(light_direction)), 0.0);
    frag_color = texture(ground, uv_out) * (ambient + light_color * facing);
}";

/// A heightmap-driven ground mesh with ambient and directional lighting.
pub struct Terrain {
    heightmap: Heightmap,
    vertical_scale: f32,
    horizontal_scale: f32,
    ambient: AmbientLight<f32>,
    directional: DirectionalLight<f32>,
    program: Box<dyn Program>,
    geometry: Box<dyn Geometry>,
    texture: Box<dyn TextureBinding>,
    index_count: usize,
    children: ChildList<f32>,
}

impl Terrain {
    pub fn new(
        heightmap: Heightmap,
        texture: &Texture,
        vertical_scale: f32,
        horizontal_scale: f32,
        backend: &dyn RenderBackend,
    ) -> Result<Self, BackendError> {
        debug_assert!(
            heightmap.width() >= 2 && heightmap.height() >= 2,
            "a terrain grid requires at least 2x2 height samples"
        );
        let program = backend.create_program(&[
            ShaderSource::vertex(TERRAIN_VERTEX_SHADER_SRC),
            ShaderSource::fragment(TERRAIN_FRAGMENT_SHADER_SRC),
        ])?;
        let vertices = Self::grid_vertices(&heightmap, vertical_scale, horizontal_scale);
        let indices = Self::grid_indices(&heightmap);
        let geometry = backend.create_geometry(&vertices, &indices)?;
        let texture = backend.create_texture(texture)?;
        log::debug!(
            "built terrain grid: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );
        Ok(Self {
            heightmap,
            vertical_scale,
            horizontal_scale,
            ambient: AmbientLight::default(),
            directional: DirectionalLight::default(),
            program,
            geometry,
            texture,
            index_count: indices.len(),
            children: ChildList::new(),
        })
    }

    pub fn heightmap(&self) -> &Heightmap {
        &self.heightmap
    }

    pub fn vertical_scale(&self) -> f32 {
        self.vertical_scale
    }

    pub fn horizontal_scale(&self) -> f32 {
        self.horizontal_scale
    }

    pub fn set_ambience(&mut self, ambient: AmbientLight<f32>) -> &mut Self {
        self.ambient = ambient;
        self
    }

    pub fn set_directional(&mut self, directional: DirectionalLight<f32>) -> &mut Self {
        self.directional = directional;
        self
    }

    /// One vertex per height sample; byte samples span `vertical_scale`
    /// world units, grid steps span `horizontal_scale` (times the
    /// heightmap's own sample spacing).
    fn grid_vertices(heightmap: &Heightmap, vertical_scale: f32, horizontal_scale: f32) -> Vec<MeshVertex> {
        let (width, height) = (heightmap.width(), heightmap.height());
        let spacing = horizontal_scale * heightmap.scale() as f32;
        let lift = vertical_scale / f32::from(u8::MAX);
        let sample = |x: usize, y: usize| f32::from(heightmap.sample(x, y));
        let mut vertices = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let left = sample(x.saturating_sub(1), y);
                let right = sample((x + 1).min(width - 1), y);
                let up = sample(x, y.saturating_sub(1));
                let down = sample(x, (y + 1).min(height - 1));
                let mut normal =
                    Vector3F::new([(left - right) * lift, 2.0 * spacing, (up - down) * lift]);
                normal.normalize();
                vertices.push(MeshVertex::new(
                    [x as f32 * spacing, sample(x, y) * lift, y as f32 * spacing],
                    *normal.as_array(),
                    [
                        x as f32 / (width - 1).max(1) as f32,
                        y as f32 / (height - 1).max(1) as f32,
                    ],
                ));
            }
        }
        vertices
    }

    /// Two triangles per grid cell: (width − 1) × (height − 1) × 6
    /// indices.
    fn grid_indices(heightmap: &Heightmap) -> Vec<u32> {
        let (width, height) = (heightmap.width(), heightmap.height());
        let mut indices = Vec::with_capacity((width - 1) * (height - 1) * 6);
        for y in 0..height - 1 {
            for x in 0..width - 1 {
                let corner = (y * width + x) as u32;
                let below = corner + width as u32;
                indices.extend_from_slice(&[corner, below, below + 1, corner, below + 1, corner + 1]);
            }
        }
        indices
    }
}

impl SceneGraphNode<f32> for Terrain {
    fn render(&self, camera: &Camera<f32>) -> Result<(), BackendError> {
        self.program.bind();
        self.program
            .set_uniform("offset", UniformValue::from(*camera.position()))?;
        self.program
            .set_matrix_uniform("projection", camera.projection())?;
        self.program
            .set_matrix_uniform("orientation", camera.orientation())?;
        self.program
            .set_uniform("ambient_color", UniformValue::from(self.ambient.color))?;
        self.program.set_uniform(
            "ambient_intensity",
            UniformValue::from(self.ambient.intensity),
        )?;
        self.program
            .set_uniform("light_color", UniformValue::from(self.directional.color))?;
        self.program.set_uniform(
            "light_direction",
            UniformValue::from(self.directional.direction),
        )?;
        self.texture.bind();
        self.geometry.bind();
        self.geometry.draw(0, self.index_count);
        self.geometry.unbind();
        self.texture.unbind();
        self.program.unbind();

        self.children.render_each(camera)
    }

    fn add(&mut self, child: Box<dyn SceneGraphNode<f32>>) {
        self.children.add(child);
    }

    fn is_pickable(&self) -> bool {
        true
    }
}
