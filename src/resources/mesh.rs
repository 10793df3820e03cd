//! Built-in mesh providers: Wavefront OBJ and glTF.

use std::path::Path;

use anyhow::anyhow;

use super::{MeshProvider, ResourceError};
use crate::data_structures::material::Material;
use crate::data_structures::mesh::{Mesh, SubMesh};
use crate::data_structures::vertex::MeshVertex;
use crate::math::Color4F;

fn decode_error(path: &Path, source: anyhow::Error) -> ResourceError {
    ResourceError::Decode {
        path: path.to_path_buf(),
        source,
    }
}

/// Loads `.obj` meshes (and their `.mtl` materials) through `tobj`.
pub struct ObjMeshProvider;

impl MeshProvider for ObjMeshProvider {
    fn supports_extension(&self, extension: &str) -> bool {
        extension == "obj"
    }

    fn load_mesh(&self, path: &Path) -> Result<Mesh, ResourceError> {
        let (models, obj_materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| decode_error(path, anyhow!(source)))?;

        let materials = match obj_materials {
            Ok(obj_materials) => obj_materials
                .into_iter()
                .map(|obj_material| {
                    let mut material = Material::new(obj_material.name);
                    if let Some([r, g, b]) = obj_material.diffuse {
                        material.diffusion = Color4F::new([r, g, b, 1.0]);
                    }
                    if let Some([r, g, b]) = obj_material.ambient {
                        material.ambience = Color4F::new([r, g, b, 1.0]);
                    }
                    if let Some([r, g, b]) = obj_material.specular {
                        material.specularity = Color4F::new([r, g, b, 1.0]);
                    }
                    material
                })
                .collect(),
            Err(source) => {
                // A mesh without a material library is still renderable.
                log::warn!("no loadable materials for {}: {}", path.display(), source);
                Vec::new()
            }
        };

        let mut vertices = Vec::new();
        let mut sub_meshes = Vec::new();
        for model in models {
            let mesh = model.mesh;
            if mesh.normals.is_empty() {
                log::warn!(
                    "model '{}' in {} carries no normals; defaulting to zero",
                    model.name,
                    path.display()
                );
            }
            let base = vertices.len() as u32;
            for i in 0..mesh.positions.len() / 3 {
                let position = [
                    mesh.positions[i * 3],
                    mesh.positions[i * 3 + 1],
                    mesh.positions[i * 3 + 2],
                ];
                let normal = if mesh.normals.is_empty() {
                    [0.0; 3]
                } else {
                    [
                        mesh.normals[i * 3],
                        mesh.normals[i * 3 + 1],
                        mesh.normals[i * 3 + 2],
                    ]
                };
                let tex_coords = if mesh.texcoords.is_empty() {
                    [0.0; 2]
                } else {
                    [mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1]]
                };
                vertices.push(MeshVertex::new(position, normal, tex_coords));
            }
            let indices = mesh.indices.iter().map(|index| base + index).collect();
            sub_meshes.push(SubMesh::new(mesh.material_id.unwrap_or(0), indices));
        }

        Ok(Mesh::new(vertices, materials, sub_meshes))
    }
}

/// Loads `.gltf`/`.glb` meshes through the `gltf` crate.
pub struct GltfMeshProvider;

impl MeshProvider for GltfMeshProvider {
    fn supports_extension(&self, extension: &str) -> bool {
        matches!(extension, "gltf" | "glb")
    }

    fn load_mesh(&self, path: &Path) -> Result<Mesh, ResourceError> {
        let (document, buffers, _images) =
            gltf::import(path).map_err(|source| decode_error(path, anyhow!(source)))?;

        let materials = document
            .materials()
            .map(|gltf_material| {
                let mut material =
                    Material::new(gltf_material.name().unwrap_or("unnamed").to_string());
                let factor = gltf_material.pbr_metallic_roughness().base_color_factor();
                material.diffusion = Color4F::new(factor);
                material
            })
            .collect();

        let mut vertices = Vec::new();
        let mut sub_meshes = Vec::new();
        for gltf_mesh in document.meshes() {
            for primitive in gltf_mesh.primitives() {
                let reader = primitive
                    .reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

                let base = vertices.len() as u32;
                let positions = reader.read_positions().ok_or_else(|| {
                    decode_error(path, anyhow!("primitive carries no positions"))
                })?;
                let first = vertices.len();
                for position in positions {
                    vertices.push(MeshVertex::new(position, [0.0; 3], [0.0; 2]));
                }
                if let Some(normals) = reader.read_normals() {
                    for (offset, normal) in normals.enumerate() {
                        vertices[first + offset].normal = normal;
                    }
                }
                if let Some(tex_coords) = reader.read_tex_coords(0).map(|uv| uv.into_f32()) {
                    for (offset, uv) in tex_coords.enumerate() {
                        vertices[first + offset].tex_coords = uv;
                    }
                }

                let added = (vertices.len() - first) as u32;
                let indices = match reader.read_indices() {
                    Some(indices) => indices.into_u32().map(|index| base + index).collect(),
                    // Non-indexed primitives draw their vertices in order.
                    None => (base..base + added).collect(),
                };
                sub_meshes.push(SubMesh::new(
                    primitive.material().index().unwrap_or(0),
                    indices,
                ));
            }
        }

        Ok(Mesh::new(vertices, materials, sub_meshes))
    }
}
