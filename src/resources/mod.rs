//! Loading meshes, textures and heightmaps from external files.
//!
//! The engine core defines no file format of its own. Parsing is supplied
//! by providers: a [`MeshProvider`] or [`TextureProvider`] declares which
//! file extensions it can load and produces the corresponding domain
//! value. Providers live in an explicitly constructed
//! [`ProviderRegistry`]: built at startup, queried during load, never
//! mutated from unrelated code.
//!
//! Built-in providers cover Wavefront OBJ ([`ObjMeshProvider`]), glTF
//! ([`GltfMeshProvider`]) and the common raster image formats
//! ([`ImageTextureProvider`], which doubles as the heightmap loader).

pub mod mesh;
pub mod texture;

pub use mesh::{GltfMeshProvider, ObjMeshProvider};
pub use texture::ImageTextureProvider;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::data_structures::heightmap::Heightmap;
use crate::data_structures::mesh::Mesh;
use crate::data_structures::texture::Texture;

/// A failure while resolving or loading an external resource.
#[derive(Debug)]
pub enum ResourceError {
    /// The path has no file extension to dispatch on.
    MissingExtension { path: PathBuf },
    /// No registered provider can load the requested extension.
    ProviderNotFound { extension: String },
    /// The file could not be read.
    Io(std::io::Error),
    /// The file was read but its content could not be decoded.
    Decode {
        path: PathBuf,
        source: anyhow::Error,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::MissingExtension { path } => {
                write!(f, "no file extension to select a provider for {}", path.display())
            }
            ResourceError::ProviderNotFound { extension } => {
                write!(f, "no known provider for the '{extension}' format")
            }
            ResourceError::Io(source) => write!(f, "failed to read resource: {source}"),
            ResourceError::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io(source) => Some(source),
            ResourceError::Decode { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(source: std::io::Error) -> Self {
        ResourceError::Io(source)
    }
}

/// Supplies meshes parsed from files of the extensions it declares.
pub trait MeshProvider {
    fn supports_extension(&self, extension: &str) -> bool;

    fn load_mesh(&self, path: &Path) -> Result<Mesh, ResourceError>;
}

/// Supplies textures and heightmaps parsed from files of the extensions
/// it declares.
pub trait TextureProvider {
    fn supports_extension(&self, extension: &str) -> bool;

    fn load_texture(&self, path: &Path) -> Result<Texture, ResourceError>;

    fn load_heightmap(&self, path: &Path) -> Result<Heightmap, ResourceError>;
}

/// The set of providers available to a running engine.
///
/// Dispatch is by lower-cased file extension; when several providers
/// claim the same extension the one registered first wins.
#[derive(Default)]
pub struct ProviderRegistry {
    mesh_providers: Vec<Box<dyn MeshProvider>>,
    texture_providers: Vec<Box<dyn TextureProvider>>,
}

impl ProviderRegistry {
    /// An empty registry; callers register every provider themselves.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with the built-in OBJ, glTF and image
    /// providers.
    pub fn with_default_providers() -> Self {
        let mut registry = Self::new();
        registry.register_mesh_provider(Box::new(ObjMeshProvider));
        registry.register_mesh_provider(Box::new(GltfMeshProvider));
        registry.register_texture_provider(Box::new(ImageTextureProvider));
        registry
    }

    pub fn register_mesh_provider(&mut self, provider: Box<dyn MeshProvider>) -> &mut Self {
        self.mesh_providers.push(provider);
        self
    }

    pub fn register_texture_provider(&mut self, provider: Box<dyn TextureProvider>) -> &mut Self {
        self.texture_providers.push(provider);
        self
    }

    /// Loads a mesh through the first provider claiming the path's
    /// extension.
    pub fn load_mesh(&self, path: impl AsRef<Path>) -> Result<Mesh, ResourceError> {
        let path = path.as_ref();
        let extension = file_extension(path)?;
        for provider in &self.mesh_providers {
            if provider.supports_extension(&extension) {
                log::debug!("loading mesh {} via '{}' provider", path.display(), extension);
                return provider.load_mesh(path);
            }
        }
        Err(ResourceError::ProviderNotFound { extension })
    }

    /// Loads a texture through the first provider claiming the path's
    /// extension.
    pub fn load_texture(&self, path: impl AsRef<Path>) -> Result<Texture, ResourceError> {
        let path = path.as_ref();
        let extension = file_extension(path)?;
        for provider in &self.texture_providers {
            if provider.supports_extension(&extension) {
                log::debug!(
                    "loading texture {} via '{}' provider",
                    path.display(),
                    extension
                );
                return provider.load_texture(path);
            }
        }
        Err(ResourceError::ProviderNotFound { extension })
    }

    /// Loads a heightmap through the first provider claiming the path's
    /// extension.
    pub fn load_heightmap(&self, path: impl AsRef<Path>) -> Result<Heightmap, ResourceError> {
        let path = path.as_ref();
        let extension = file_extension(path)?;
        for provider in &self.texture_providers {
            if provider.supports_extension(&extension) {
                log::debug!(
                    "loading heightmap {} via '{}' provider",
                    path.display(),
                    extension
                );
                return provider.load_heightmap(path);
            }
        }
        Err(ResourceError::ProviderNotFound { extension })
    }
}

fn file_extension(path: &Path) -> Result<String, ResourceError> {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| ResourceError::MissingExtension {
            path: path.to_path_buf(),
        })
}
