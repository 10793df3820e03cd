//! The built-in raster image provider.
//!
//! Decodes the common image formats into [`Texture`]s. Read as
//! grayscale, the same files double as [`Heightmap`]s.

use std::path::Path;

use anyhow::anyhow;

use super::{ResourceError, TextureProvider};
use crate::data_structures::heightmap::Heightmap;
use crate::data_structures::texture::{PixelFormat, Texture};

const EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "tiff", "tif", "bmp", "ico", "hdr", "exr", "qoi",
];

pub struct ImageTextureProvider;

impl ImageTextureProvider {
    fn open(&self, path: &Path) -> Result<image::DynamicImage, ResourceError> {
        image::open(path).map_err(|source| ResourceError::Decode {
            path: path.to_path_buf(),
            source: anyhow!(source),
        })
    }
}

impl TextureProvider for ImageTextureProvider {
    fn supports_extension(&self, extension: &str) -> bool {
        EXTENSIONS.contains(&extension)
    }

    fn load_texture(&self, path: &Path) -> Result<Texture, ResourceError> {
        let image = self.open(path)?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Texture::new(
            width,
            height,
            PixelFormat::Rgba8,
            image.into_raw(),
        ))
    }

    fn load_heightmap(&self, path: &Path) -> Result<Heightmap, ResourceError> {
        let image = self.open(path)?.to_luma8();
        let (width, height) = image.dimensions();
        Ok(Heightmap::new(
            width as usize,
            height as usize,
            image.into_raw(),
            1,
        ))
    }
}
