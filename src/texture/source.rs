//! Texture sources: anything that can produce its raster on demand.

use image::imageops::{self, FilterType};
use image::{ImageEncoder, RgbaImage};

use crate::coords::TexCoordFunction;
use crate::error::Result;
use crate::texture::{Resolution, TextureDescriptor, Wrap};

/// A texture that can produce a raster image on demand.
///
/// Implementations are immutable once constructed, so a source can be shared
/// behind an `Arc` and queried concurrently. Every call produces a fresh
/// image; caching, if any, lives in the raster-decoding layer outside this
/// crate.
pub trait TextureSource: Send + Sync {
    /// Metadata for this texture.
    fn descriptor(&self) -> &TextureDescriptor;

    /// Produce the raster at its natural resolution.
    fn raster(&self) -> Result<RgbaImage>;

    /// Produce the raster resampled to the given resolution.
    fn raster_at(&self, resolution: Resolution) -> Result<RgbaImage> {
        let image = self.raster()?;
        if Resolution::of(&image) == resolution {
            return Ok(image);
        }
        Ok(imageops::resize(
            &image,
            resolution.width,
            resolution.height,
            FilterType::Triangle,
        ))
    }
}

/// An in-memory texture backed by an already decoded raster.
#[derive(Debug, Clone)]
pub struct ImageTexture {
    descriptor: TextureDescriptor,
    image: RgbaImage,
}

impl ImageTexture {
    pub fn new(descriptor: TextureDescriptor, image: RgbaImage) -> Self {
        Self { descriptor, image }
    }

    /// Export the raster as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let cursor = std::io::Cursor::new(&mut bytes);
        let encoder = image::codecs::png::PngEncoder::new(cursor);

        encoder.write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            image::ExtendedColorType::Rgba8,
        )?;

        Ok(bytes)
    }
}

impl TextureSource for ImageTexture {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    fn raster(&self) -> Result<RgbaImage> {
        Ok(self.image.clone())
    }
}

/// A fully transparent placeholder texture.
///
/// Used where a texture slot must be filled but nothing should be visible,
/// e.g. as the result of stacking zero layers.
#[derive(Debug, Clone)]
pub struct BlankTexture {
    descriptor: TextureDescriptor,
}

impl BlankTexture {
    const SIZE: u32 = 16;

    pub fn new() -> Self {
        Self {
            descriptor: TextureDescriptor::new(1.0, 1.0, Wrap::Repeat, TexCoordFunction::GlobalXZ),
        }
    }
}

impl Default for BlankTexture {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureSource for BlankTexture {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    fn raster(&self) -> Result<RgbaImage> {
        // Zero-initialized means transparent black.
        Ok(RgbaImage::new(Self::SIZE, Self::SIZE))
    }
}

/// Uniform-color test image, shared with the compositor tests.
#[cfg(test)]
pub(crate) fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(color))
}
