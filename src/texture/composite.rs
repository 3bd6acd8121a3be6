//! Composite textures: two sources combined into one raster.

use std::sync::Arc;

use image::imageops;
use image::{Rgba, RgbaImage};
use log::trace;

use crate::error::Result;
use crate::texture::{BlankTexture, Resolution, TextureDescriptor, TextureSource};

/// How the two source textures are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Combine texture A's alpha channel with texture B's RGB channels.
    AlphaFromA,
    /// Draw texture A, then texture B on top.
    Stacked,
}

/// Two textures combined with each other.
///
/// The combined raster is recomputed on every request; there is no cache at
/// this layer. The composite adopts texture A's descriptor, so it tiles and
/// projects like its base layer.
pub struct CompositeTexture {
    mode: CompositeMode,
    rescale: bool,
    texture_a: Arc<dyn TextureSource>,
    texture_b: Arc<dyn TextureSource>,
    descriptor: TextureDescriptor,
}

impl CompositeTexture {
    pub fn new(
        mode: CompositeMode,
        rescale: bool,
        texture_a: Arc<dyn TextureSource>,
        texture_b: Arc<dyn TextureSource>,
    ) -> Self {
        let descriptor = texture_a.descriptor().clone();
        Self {
            mode,
            rescale,
            texture_a,
            texture_b,
            descriptor,
        }
    }

    pub fn mode(&self) -> CompositeMode {
        self.mode
    }
}

impl TextureSource for CompositeTexture {
    fn descriptor(&self) -> &TextureDescriptor {
        &self.descriptor
    }

    fn raster(&self) -> Result<RgbaImage> {
        let mut image_a = self.texture_a.raster()?;
        let mut image_b = self.texture_b.raster()?;

        if self.rescale {
            let output = Resolution::of(&image_a).max(Resolution::of(&image_b));
            trace!(
                "rescaling composite sources to {}x{}",
                output.width,
                output.height
            );
            image_a = self.texture_a.raster_at(output)?;
            image_b = self.texture_b.raster_at(output)?;
        } else if image_b.width() < image_a.width() || image_b.height() < image_a.height() {
            // Repeat the smaller overlay until it covers the base image.
            trace!(
                "tiling {}x{} overlay across {}x{} base",
                image_b.width(),
                image_b.height(),
                image_a.width(),
                image_a.height()
            );
            let mut tiled = RgbaImage::new(image_a.width(), image_a.height());
            imageops::tile(&mut tiled, &image_b);
            image_b = tiled;
        }

        let (out_width, out_height) = image_a.dimensions();
        let mut result = RgbaImage::new(out_width, out_height);

        match self.mode {
            CompositeMode::Stacked => {
                imageops::overlay(&mut result, &image_a, 0, 0);
                imageops::overlay(&mut result, &image_b, 0, 0);
            }
            CompositeMode::AlphaFromA => {
                for y in 0..out_height {
                    for x in 0..out_width {
                        let Rgba([red, green, blue, _]) = *image_b.get_pixel(x, y);
                        let Rgba([_, _, _, alpha]) = *image_a.get_pixel(x, y);
                        result.put_pixel(x, y, Rgba([red, green, blue, alpha]));
                    }
                }
            }
        }

        Ok(result)
    }
}

/// Stacks an arbitrary number of textures, ordered bottom to top.
///
/// Zero layers yield a fully transparent [`BlankTexture`]; one layer is
/// returned unchanged; more layers fold into nested [`CompositeMode::Stacked`]
/// composites with rescaling enabled, so the visual result does not depend on
/// how the fold associates.
pub fn stack_of(textures: &[Arc<dyn TextureSource>]) -> Arc<dyn TextureSource> {
    match textures {
        [] => Arc::new(BlankTexture::new()),
        [single] => Arc::clone(single),
        [bottom, rest @ ..] => Arc::new(CompositeTexture::new(
            CompositeMode::Stacked,
            true,
            Arc::clone(bottom),
            stack_of(rest),
        )),
    }
}
