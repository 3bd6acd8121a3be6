//! Texture descriptors, sizing helpers, and texture sources.

mod composite;
mod source;

pub use composite::{stack_of, CompositeMode, CompositeTexture};
pub use source::{BlankTexture, ImageTexture, TextureSource};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::coords::TexCoordFunction;

/// How a texture behaves outside the unit coordinate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrap {
    /// The texture repeats endlessly.
    Repeat,
    /// Coordinates are clamped to the texture's edge.
    Clamp,
}

/// Immutable metadata for a texture.
///
/// Constructed once when a material is loaded, typically from a style
/// definition, and shared by reference afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// World width covered by one texture repeat.
    pub width: f64,
    /// World height covered by one texture repeat.
    pub height: f64,
    /// World width of one discrete repeating element (e.g. a plank), if the
    /// texture shows such elements.
    #[serde(default)]
    pub width_per_entity: Option<f64>,
    /// World height of one discrete repeating element, if any.
    #[serde(default)]
    pub height_per_entity: Option<f64>,
    /// Wrap behavior.
    pub wrap: Wrap,
    /// Coordinate function assigned to this texture.
    pub coord_function: TexCoordFunction,
}

impl TextureDescriptor {
    pub fn new(width: f64, height: f64, wrap: Wrap, coord_function: TexCoordFunction) -> Self {
        Self {
            width,
            height,
            width_per_entity: None,
            height_per_entity: None,
            wrap,
            coord_function,
        }
    }

    /// Set the world size of one discrete repeating element per dimension.
    pub fn with_entity_size(
        mut self,
        width_per_entity: Option<f64>,
        height_per_entity: Option<f64>,
    ) -> Self {
        self.width_per_entity = width_per_entity;
        self.height_per_entity = height_per_entity;
        self
    }
}

/// Pixel dimensions of a raster image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    /// Element-wise maximum of two resolutions.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Effective tile size for a measured world length and a discrete element
/// size.
///
/// The nearest whole number of elements (at least one) is fitted to the
/// measured length, and the tile is scaled so those elements keep the
/// texture's native aspect ratio. Full planks, never half ones.
pub fn entity_fit(measured: f64, nominal: f64, per_entity: f64) -> f64 {
    let entities = (measured / per_entity).round().max(1.0);
    let repeats = entities / (nominal / per_entity);
    measured / repeats
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_entity_fit_rounds_to_nearest_count() {
        // 4.4m of 0.5m planks: 9 planks, 4 per nominal 2m tile.
        let size = entity_fit(4.4, 2.0, 0.5);
        assert!((size - 4.4 / 2.25).abs() < EPSILON);
    }

    #[test]
    fn test_entity_fit_never_drops_below_one_element() {
        // A sliver shorter than half an element still shows one whole one.
        let size = entity_fit(0.1, 2.0, 0.5);
        assert!((size - 0.1 * 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_entity_fit_exact_multiple_keeps_nominal_size() {
        // 4m of 0.5m planks is exactly two nominal tiles.
        let size = entity_fit(4.0, 2.0, 0.5);
        assert!((size - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_descriptor_from_style_definition() {
        let json = r#"{
            "width": 2.0,
            "height": 1.0,
            "width_per_entity": 0.5,
            "wrap": "repeat",
            "coord_function": "strip_wall"
        }"#;

        let descriptor: TextureDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(descriptor.width, 2.0);
        assert_eq!(descriptor.width_per_entity, Some(0.5));
        assert_eq!(descriptor.height_per_entity, None);
        assert_eq!(descriptor.wrap, Wrap::Repeat);
        assert_eq!(descriptor.coord_function, TexCoordFunction::StripWall);
    }

    #[test]
    fn test_resolution_max() {
        let a = Resolution::new(64, 16);
        let b = Resolution::new(32, 32);
        assert_eq!(a.max(b), Resolution::new(64, 32));
    }
}
