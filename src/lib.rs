//! # Surface Texturing
//!
//! Texture coordinate generation and texture compositing for 3D meshes built
//! from geographic vector data.
//!
//! ## Overview
//!
//! A mesh-building subsystem supplies an ordered list of 3D vertices plus a
//! [`TextureDescriptor`]; the descriptor's [`TexCoordFunction`] returns one 2D
//! coordinate per vertex, aligned by position, ready for rasterization.
//! Independently, a material system combines texture layers through
//! [`CompositeTexture`] and [`stack_of`] into a single raster image.
//!
//! ## Quick Start
//!
//! ```
//! use glam::DVec3;
//! use surface_texturing::{TexCoordFunction, TextureDescriptor, Wrap};
//!
//! // A wall texture covering 2m x 1m per repeat, unwrapped along the wall.
//! let descriptor =
//!     TextureDescriptor::new(2.0, 1.0, Wrap::Repeat, TexCoordFunction::StripWall);
//!
//! // Two rails, two rungs: an upright quad as a triangle strip.
//! let vertices = vec![
//!     DVec3::new(0.0, 1.0, 0.0),
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(4.0, 1.0, 0.0),
//!     DVec3::new(4.0, 0.0, 0.0),
//! ];
//!
//! let coords = descriptor
//!     .coord_function
//!     .apply(&vertices, &descriptor)
//!     .unwrap();
//! assert_eq!(coords.len(), vertices.len());
//! ```

pub mod coords;
pub mod error;
pub mod target;
pub mod texture;

// Re-export main types for convenience
pub use coords::TexCoordFunction;
pub use error::{Result, TexturingError};
pub use target::RenderTarget;
pub use texture::{
    stack_of, BlankTexture, CompositeMode, CompositeTexture, ImageTexture, Resolution,
    TextureDescriptor, TextureSource, Wrap,
};
