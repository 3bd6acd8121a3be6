//! Texture coordinate functions.
//!
//! A closed set of named projection algorithms, each a pure function from an
//! ordered vertex list plus a [`TextureDescriptor`] to one (s, t) pair per
//! vertex. Style definitions reference these functions by name, hence the
//! serde derives.

mod face;
mod slope;
mod strip;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::texture::TextureDescriptor;

use strip::StripMode;

/// Named texture coordinate functions.
///
/// Assigned to a [`TextureDescriptor`] when a material is loaded and applied
/// by the mesh builder once per geometry batch. Dispatch is exhaustive over
/// this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TexCoordFunction {
    /// Projects x and z vertex coordinates scaled by the texture's world
    /// size. Works for any geometry, but steep inclines or vertical walls
    /// produce odd-looking results.
    GlobalXZ,
    /// Like [`TexCoordFunction::GlobalXZ`], but uses y instead of z. Better
    /// suited for certain vertical surfaces.
    GlobalXY,
    /// Orients the texture on each triangle along the triangle's downward
    /// slope. Input is consumed as consecutive vertex triples.
    SlopedTriangles,
    /// Unwraps a triangle strip (alternating between upper and lower vertex)
    /// by arc length along the wall, with t based on the height of each rail
    /// pair.
    StripWall,
    /// Like [`TexCoordFunction::StripWall`], except that t alternates between
    /// 1 and 0, spanning the strip height exactly once.
    StripFitHeight,
    /// Stretches the texture exactly once onto the strip, in both dimensions.
    /// Most commonly used for a rectangle represented as a two-triangle
    /// strip.
    StripFit,
    /// Fits the texture onto the bounding rectangle of a flat polygon face,
    /// independent of the texture's world size.
    FaceFit,
}

impl TexCoordFunction {
    /// Compute one texture coordinate per input vertex.
    ///
    /// The output has the same length and order as `vertices`. Fails with
    /// [`TexturingError::InvalidVertexCount`] when the vertex count violates
    /// the variant's shape requirement; no partial output is ever returned.
    ///
    /// [`TexturingError::InvalidVertexCount`]: crate::TexturingError::InvalidVertexCount
    pub fn apply(
        &self,
        vertices: &[DVec3],
        descriptor: &TextureDescriptor,
    ) -> Result<Vec<DVec2>> {
        match self {
            TexCoordFunction::GlobalXZ => Ok(global(vertices, descriptor, false)),
            TexCoordFunction::GlobalXY => Ok(global(vertices, descriptor, true)),
            TexCoordFunction::SlopedTriangles => slope::apply(vertices, descriptor),
            TexCoordFunction::StripWall => strip::apply(vertices, descriptor, StripMode::Wall),
            TexCoordFunction::StripFitHeight => {
                strip::apply(vertices, descriptor, StripMode::FitHeight)
            }
            TexCoordFunction::StripFit => strip::apply(vertices, descriptor, StripMode::Fit),
            TexCoordFunction::FaceFit => face::apply(vertices),
        }
    }
}

fn global(vertices: &[DVec3], descriptor: &TextureDescriptor, use_y: bool) -> Vec<DVec2> {
    vertices
        .iter()
        .map(|v| {
            let t = if use_y { v.y } else { v.z };
            DVec2::new(v.x / descriptor.width, t / descriptor.height)
        })
        .collect()
}
