//! Arc-length based unwrapping of triangle strips.

use glam::{DVec2, DVec3};

use crate::error::{Result, TexturingError};
use crate::texture::{entity_fit, TextureDescriptor};

/// How the t coordinate and the effective tile width are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// t follows the height of each rail pair.
    Wall,
    /// t alternates between 1 and 0; the texture spans the height once.
    FitHeight,
    /// The texture is additionally stretched exactly once along the strip.
    Fit,
}

pub fn apply(
    vertices: &[DVec3],
    descriptor: &TextureDescriptor,
    mode: StripMode,
) -> Result<Vec<DVec2>> {
    if vertices.len() % 2 == 1 {
        return Err(TexturingError::InvalidVertexCount(format!(
            "not a triangle strip wall: {} vertices",
            vertices.len()
        )));
    }

    // Length of the wall, only needed when the texture is fitted or sized by
    // discrete entities. Summed over all consecutive pairs; the rungs of an
    // upright wall contribute nothing since y is ignored.
    let mut total_length = 0.0;

    if mode == StripMode::Fit || descriptor.width_per_entity.is_some() {
        for pair in vertices.windows(2) {
            total_length += xz(pair[0]).distance(xz(pair[1]));
        }
    }

    // Number of texture repetitions in each dimension.
    let width = if mode == StripMode::Fit {
        total_length
    } else if let Some(per_entity) = descriptor.width_per_entity {
        entity_fit(total_length, descriptor.width, per_entity)
    } else {
        descriptor.width
    };

    let height = if let Some(per_entity) = descriptor.height_per_entity {
        let min_y = vertices.iter().map(|v| v.y).fold(f64::INFINITY, f64::min);
        let max_y = vertices
            .iter()
            .map(|v| v.y)
            .fold(f64::NEG_INFINITY, f64::max);
        entity_fit(max_y - min_y, descriptor.height, per_entity)
    } else {
        descriptor.height
    };

    let mut result = Vec::with_capacity(vertices.len());
    let mut accumulated_length = 0.0;

    for (i, v) in vertices.iter().enumerate() {
        // Advance once per rail pair, by the distance to the previous vertex
        // on the same rail.
        if i > 0 && i % 2 == 0 {
            accumulated_length += xz(*v).distance(xz(vertices[i - 2]));
        }

        let s = accumulated_length / width;

        let t = match mode {
            StripMode::Wall => {
                if i % 2 == 0 {
                    v.distance(vertices[i + 1]) / height
                } else {
                    0.0
                }
            }
            StripMode::FitHeight | StripMode::Fit => {
                if i % 2 == 0 {
                    1.0
                } else {
                    0.0
                }
            }
        };

        result.push(DVec2::new(s, t));
    }

    Ok(result)
}

fn xz(v: DVec3) -> DVec2 {
    DVec2::new(v.x, v.z)
}
