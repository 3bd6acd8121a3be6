//! Slope-oriented per-triangle projection.

use glam::{DVec2, DVec3};

use crate::error::{Result, TexturingError};
use crate::texture::TextureDescriptor;

/// Azimuths closer than this (in radians) are treated as the same face
/// orientation and snapped together, so triangles of one face share a
/// rotation and texture seams between them disappear.
const ANGLE_MERGE_THRESHOLD: f64 = 0.02;

pub fn apply(vertices: &[DVec3], descriptor: &TextureDescriptor) -> Result<Vec<DVec2>> {
    if vertices.len() % 3 != 0 {
        return Err(TexturingError::InvalidVertexCount(format!(
            "not a set of triangles: {} vertices",
            vertices.len()
        )));
    }

    let mut result = Vec::with_capacity(vertices.len());
    let mut known_angles: Vec<f64> = Vec::new();

    for triangle in vertices.chunks_exact(3) {
        let normal = face_normal(triangle[0], triangle[1], triangle[2]);

        // The azimuth of the normal's horizontal projection is the triangle's
        // down-slope direction. Near-vertical normals have no horizontal
        // component and default to 0.
        let mut down_angle = 0.0;

        if normal.x != 0.0 || normal.z != 0.0 {
            down_angle = azimuth(normal.x, normal.z);

            // Snap to the first previously seen azimuth within the merge
            // threshold. First match wins; the scan is intentionally greedy
            // and order-dependent.
            let similar = known_angles
                .iter()
                .copied()
                .find(|known| (down_angle - known).abs() < ANGLE_MERGE_THRESHOLD);

            match similar {
                Some(known) => down_angle = known,
                None => known_angles.push(down_angle),
            }
        }

        for v in triangle {
            let rotated = rotate_y(*v, -down_angle);
            result.push(DVec2::new(
                -rotated.x / descriptor.width,
                -rotated.z / descriptor.height,
            ));
        }
    }

    Ok(result)
}

/// Normal of the triangle (a, b, c), zero for degenerate triangles.
fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Angle of the horizontal vector (x, z) measured clockwise from the
/// positive z axis, in [0, 2*pi).
fn azimuth(x: f64, z: f64) -> f64 {
    let angle = x.atan2(z);
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// Rotate `v` about the vertical axis by `angle` radians.
fn rotate_y(v: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(cos * v.x + sin * v.z, v.y, -sin * v.x + cos * v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::TexCoordFunction;
    use crate::texture::Wrap;

    use std::f64::consts::FRAC_PI_4;

    const EPSILON: f64 = 1e-9;

    fn descriptor() -> TextureDescriptor {
        TextureDescriptor::new(1.0, 1.0, Wrap::Repeat, TexCoordFunction::SlopedTriangles)
    }

    /// A triangle whose normal is (1, 1, 1), i.e. azimuth pi/4.
    fn sloped_triangle() -> [DVec3; 3] {
        [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.0, 1.0, -1.0),
        ]
    }

    #[test]
    fn test_rejects_non_triangle_input() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let result = apply(&vertices, &descriptor());
        assert!(matches!(
            result,
            Err(TexturingError::InvalidVertexCount(_))
        ));
    }

    #[test]
    fn test_horizontal_triangle_uses_zero_angle() {
        // Flat triangle in the XZ plane: the normal is vertical, so no
        // rotation is applied and coordinates are just negated x/z.
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 0.0),
        ];

        let coords = apply(&vertices, &descriptor()).unwrap();

        assert!((coords[0] - DVec2::new(0.0, 0.0)).length() < EPSILON);
        assert!((coords[1] - DVec2::new(0.0, -1.0)).length() < EPSILON);
        assert!((coords[2] - DVec2::new(-1.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_similar_azimuths_snap_to_first() {
        let first = sloped_triangle();
        // Same geometry rotated slightly about the vertical axis: its own
        // azimuth is pi/4 + 0.01, within the merge threshold.
        let second: Vec<DVec3> = first.iter().map(|v| rotate_y(*v, 0.01)).collect();

        let mut vertices = first.to_vec();
        vertices.extend(&second);

        let coords = apply(&vertices, &descriptor()).unwrap();

        // Both triangles must have been rotated by the first azimuth.
        for (i, v) in second.iter().enumerate() {
            let rotated = rotate_y(*v, -FRAC_PI_4);
            let expected = DVec2::new(-rotated.x, -rotated.z);
            assert!((coords[3 + i] - expected).length() < EPSILON);
        }
    }

    #[test]
    fn test_distant_azimuths_keep_their_own_angle() {
        let first = sloped_triangle();
        let second: Vec<DVec3> = first.iter().map(|v| rotate_y(*v, 0.05)).collect();

        let mut vertices = first.to_vec();
        vertices.extend(&second);

        let coords = apply(&vertices, &descriptor()).unwrap();

        // 0.05 rad exceeds the threshold: the second triangle rotates by its
        // own azimuth, which maps it back onto the first triangle's coords.
        for (i, v) in first.iter().enumerate() {
            let rotated = rotate_y(*v, -FRAC_PI_4);
            let expected = DVec2::new(-rotated.x, -rotated.z);
            assert!((coords[3 + i] - expected).length() < EPSILON);
        }
        assert_eq!(coords.len(), 6);
    }

    #[test]
    fn test_output_aligned_with_input() {
        let vertices: Vec<DVec3> = (0..9)
            .map(|i| DVec3::new(i as f64, (i % 3) as f64, -(i as f64)))
            .collect();
        let coords = apply(&vertices, &descriptor()).unwrap();
        assert_eq!(coords.len(), 9);
    }
}
