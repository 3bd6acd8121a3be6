//! Bounding-box fit onto a flat polygon face.

use glam::{DVec2, DVec3};

use crate::error::{Result, TexturingError};

const MIN_EXTENT: f64 = 1e-9;

pub fn apply(vertices: &[DVec3]) -> Result<Vec<DVec2>> {
    if vertices.len() < 3 {
        return Err(TexturingError::InvalidVertexCount(format!(
            "face loop needs at least 3 vertices, got {}",
            vertices.len()
        )));
    }

    let normal = newell_normal(vertices);
    if normal == DVec3::ZERO {
        return Err(TexturingError::InvalidGeometry(
            "face loop has no area".to_string(),
        ));
    }

    // Orthonormal basis in the face plane. Any basis works because the
    // result is normalized to the bounding box afterwards.
    let reference = if normal.y.abs() < 0.99 {
        DVec3::Y
    } else {
        DVec3::X
    };
    let u_axis = reference.cross(normal).normalize();
    let v_axis = normal.cross(u_axis);

    let projected: Vec<DVec2> = vertices
        .iter()
        .map(|v| DVec2::new(v.dot(u_axis), v.dot(v_axis)))
        .collect();

    let mut min = projected[0];
    let mut max = projected[0];
    for p in &projected[1..] {
        min = min.min(*p);
        max = max.max(*p);
    }

    let size = max - min;
    if size.x < MIN_EXTENT || size.y < MIN_EXTENT {
        return Err(TexturingError::InvalidGeometry(
            "face bounding box has zero extent".to_string(),
        ));
    }

    Ok(projected
        .iter()
        .map(|p| DVec2::new((p.x - min.x) / size.x, (p.y - min.y) / size.y))
        .collect())
}

/// Polygon normal by Newell's method; zero for degenerate loops.
fn newell_normal(vertices: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for (i, current) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal.normalize_or_zero()
}
