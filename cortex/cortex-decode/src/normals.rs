//! Vertex normal computation.

use glam::Vec3;

use crate::Triangle;
use crate::error::{DecodeError, DecodeResult};

/// Compute one unit normal per triangle.
///
/// The normal is the cross product of the edges `b - a` and `c - a`. A
/// degenerate triangle whose cross product has zero length is returned as the
/// zero vector.
///
/// # Panics
///
/// Panics if a triangle references a vertex outside `vertices`. Use
/// [`compute_normals_checked`] for untrusted input.
#[must_use]
pub fn triangle_normals(vertices: &[Vec3], triangles: &[Triangle]) -> Vec<Vec3> {
    triangles
        .iter()
        .map(|&[a, b, c]| {
            let r1 = vertices[a as usize];
            let x = vertices[b as usize] - r1;
            let y = vertices[c as usize] - r1;
            normalize_or_keep(x.cross(y))
        })
        .collect()
}

/// Compute per-vertex normals.
///
/// Each triangle's unit normal is written to all three of its vertices,
/// iterating triangles in order, so a vertex shared by several triangles
/// ends up with the normal of the last one. There is no area or angle
/// weighting. Vertices not referenced by any triangle keep the zero vector.
///
/// # Panics
///
/// Panics if a triangle references a vertex outside `vertices`.
#[must_use]
pub fn compute_normals(vertices: &[Vec3], triangles: &[Triangle]) -> Vec<Vec3> {
    let tri_normals = triangle_normals(vertices, triangles);

    let mut normals = vec![Vec3::ZERO; vertices.len()];
    for (triangle, normal) in triangles.iter().zip(tri_normals) {
        for &v in triangle {
            normals[v as usize] = normal;
        }
    }

    for normal in &mut normals {
        *normal = normalize_or_keep(*normal);
    }

    normals
}

/// Compute per-vertex normals after validating every triangle index.
///
/// # Errors
///
/// Returns [`DecodeError::IndexOutOfBounds`] for the first index that does
/// not name a vertex.
pub fn compute_normals_checked(
    vertices: &[Vec3],
    triangles: &[Triangle],
) -> DecodeResult<Vec<Vec3>> {
    validate_triangles(triangles, vertices.len())?;
    Ok(compute_normals(vertices, triangles))
}

/// Check that every triangle index is below `vertex_count`.
pub fn validate_triangles(triangles: &[Triangle], vertex_count: usize) -> DecodeResult<()> {
    for &index in triangles.iter().flatten() {
        if index as usize >= vertex_count {
            return Err(DecodeError::IndexOutOfBounds {
                index: index as usize,
                len: vertex_count,
            });
        }
    }
    Ok(())
}

/// Divide by the Euclidean length unless that length is exactly zero.
fn normalize_or_keep(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 { v } else { v / len }
}
