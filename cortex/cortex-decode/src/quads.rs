//! Quad face splitting.

use crate::Triangle;

/// Split quads into triangles.
///
/// The legacy quad format alternates the split diagonal with the parity of
/// the first vertex index:
///
/// - `v0` even: `(v0, v1, v3)` and `(v2, v3, v1)`
/// - `v0` odd: `(v0, v1, v2)` and `(v0, v2, v3)`
///
/// Exactly two triangles are produced per quad, in quad order.
#[must_use]
pub fn split_quads(quads: &[[u32; 4]]) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(quads.len() * 2);

    for &[v0, v1, v2, v3] in quads {
        if v0 % 2 == 0 {
            triangles.push([v0, v1, v3]);
            triangles.push([v2, v3, v1]);
        } else {
            triangles.push([v0, v1, v2]);
            triangles.push([v0, v2, v3]);
        }
    }

    triangles
}
