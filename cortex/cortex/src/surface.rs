//! Cortical surfaces loaded from disk.

use std::path::{Path, PathBuf};

use cortex_decode::{DecodedMesh, SurfaceFormat, Triangle, compute_normals, decode_surface};
use glam::Vec3;

use crate::curvature::read_curvature;
use crate::error::{Error, Result};
use crate::types::{Curvature, Hemisphere, surface_kind};

/// A triangulated cortical surface with per-vertex normals.
///
/// The default value is the empty, cleared surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    /// The file the surface was read from.
    pub path: Option<PathBuf>,
    /// The format the file was stored in.
    pub format: Option<SurfaceFormat>,
    /// Hemisphere, taken from the file name.
    pub hemisphere: Hemisphere,
    /// Last four characters of the file name (e.g. `hite` for `lh.white`).
    pub surface_kind: String,
    /// Vertex positions in meters.
    pub vertices: Vec<Vec3>,
    /// Triangle vertex indices.
    pub triangles: Vec<Triangle>,
    /// Unit normal per vertex (zero for unreferenced vertices).
    pub normals: Vec<Vec3>,
    /// Companion curvature map, if one was loaded.
    pub curvature: Option<Curvature>,
}

impl Surface {
    /// Read a surface file and compute its normals.
    ///
    /// Fails if the file cannot be read or decoded, or if its path names
    /// no hemisphere. No partial surface is returned on failure.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading surface");

        let data = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_bytes(&data, path)
    }

    /// Decode a surface from file contents already in memory.
    ///
    /// `path` is only used to derive the hemisphere and surface kind.
    pub fn from_bytes(data: &[u8], path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = decode_surface(data).map_err(|source| Error::Decode {
            path: path.to_owned(),
            source,
        })?;

        if let Some(comment) = &decoded.comment {
            tracing::debug!(path = %path.display(), "{comment}");
        }
        tracing::info!(
            path = %path.display(),
            format = %decoded.format,
            vertices = decoded.vertices.len(),
            triangles = decoded.triangles.len(),
            "decoded surface"
        );

        let hemisphere = Hemisphere::from_path(path);
        if hemisphere == Hemisphere::Unknown {
            return Err(Error::HemisphereUnresolved {
                path: path.to_owned(),
            });
        }

        let mut surface = Self::from_decoded(decoded);
        surface.hemisphere = hemisphere;
        surface.surface_kind = surface_kind(path);
        surface.path = Some(path.to_owned());
        Ok(surface)
    }

    /// Build a surface from decoded geometry, computing normals.
    ///
    /// The hemisphere is left as [`Hemisphere::Unknown`].
    #[must_use]
    pub fn from_decoded(decoded: DecodedMesh) -> Self {
        tracing::debug!(triangles = decoded.triangles.len(), "computing normals");
        let normals = compute_normals(&decoded.vertices, &decoded.triangles);
        Self {
            format: Some(decoded.format),
            vertices: decoded.vertices,
            triangles: decoded.triangles,
            normals,
            ..Self::default()
        }
    }

    /// Clear this surface and read a new one into it.
    ///
    /// On failure the surface is left cleared.
    pub fn read_into(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.clear();
        *self = Self::read(path)?;
        Ok(())
    }

    /// Read a surface together with its companion `<hemi>.curv` file.
    ///
    /// The curvature file is looked up next to the surface, so
    /// `surf/lh.white` pairs with `surf/lh.curv`.
    pub fn read_with_curvature(path: impl AsRef<Path>) -> Result<Self> {
        let mut surface = Self::read(path)?;
        if let Some(curv_path) = surface.curvature_path() {
            surface.attach_curvature(read_curvature(&curv_path)?);
        }
        Ok(surface)
    }

    /// Path of the companion curvature file for this surface.
    #[must_use]
    pub fn curvature_path(&self) -> Option<PathBuf> {
        let prefix = self.hemisphere.prefix()?;
        let dir = self.path.as_deref()?.parent()?;
        Some(dir.join(format!("{prefix}.curv")))
    }

    /// Attach a curvature map to this surface.
    ///
    /// A length mismatch is logged but not rejected.
    pub fn attach_curvature(&mut self, curvature: Curvature) {
        if curvature.len() != self.vertex_count() {
            tracing::warn!(
                vertices = self.vertex_count(),
                values = curvature.len(),
                "curvature length does not match vertex count"
            );
        }
        self.curvature = Some(curvature);
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty surface.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_decode::DecodeError;
    use tempfile::tempdir;

    use crate::test_util::{legacy_curvature_file, triangle_file, write};

    const EPSILON: f32 = 1e-6;

    fn square() -> Vec<u8> {
        triangle_file(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            &[[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn test_read_planar_square() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "lh.white", &square());

        let surface = Surface::read(&path).unwrap();
        assert_eq!(surface.hemisphere, Hemisphere::Left);
        assert_eq!(surface.surface_kind, "hite");
        assert_eq!(surface.format, Some(SurfaceFormat::Triangle));
        assert_eq!(surface.vertex_count(), 4);
        assert_eq!(surface.triangle_count(), 2);
        assert!((surface.vertices[2] - Vec3::new(0.001, 0.001, 0.0)).length() < EPSILON);
        for n in &surface.normals {
            assert!((n.z.abs() - 1.0).abs() < EPSILON, "{n:?}");
            assert!(n.x.abs() < EPSILON && n.y.abs() < EPSILON);
        }
    }

    #[test]
    fn test_read_right_hemisphere() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "rh.pial", &square());
        let surface = Surface::read(&path).unwrap();
        assert_eq!(surface.hemisphere, Hemisphere::Right);
        assert_eq!(surface.surface_kind, "pial");
    }

    #[test]
    fn test_unresolved_hemisphere() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "white", &square());
        assert!(matches!(
            Surface::read(&path),
            Err(Error::HemisphereUnresolved { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            Surface::read(dir.path().join("lh.white")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_bad_magic() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "lh.white", &[0x00, 0x00, 0x07, 0x00]);
        assert!(matches!(
            Surface::read(&path),
            Err(Error::Decode {
                source: DecodeError::BadMagicNumber(7),
                ..
            })
        ));
    }

    #[test]
    fn test_read_into_clears_on_failure() {
        let dir = tempdir().unwrap();
        let good = write(&dir, "lh.white", &square());
        let bad = write(&dir, "rh.white", &[0xAB, 0xCD, 0xEF]);

        let mut surface = Surface::default();
        surface.read_into(&good).unwrap();
        assert_eq!(surface.vertex_count(), 4);

        assert!(surface.read_into(&bad).is_err());
        assert!(surface.is_empty());
        assert_eq!(surface, Surface::default());
    }

    #[test]
    fn test_read_with_curvature() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "lh.white", &square());
        write(&dir, "lh.curv", &legacy_curvature_file(&[100, 200, -50, 0]));

        let surface = Surface::read_with_curvature(&path).unwrap();
        let curv = surface.curvature.as_ref().unwrap();
        assert_eq!(curv.values, vec![1.0, 2.0, -0.5, 0.0]);
        assert_eq!(surface.curvature_path(), Some(dir.path().join("lh.curv")));
    }

    #[test]
    fn test_read_with_missing_curvature() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "rh.white", &square());
        assert!(matches!(
            Surface::read_with_curvature(&path),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_bounding_box() {
        let surface = Surface::from_bytes(&square(), "lh.white").unwrap();
        let (lo, hi) = surface.bounding_box().unwrap();
        assert_eq!(lo, Vec3::ZERO);
        assert!((hi - Vec3::new(0.001, 0.001, 0.0)).length() < EPSILON);
        assert_eq!(Surface::default().bounding_box(), None);
    }
}
