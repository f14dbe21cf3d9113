//! Curvature maps loaded from disk.

use std::path::Path;

use cortex_decode::decode_curvature;

use crate::error::{Error, Result};
use crate::types::Curvature;

/// Read a curvature file.
///
/// The file name is not inspected; pairing the values with a surface of the
/// same vertex count is up to the caller.
pub fn read_curvature(path: impl AsRef<Path>) -> Result<Curvature> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading curvature");

    let data = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    let decoded = decode_curvature(&data).map_err(|source| Error::Decode {
        path: path.to_owned(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        format = ?decoded.format,
        values = decoded.values.len(),
        "decoded curvature"
    );

    Ok(Curvature {
        format: decoded.format,
        values: decoded.values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::test_util::{legacy_curvature_file, new_curvature_file, write};
    use cortex_decode::CurvatureFormat;

    #[test]
    fn test_read_legacy() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "anything", &legacy_curvature_file(&[100, 200, -50]));

        let curv = read_curvature(&path).unwrap();
        assert_eq!(curv.format, CurvatureFormat::Legacy);
        assert_eq!(curv.values, vec![1.0, 2.0, -0.5]);
    }

    #[test]
    fn test_read_new() {
        let dir = tempdir().unwrap();
        let path = write(&dir, "lh.curv", &new_curvature_file(&[0.125, -3.5]));

        let curv = read_curvature(&path).unwrap();
        assert_eq!(curv.format, CurvatureFormat::New);
        assert_eq!(curv.values, vec![0.125, -3.5]);
    }

    #[test]
    fn test_read_missing() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            read_curvature(dir.path().join("lh.curv")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_read_truncated() {
        let dir = tempdir().unwrap();
        let mut data = new_curvature_file(&[1.0, 2.0]);
        data.pop();
        let path = write(&dir, "lh.curv", &data);
        assert!(matches!(read_curvature(&path), Err(Error::Decode { .. })));
    }
}
