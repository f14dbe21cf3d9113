//! Helpers for writing synthetic files in tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `data` to `name` inside `dir`, returning the full path.
pub fn write(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

// Duplicates the builder in `cortex_decode::surface::tests`, which is private
// to that crate's test build and not reachable from here.
fn push_u24(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes()[1..]);
}

/// A triangle-format surface file, coordinates in millimeters.
pub fn triangle_file(vertices: &[[f32; 3]], faces: &[[i32; 3]]) -> Vec<u8> {
    let mut buf = Vec::new();
    push_u24(&mut buf, cortex_decode::SurfaceFormat::TRIANGLE_MAGIC);
    buf.extend_from_slice(b"created by cortex tests\n\n");
    buf.extend_from_slice(&i32::try_from(vertices.len()).unwrap().to_be_bytes());
    buf.extend_from_slice(&i32::try_from(faces.len()).unwrap().to_be_bytes());
    for v in vertices.iter().flatten() {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    for i in faces.iter().flatten() {
        buf.extend_from_slice(&i.to_be_bytes());
    }
    buf
}

/// A legacy curvature file holding `raw / 100` per vertex.
pub fn legacy_curvature_file(raw: &[i16]) -> Vec<u8> {
    let mut buf = Vec::new();
    push_u24(&mut buf, u32::try_from(raw.len()).unwrap());
    push_u24(&mut buf, 0);
    for v in raw {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    buf
}

/// A new-format curvature file.
pub fn new_curvature_file(values: &[f32]) -> Vec<u8> {
    let mut buf = Vec::new();
    push_u24(&mut buf, cortex_decode::CurvatureFormat::NEW_VERSION_MAGIC);
    push_u24(&mut buf, u32::try_from(values.len()).unwrap());
    push_u24(&mut buf, 0);
    push_u24(&mut buf, 1);
    for v in values {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    buf
}
