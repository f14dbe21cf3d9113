//! Decode legacy binary cortical surface and curvature files.
//!
//! This crate provides pure synchronous decoding functions that operate on
//! in-memory byte buffers. Reading files, logging and deciding what to do
//! with a failed hemisphere is left to the caller.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **No I/O**: Callers hand over the file contents
//! - **Checked**: Every face index is validated before it reaches the caller

mod curvature;
mod error;
mod normals;
mod quads;
mod reader;
mod surface;

pub use curvature::{CurvatureFormat, DecodedCurvature, decode_curvature};
pub use error::{DecodeError, DecodeResult};
pub use normals::{compute_normals, compute_normals_checked, triangle_normals, validate_triangles};
pub use quads::split_quads;
pub use reader::{ByteReader, swap_f32_block};
pub use surface::{DecodedMesh, SurfaceFormat, decode_surface};

/// Three vertex indices forming one face.
pub type Triangle = [u32; 3];

/// Scale applied to every stored surface coordinate.
pub const MILLIMETERS_TO_METERS: f32 = 0.001;
