//! Surface geometry decoding.
//!
//! Three legacy tessellation encodings share one header layout: a 3-byte
//! magic number followed by a format-specific body.
//!
//! | Format | Magic | Counts | Vertices | Faces |
//! |---|---|---|---|---|
//! | [`SurfaceFormat::Quad`] | `16777215` | 2 × u24 | i16 / 100 | 4 × u24 per quad |
//! | [`SurfaceFormat::NewQuad`] | `16777213` | 2 × u24 | f32 block | 4 × u24 per quad |
//! | [`SurfaceFormat::Triangle`] | `16777214` | 2 × i32 | f32 block | 3 × i32 per triangle |
//!
//! The triangle format additionally carries two text lines between the magic
//! number and the counts. All vertex coordinates are stored in millimeters
//! and are scaled to meters on decode.

use std::fmt;

use glam::Vec3;

use crate::error::{DecodeError, DecodeResult};
use crate::normals::validate_triangles;
use crate::quads::split_quads;
use crate::reader::ByteReader;
use crate::{MILLIMETERS_TO_METERS, Triangle};

/// The sub-format of a surface file, keyed by its magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceFormat {
    /// Quad mesh with 16-bit fixed-point coordinates.
    Quad,
    /// Quad mesh with 32-bit float coordinates.
    NewQuad,
    /// Triangle mesh with 32-bit float coordinates.
    Triangle,
}

impl SurfaceFormat {
    pub const QUAD_MAGIC: u32 = 16_777_215;
    pub const NEW_QUAD_MAGIC: u32 = 16_777_213;
    pub const TRIANGLE_MAGIC: u32 = 16_777_214;

    /// Identify a format from its magic number.
    pub fn from_magic(magic: u32) -> DecodeResult<Self> {
        match magic {
            Self::QUAD_MAGIC => Ok(Self::Quad),
            Self::NEW_QUAD_MAGIC => Ok(Self::NewQuad),
            Self::TRIANGLE_MAGIC => Ok(Self::Triangle),
            other => Err(DecodeError::BadMagicNumber(other)),
        }
    }

    /// The magic number that identifies this format.
    #[must_use]
    pub fn magic(self) -> u32 {
        match self {
            Self::Quad => Self::QUAD_MAGIC,
            Self::NewQuad => Self::NEW_QUAD_MAGIC,
            Self::Triangle => Self::TRIANGLE_MAGIC,
        }
    }

    /// Whether faces are stored as quads that need splitting.
    #[must_use]
    pub fn is_quad(self) -> bool {
        matches!(self, Self::Quad | Self::NewQuad)
    }
}

impl fmt::Display for SurfaceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quad => "quad",
            Self::NewQuad => "new quad",
            Self::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// Geometry decoded from a surface file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMesh {
    /// The sub-format the data was stored in.
    pub format: SurfaceFormat,
    /// Vertex positions in meters.
    pub vertices: Vec<Vec3>,
    /// Triangle vertex indices, all below `vertices.len()`.
    pub triangles: Vec<Triangle>,
    /// Creator line of a triangle file, if present.
    pub comment: Option<String>,
}

/// Decode a complete surface file held in memory.
///
/// # Errors
///
/// Returns [`DecodeError::BadMagicNumber`] for an unknown format,
/// [`DecodeError::UnexpectedEof`] or [`DecodeError::BufferTooSmall`] for
/// truncated data, and [`DecodeError::IndexOutOfBounds`] if a face names a
/// vertex that does not exist.
pub fn decode_surface(data: &[u8]) -> DecodeResult<DecodedMesh> {
    let mut reader = ByteReader::new(data);
    let format = SurfaceFormat::from_magic(reader.read_u24("magic")?)?;

    let (raw_vertices, triangles, comment) = match format {
        SurfaceFormat::Quad | SurfaceFormat::NewQuad => {
            let (vertices, triangles) = read_quad_body(&mut reader, format)?;
            (vertices, triangles, None)
        }
        SurfaceFormat::Triangle => read_triangle_body(&mut reader)?,
    };

    let vertices: Vec<Vec3> = raw_vertices
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]) * MILLIMETERS_TO_METERS)
        .collect();

    validate_triangles(&triangles, vertices.len())?;

    Ok(DecodedMesh {
        format,
        vertices,
        triangles,
        comment,
    })
}

/// Read the body shared by both quad formats.
///
/// Returns flat `x, y, z` coordinates in file units and the split triangles.
fn read_quad_body(
    reader: &mut ByteReader<'_>,
    format: SurfaceFormat,
) -> DecodeResult<(Vec<f32>, Vec<Triangle>)> {
    let nvert = reader.read_u24("vertex count")? as usize;
    let nquad = reader.read_u24("quad count")? as usize;

    let coords = nvert * 3;
    let vertices = if format == SurfaceFormat::Quad {
        reader.ensure(coords * 2)?;
        let mut vertices = Vec::with_capacity(coords);
        for _ in 0..coords {
            vertices.push(f32::from(reader.read_i16("quad vertices")?) / 100.0);
        }
        vertices
    } else {
        reader.read_f32_block(coords, "new quad vertices")?
    };

    reader.ensure(nquad * 4 * 3)?;
    let mut quads = Vec::with_capacity(nquad);
    for _ in 0..nquad {
        quads.push([
            reader.read_u24("quads")?,
            reader.read_u24("quads")?,
            reader.read_u24("quads")?,
            reader.read_u24("quads")?,
        ]);
    }

    Ok((vertices, split_quads(&quads)))
}

/// Read a triangle file body: two text lines, counts, vertices and faces.
fn read_triangle_body(
    reader: &mut ByteReader<'_>,
) -> DecodeResult<(Vec<f32>, Vec<Triangle>, Option<String>)> {
    let comment = String::from_utf8_lossy(reader.read_line())
        .trim_end()
        .to_owned();
    reader.read_line();

    let nvert = read_count(reader, "vertex count")?;
    let nface = read_count(reader, "face count")?;

    let vertices = reader.read_f32_block(nvert * 3, "triangle vertices")?;

    reader.ensure(nface * 3 * 4)?;
    let mut triangles = Vec::with_capacity(nface);
    for _ in 0..nface {
        triangles.push([
            read_index(reader)?,
            read_index(reader)?,
            read_index(reader)?,
        ]);
    }

    let comment = (!comment.is_empty()).then_some(comment);
    Ok((vertices, triangles, comment))
}

fn read_count(reader: &mut ByteReader<'_>, context: &'static str) -> DecodeResult<usize> {
    let value = reader.read_i32(context)?;
    usize::try_from(value).map_err(|_| DecodeError::InvalidFormat {
        context,
        detail: format!("negative count {value}"),
    })
}

fn read_index(reader: &mut ByteReader<'_>) -> DecodeResult<u32> {
    let value = reader.read_i32("triangles")?;
    u32::try_from(value).map_err(|_| DecodeError::InvalidFormat {
        context: "triangles",
        detail: format!("negative vertex index {value}"),
    })
}
