//! Curvature map decoding.
//!
//! A curvature file stores one scalar per surface vertex. The legacy layout
//! has no magic number: the first 3-byte field is already the vertex count.
//! The newer layout starts with the `16777215` marker followed by three
//! counts and a big-endian float block.

use crate::error::DecodeResult;
use crate::reader::ByteReader;

/// The sub-format of a curvature file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurvatureFormat {
    /// Counts followed by 16-bit fixed-point values.
    Legacy,
    /// Marker, three counts and 32-bit float values.
    New,
}

impl CurvatureFormat {
    pub const NEW_VERSION_MAGIC: u32 = 16_777_215;
}

/// Values decoded from a curvature file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCurvature {
    /// The sub-format the data was stored in.
    pub format: CurvatureFormat,
    /// One value per vertex.
    pub values: Vec<f32>,
    /// Face count recorded in the header. Informational only.
    pub face_count: u32,
    /// Values per vertex recorded in the header (new format only).
    pub values_per_vertex: Option<u32>,
}

/// Decode a complete curvature file held in memory.
///
/// Values are returned as stored; unlike surface coordinates they are not
/// rescaled. The caller is responsible for matching the value count against
/// the vertex count of the corresponding surface.
///
/// # Errors
///
/// Returns [`DecodeError::UnexpectedEof`](crate::DecodeError::UnexpectedEof)
/// or [`DecodeError::BufferTooSmall`](crate::DecodeError::BufferTooSmall) if
/// the data ends before the declared number of values.
pub fn decode_curvature(data: &[u8]) -> DecodeResult<DecodedCurvature> {
    let mut reader = ByteReader::new(data);
    let vnum = reader.read_u24("vertex count")?;

    if vnum == CurvatureFormat::NEW_VERSION_MAGIC {
        let vnum = reader.read_u24("vertex count")? as usize;
        let face_count = reader.read_u24("face count")?;
        let values_per_vertex = reader.read_u24("values per vertex")?;
        let values = reader.read_f32_block(vnum, "curvature values")?;

        return Ok(DecodedCurvature {
            format: CurvatureFormat::New,
            values,
            face_count,
            values_per_vertex: Some(values_per_vertex),
        });
    }

    let vnum = vnum as usize;
    let face_count = reader.read_u24("face count")?;
    reader.ensure(vnum * 2)?;
    let mut values = Vec::with_capacity(vnum);
    for _ in 0..vnum {
        values.push(f32::from(reader.read_i16("curvature values")?) / 100.0);
    }

    Ok(DecodedCurvature {
        format: CurvatureFormat::Legacy,
        values,
        face_count,
        values_per_vertex: None,
    })
}
