//! Error types for decoding operations.

use std::fmt;

/// Errors that can occur while decoding surface or curvature data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The leading 3-byte magic number does not name a known surface format.
    BadMagicNumber(u32),
    /// Input buffer is too small for the data its header declares.
    BufferTooSmall { expected: usize, actual: usize },
    /// Invalid data format or structure.
    InvalidFormat {
        context: &'static str,
        detail: String,
    },
    /// Input ended in the middle of a field.
    UnexpectedEof { context: &'static str },
    /// A triangle references a vertex that does not exist.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagicNumber(magic) => write!(f, "bad magic number {magic}"),
            Self::BufferTooSmall { expected, actual } => {
                write!(
                    f,
                    "buffer too small: expected {expected} bytes, got {actual}"
                )
            }
            Self::InvalidFormat { context, detail } => {
                write!(f, "invalid format in {context}: {detail}")
            }
            Self::UnexpectedEof { context } => {
                write!(f, "unexpected end of buffer in {context}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
