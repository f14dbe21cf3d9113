//! Error types for the cortex crate.

use std::{fmt, io, path::PathBuf};

use crate::types::Hemisphere;

/// Result type for cortex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading surfaces and curvature maps.
#[derive(Debug)]
pub enum Error {
    /// The file could not be opened or read.
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file contents could not be decoded.
    Decode {
        /// The file that failed.
        path: PathBuf,
        /// The underlying decode error.
        source: cortex_decode::DecodeError,
    },
    /// The file name contains neither `lh.` nor `rh.`.
    HemisphereUnresolved {
        /// The file whose hemisphere is unknown.
        path: PathBuf,
    },
    /// A surface set already holds a surface for this hemisphere.
    DuplicateHemisphere {
        /// The hemisphere that was already present.
        hemisphere: Hemisphere,
        /// The surface that was rejected.
        path: PathBuf,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "couldn't read {}: {source}", path.display())
            }
            Error::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
            Error::HemisphereUnresolved { path } => {
                write!(
                    f,
                    "can't tell hemisphere of {} (expected `lh.` or `rh.` in the name)",
                    path.display()
                )
            }
            Error::DuplicateHemisphere { hemisphere, path } => {
                write!(
                    f,
                    "{hemisphere} hemisphere already loaded, rejecting {}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
