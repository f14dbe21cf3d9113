//! Load cortical surfaces, hemisphere pairs and curvature maps from disk.
//!
//! This crate wraps the pure decoders in `cortex-decode` with file access,
//! hemisphere detection and logging. Every call opens, reads and releases
//! its own file; nothing is shared between calls, so independent loads may
//! run on separate threads.
//!
//! # Example
//!
//! ```no_run
//! use cortex::{Hemisphere, Surface, SurfaceSet};
//!
//! let surface = Surface::read_with_curvature("subjects/bert/surf/lh.white")?;
//! assert_eq!(surface.hemisphere, Hemisphere::Left);
//!
//! let pair = SurfaceSet::read_subject("subjects/bert/surf", "inflated")?;
//! for surface in pair.iter() {
//!     println!("{}: {} vertices", surface.hemisphere, surface.vertex_count());
//! }
//! # Ok::<(), cortex::Error>(())
//! ```

mod curvature;
mod error;
mod set;
mod surface;
#[cfg(test)]
mod test_util;
pub mod types;

pub use curvature::read_curvature;
pub use error::{Error, Result};
pub use set::SurfaceSet;
pub use surface::Surface;
pub use types::{Curvature, Hemisphere};

// Re-export decode types for convenience.
pub use cortex_decode::{
    CurvatureFormat, DecodeError, DecodedMesh, SurfaceFormat, Triangle, compute_normals,
    decode_surface,
};
