//! Left/right surface pairs.

use std::path::Path;

use crate::error::{Error, Result};
use crate::surface::Surface;
use crate::types::Hemisphere;

/// Up to one surface per hemisphere, slotted by [`Hemisphere::index`].
#[derive(Debug, Clone, Default)]
pub struct SurfaceSet {
    slots: [Option<Surface>; 2],
}

impl SurfaceSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read each path and place it by its hemisphere.
    pub fn read<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut set = Self::new();
        for path in paths {
            set.insert(Surface::read(path)?)?;
        }
        Ok(set)
    }

    /// Read `lh.<kind>` and `rh.<kind>` from a subject's surface directory.
    pub fn read_subject(dir: impl AsRef<Path>, kind: &str) -> Result<Self> {
        let dir = dir.as_ref();
        Self::read(&[dir.join(format!("lh.{kind}")), dir.join(format!("rh.{kind}"))])
    }

    /// Add a surface in the slot for its hemisphere.
    ///
    /// Fails if the slot is taken or the hemisphere is unknown.
    pub fn insert(&mut self, surface: Surface) -> Result<()> {
        let path = || surface.path.clone().unwrap_or_default();
        let Some(index) = surface.hemisphere.index() else {
            return Err(Error::HemisphereUnresolved { path: path() });
        };
        let slot = &mut self.slots[index];
        if slot.is_some() {
            return Err(Error::DuplicateHemisphere {
                hemisphere: surface.hemisphere,
                path: path(),
            });
        }
        *slot = Some(surface);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, hemisphere: Hemisphere) -> Option<&Surface> {
        self.slots[hemisphere.index()?].as_ref()
    }

    #[must_use]
    pub fn left(&self) -> Option<&Surface> {
        self.get(Hemisphere::Left)
    }

    #[must_use]
    pub fn right(&self) -> Option<&Surface> {
        self.get(Hemisphere::Right)
    }

    /// Surfaces in left, right order.
    pub fn iter(&self) -> impl Iterator<Item = &Surface> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
