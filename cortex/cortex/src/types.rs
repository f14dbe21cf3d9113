//! Value types shared by surfaces and curvature maps.

use std::{fmt, path::Path};

use cortex_decode::CurvatureFormat;

/// Which cerebral hemisphere a surface belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    Left,
    Right,
    /// Not yet determined, or a cleared surface.
    #[default]
    Unknown,
}

impl Hemisphere {
    /// Detect the hemisphere from a file path.
    ///
    /// The whole path is searched, so a directory named `lh.something` also
    /// counts. `lh.` is checked before `rh.`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy();
        if name.contains("lh.") {
            Self::Left
        } else if name.contains("rh.") {
            Self::Right
        } else {
            Self::Unknown
        }
    }

    /// File name prefix used for this hemisphere (`lh` or `rh`).
    #[must_use]
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("lh"),
            Self::Right => Some("rh"),
            Self::Unknown => None,
        }
    }

    /// Numeric hemisphere id: 0 for left, 1 for right.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Left => Some(0),
            Self::Right => Some(1),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A scalar curvature value per surface vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Curvature {
    /// The sub-format the values were read from.
    pub format: CurvatureFormat,
    /// One value per vertex of the matching surface.
    pub values: Vec<f32>,
}

impl Curvature {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest value, or `None` if there are no values.
    #[must_use]
    pub fn range(&self) -> Option<(f32, f32)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

/// Last four characters of a path, used as the surface kind label.
pub(crate) fn surface_kind(path: &Path) -> String {
    let name = path.to_string_lossy();
    let count = name.chars().count();
    name.chars().skip(count.saturating_sub(4)).collect()
}
