//! Printable summaries of loaded data.

use std::fmt;
use std::path::Path;

use cortex::{Curvature, Surface};
use serde::Serialize;

/// Summary of a decoded surface.
#[derive(Debug, Serialize)]
pub struct SurfaceSummary {
    pub path: String,
    pub format: String,
    pub hemisphere: String,
    pub kind: String,
    pub vertices: usize,
    pub triangles: usize,
    /// Bounds in meters as `[min, max]`.
    pub bounds: Option<[[f32; 3]; 2]>,
    /// Vertices left with a zero normal.
    pub zero_normals: usize,
    pub curvature: Option<CurvatureSummary>,
}

impl SurfaceSummary {
    pub fn new(surface: &Surface) -> Self {
        Self {
            path: surface
                .path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            format: surface
                .format
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            hemisphere: surface.hemisphere.to_string(),
            kind: surface.surface_kind.clone(),
            vertices: surface.vertex_count(),
            triangles: surface.triangle_count(),
            bounds: surface
                .bounding_box()
                .map(|(lo, hi)| [lo.to_array(), hi.to_array()]),
            zero_normals: surface
                .normals
                .iter()
                .filter(|n| **n == glam::Vec3::ZERO)
                .count(),
            curvature: surface
                .curvature
                .as_ref()
                .map(|c| CurvatureSummary::new(c, surface.curvature_path().as_deref())),
        }
    }
}

impl fmt::Display for SurfaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.path)?;
        writeln!(f, "  format:     {}", self.format)?;
        writeln!(f, "  hemisphere: {} ({})", self.hemisphere, self.kind)?;
        writeln!(f, "  vertices:   {}", self.vertices)?;
        writeln!(f, "  triangles:  {}", self.triangles)?;
        if let Some([lo, hi]) = self.bounds {
            writeln!(f, "  bounds:     {lo:?} .. {hi:?}")?;
        }
        if self.zero_normals > 0 {
            writeln!(f, "  zero normals: {}", self.zero_normals)?;
        }
        if let Some(curv) = &self.curvature {
            write!(f, "  curvature:  {curv}")?;
        }
        Ok(())
    }
}

/// Summary of a decoded curvature map.
#[derive(Debug, Serialize)]
pub struct CurvatureSummary {
    pub path: String,
    pub format: String,
    pub values: usize,
    pub min: Option<f32>,
    pub max: Option<f32>,
}

impl CurvatureSummary {
    pub fn new(curvature: &Curvature, path: Option<&Path>) -> Self {
        let range = curvature.range();
        Self {
            path: path.map(|p| p.display().to_string()).unwrap_or_default(),
            format: format!("{:?}", curvature.format).to_lowercase(),
            values: curvature.len(),
            min: range.map(|(lo, _)| lo),
            max: range.map(|(_, hi)| hi),
        }
    }
}

impl fmt::Display for CurvatureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} values", self.path, self.format, self.values)?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            write!(f, ", range {min} .. {max}")?;
        }
        writeln!(f, ")")
    }
}

/// Everything the inspector loaded.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub surfaces: Vec<SurfaceSummary>,
    pub curvatures: Vec<CurvatureSummary>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for surface in &self.surfaces {
            write!(f, "{surface}")?;
        }
        for curv in &self.curvatures {
            write!(f, "{curv}")?;
        }
        Ok(())
    }
}
