//! JSON rendering of traced contours.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use contour_core::Contour;
use serde::Serialize;

/// One traced polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContourOutput {
    pub area: f64,
    pub perimeter: f64,
    pub points: Vec<[f64; 2]>,
}

impl From<&Contour> for ContourOutput {
    fn from(contour: &Contour) -> Self {
        Self {
            area: contour.area(),
            perimeter: contour.perimeter(),
            points: contour.points().iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

/// All polygons traced at one level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelOutput {
    pub level: f64,
    pub contours: Vec<ContourOutput>,
}

impl LevelOutput {
    pub fn new(level: f64, contours: &[Contour]) -> Self {
        Self {
            level,
            contours: contours.iter().map(ContourOutput::from).collect(),
        }
    }
}

/// Serialize `levels` as a JSON array.
pub fn render(levels: &[LevelOutput], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(levels)
    } else {
        serde_json::to_string(levels)
    };
    json.context("Failed to serialize contours")
}

/// Write `levels` to `path`, or to stdout when `path` is `None`.
pub fn write_levels(levels: &[LevelOutput], path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = render(levels, pretty)?;
    match path {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write contours to {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write contours to stdout")
        }
    }
}
