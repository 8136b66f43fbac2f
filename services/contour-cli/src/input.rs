//! Grid input parsing.
//!
//! Two formats are accepted:
//! - JSON: `{"width": 3, "height": 2, "values": [..]}` with row-major values
//! - CSV: one grid row per line, comma separated; blank lines and lines
//!   starting with `#` are skipped

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// A row-major grid as read from input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridInput {
    pub width: usize,
    pub height: usize,
    pub values: Vec<f64>,
}

/// Read a grid from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_grid(path: Option<&Path>, format: Option<InputFormat>) -> Result<GridInput> {
    let (text, format) = match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid from {}", path.display()))?;
            (text, format.unwrap_or_else(|| InputFormat::from_path(path)))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read grid from stdin")?;
            (text, format.unwrap_or(InputFormat::Json))
        }
    };

    match format {
        InputFormat::Json => parse_json(&text),
        InputFormat::Csv => parse_csv(&text),
    }
}

/// Parse the JSON grid encoding.
pub fn parse_json(text: &str) -> Result<GridInput> {
    let grid: GridInput = serde_json::from_str(text).context("Invalid JSON grid")?;
    let Some(expected) = grid.width.checked_mul(grid.height) else {
        bail!(
            "Grid dimensions {}x{} overflow the sample count",
            grid.width,
            grid.height
        );
    };
    if grid.values.len() != expected {
        bail!(
            "Grid declares {}x{} ({} values) but contains {}",
            grid.width,
            grid.height,
            expected,
            grid.values.len()
        );
    }
    Ok(grid)
}

/// Parse the CSV grid encoding.
pub fn parse_csv(text: &str) -> Result<GridInput> {
    let mut width = 0;
    let mut height = 0;
    let mut values = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split(',')
            .map(|field| field.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("Invalid number on line {}", line_no + 1))?;

        if height == 0 {
            width = row.len();
        } else if row.len() != width {
            bail!(
                "Line {} has {} values, expected {}",
                line_no + 1,
                row.len(),
                width
            );
        }

        values.extend(row);
        height += 1;
    }

    if height == 0 {
        bail!("CSV grid is empty");
    }

    Ok(GridInput {
        width,
        height,
        values,
    })
}
