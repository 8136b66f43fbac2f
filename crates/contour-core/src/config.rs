//! Options for the high-level trace entry point.

use serde::{Deserialize, Serialize};

use crate::error::{ContourError, Result};

/// Open area interval used to select contours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaWindow {
    pub min: f64,
    pub max: f64,
}

impl AreaWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `area` lies strictly inside the window.
    pub fn contains(&self, area: f64) -> bool {
        area > self.min && area < self.max
    }
}

/// How [`crate::trace_contours`] prepares the field and post-processes
/// the traced polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    /// Surround the field with a ring of `pad_value` before tracing.
    pub pad_border: bool,

    /// Value of the padding ring.
    pub pad_value: f64,

    /// Return every contour in the opposite winding.
    pub reverse: bool,

    /// Keep only contours whose area falls inside this window.
    pub area: Option<AreaWindow>,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            pad_border: true,
            pad_value: 0.0,
            reverse: false,
            area: None,
        }
    }
}

impl TraceOptions {
    /// Load options from `CONTOUR_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load options through an arbitrary variable lookup, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(val) = lookup("CONTOUR_PAD_BORDER") {
            options.pad_border = parse_flag(&val);
        }

        if let Some(val) = lookup("CONTOUR_PAD_VALUE") {
            if let Ok(value) = val.trim().parse() {
                options.pad_value = value;
            }
        }

        if let Some(val) = lookup("CONTOUR_REVERSE") {
            options.reverse = parse_flag(&val);
        }

        let min = lookup("CONTOUR_MIN_AREA").and_then(|v| v.trim().parse::<f64>().ok());
        let max = lookup("CONTOUR_MAX_AREA").and_then(|v| v.trim().parse::<f64>().ok());
        if min.is_some() || max.is_some() {
            options.area = Some(AreaWindow::new(
                min.unwrap_or(f64::NEG_INFINITY),
                max.unwrap_or(f64::INFINITY),
            ));
        }

        options
    }

    /// Builder-style area window.
    pub fn with_area(mut self, min: f64, max: f64) -> Self {
        self.area = Some(AreaWindow::new(min, max));
        self
    }

    /// Builder-style winding reversal.
    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Builder-style padding.
    pub fn padded(mut self, pad_border: bool, pad_value: f64) -> Self {
        self.pad_border = pad_border;
        self.pad_value = pad_value;
        self
    }

    /// Validate the options.
    pub fn validate(&self) -> Result<()> {
        if self.pad_border && !self.pad_value.is_finite() {
            return Err(ContourError::invalid_options("pad_value must be finite"));
        }

        if let Some(window) = self.area {
            if window.min.is_nan() || window.max.is_nan() {
                return Err(ContourError::invalid_options("area bounds must not be NaN"));
            }
            if window.min >= window.max {
                return Err(ContourError::invalid_options(format!(
                    "min area {} must be below max area {}",
                    window.min, window.max
                )));
            }
        }

        Ok(())
    }
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim();
    val.eq_ignore_ascii_case("true") || val == "1"
}
