//! Isocontour tracing for regular scalar grids.
//!
//! Closed polygons are traced where a row-major field crosses a threshold:
//! - Threshold mask and lazy edge-crossing tests
//! - Cell-to-cell boundary walk with explicit saddle disambiguation
//! - Linear interpolation of crossings in pixel-center coordinates
//! - Shoelace areas and open-interval area selection
//! - A two-phase staging surface for hosts that copy results out
//!
//! ```
//! use contour_core::{trace_contours, TraceOptions};
//!
//! // A single hot sample in a cold field
//! let values = vec![0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 0.0];
//! let contours = trace_contours(&values, 3, 3, 5.0, &TraceOptions::default()).unwrap();
//! assert_eq!(contours.len(), 1);
//! ```

pub mod area;
pub mod config;
pub mod contour;
pub mod edge;
pub mod error;
pub mod grid;
pub mod interpolate;
pub mod levels;
pub mod stage;
pub mod visit;
pub mod walker;

pub use area::{filter_by_area, polygon_area, signed_area, FilteredIndexSet};
pub use config::{AreaWindow, TraceOptions};
pub use contour::{Contour, ContourSet, Point};
pub use edge::{Cell, Edge};
pub use error::{ContourError, Result};
pub use grid::{Grid, Mask, ScalarField};
pub use levels::{contour_levels, trace_levels, LevelContours};
pub use stage::ContourStage;
pub use visit::VisitState;
pub use walker::trace;

/// Trace a row-major buffer with padding, area selection and winding
/// applied as `options` asks.
///
/// With padding on, the unpadded sample `(col, row)` sits at
/// `(col + 0.5, row + 0.5)` in the returned coordinates.
pub fn trace_contours(
    values: &[f64],
    width: usize,
    height: usize,
    threshold: f64,
    options: &TraceOptions,
) -> Result<Vec<Contour>> {
    options.validate()?;
    let field = prepare_field(values, width, height, options)?;
    let contours = trace(&field, threshold)?;
    Ok(finish(contours, options))
}

/// [`trace_contours`] at several thresholds.
///
/// The buffer is copied and padded once; levels are traced in parallel by
/// [`trace_levels`] and come back in the order given, each with its own
/// area selection and winding applied.
pub fn trace_contour_levels(
    values: &[f64],
    width: usize,
    height: usize,
    levels: &[f64],
    options: &TraceOptions,
) -> Result<Vec<LevelContours>> {
    options.validate()?;
    let field = prepare_field(values, width, height, options)?;
    let traced = trace_levels(&field, levels)?;

    Ok(traced
        .into_iter()
        .map(|traced| LevelContours {
            level: traced.level,
            contours: ContourSet::from(finish(traced.contours, options)),
        })
        .collect())
}

fn prepare_field(
    values: &[f64],
    width: usize,
    height: usize,
    options: &TraceOptions,
) -> Result<ScalarField> {
    let field = Grid::from_vec(width, height, values.to_vec())?;
    Ok(if options.pad_border {
        field.padded(options.pad_value)
    } else {
        field
    })
}

/// Area selection then winding.
fn finish(contours: ContourSet, options: &TraceOptions) -> Vec<Contour> {
    let found = contours.len();

    let selected: Vec<Contour> = match options.area {
        Some(window) => {
            let filtered = contours.filter_by_area(window.min, window.max);
            contours.select(&filtered)
        }
        None => contours.into_vec(),
    };

    tracing::debug!(
        found,
        selected = selected.len(),
        reverse = options.reverse,
        "Prepared contours"
    );

    if options.reverse {
        selected.iter().map(Contour::reversed).collect()
    } else {
        selected
    }
}
