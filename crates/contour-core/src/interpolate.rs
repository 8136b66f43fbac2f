//! Linear interpolation of threshold crossings along cell edges.

use crate::contour::Point;
use crate::edge::{Cell, Edge};
use crate::error::{ContourError, Result};
use crate::grid::{Mask, ScalarField};

/// Shift applied to both coordinates so points land on pixel centers
/// rather than grid nodes.
pub const PIXEL_CENTER_OFFSET: f64 = 0.5;

/// Where `level` falls between `p0` (value `v0`) and `p1` (value `v1`).
///
/// Returns `None` when the parameter is not finite, which happens for
/// `v0 == v1` or infinite samples.
pub fn lerp_crossing(p0: (f64, f64), p1: (f64, f64), v0: f64, v1: f64, level: f64) -> Option<Point> {
    let t = (level - v0) / (v1 - v0);
    if !t.is_finite() {
        return None;
    }
    Some(Point::new(
        p0.0 + t * (p1.0 - p0.0) - PIXEL_CENTER_OFFSET,
        p0.1 + t * (p1.1 - p0.1) - PIXEL_CENTER_OFFSET,
    ))
}

/// Crossing point of `level` on `edge` of `cell`.
///
/// The endpoint classified below the threshold is always taken as `p0`, so
/// the same physical edge yields the same point from either side.
pub fn interpolate_crossing(
    field: &ScalarField,
    mask: &Mask,
    cell: Cell,
    edge: Edge,
    level: f64,
) -> Result<Point> {
    let left_domain = || ContourError::LeftDomain {
        x: cell.x,
        y: cell.y,
        edge,
    };

    let [mut a, mut b] = cell.edge_samples(edge);
    if mask.is_above(a.0, a.1).ok_or_else(left_domain)? {
        std::mem::swap(&mut a, &mut b);
    }

    let v0 = field.get(a.0, a.1).ok_or_else(left_domain)?;
    let v1 = field.get(b.0, b.1).ok_or_else(left_domain)?;
    let p0 = (a.0 as f64, a.1 as f64);
    let p1 = (b.0 as f64, b.1 as f64);

    lerp_crossing(p0, p1, v0, v1, level).ok_or(ContourError::DegenerateInterpolation {
        x: cell.x,
        y: cell.y,
        edge,
        v0,
        v1,
    })
}
