//! Cell-to-cell contour walk.
//!
//! The grid is scanned row-major. A cell with a crossing edge that no walk
//! has emitted yet starts a new walk: its first such edge (in top, right,
//! bottom, left order) gives the first point and the segment joined to it
//! inside the cell gives the second. From there the walk steps across each
//! exit edge into the neighbour, takes the edge paired with its entry there
//! and emits that crossing, until the next step would cross the first edge
//! again. That closes the polygon without repeating its first point.
//!
//! Saddle cells carry two segments. Their pairing cuts off the two
//! above-threshold corners, so those stay apart, and the cell records which
//! segment was walked. The other segment may later be reached by a second
//! walk or start one of its own.

use tracing::{debug, trace as trace_event};

use crate::contour::{Contour, ContourSet, Point};
use crate::edge::{Cell, Edge};
use crate::error::{ContourError, Result};
use crate::grid::{Mask, ScalarField};
use crate::interpolate::interpolate_crossing;
use crate::visit::VisitMap;

/// Steps a single walk may take per cell before it is considered stuck.
const STEPS_PER_CELL: usize = 8;

/// Trace every closed contour of `field` at `level`.
///
/// Fails with [`ContourError::LeftDomain`] when a contour reaches the
/// outer boundary of the grid; pad the field (see
/// [`ScalarField::padded`]) to trace regions touching the border.
pub fn trace(field: &ScalarField, level: f64) -> Result<ContourSet> {
    let (width, height) = (field.width(), field.height());
    if width < 2 || height < 2 {
        return Err(ContourError::GridTooSmall { width, height });
    }

    let mask = field.threshold(level);
    let contours = Walker::new(field, &mask, level).run()?;

    debug!(
        width,
        height,
        level,
        above = mask.count_above(),
        contours = contours.len(),
        total_points = contours.total_points(),
        "Traced contours"
    );

    Ok(contours)
}

struct Walker<'a> {
    field: &'a ScalarField,
    mask: &'a Mask,
    level: f64,
    visits: VisitMap,
    max_steps: usize,
}

impl<'a> Walker<'a> {
    fn new(field: &'a ScalarField, mask: &'a Mask, level: f64) -> Self {
        let cols = field.width() - 1;
        let rows = field.height() - 1;
        Self {
            field,
            mask,
            level,
            visits: VisitMap::new(cols, rows),
            max_steps: STEPS_PER_CELL * cols * rows + STEPS_PER_CELL,
        }
    }

    fn run(mut self) -> Result<ContourSet> {
        let mut contours = ContourSet::new();
        for y in 0..self.visits.rows() {
            for x in 0..self.visits.cols() {
                let start = Cell::new(x, y);
                // A saddle may start a second walk on its other segment
                while let Some(first) = self.first_unwalked(start) {
                    let contour = self.walk(start, first)?;
                    trace_event!(x, y, points = contour.len(), "Closed contour");
                    contours.finalize(contour);
                }
            }
        }
        Ok(contours)
    }

    /// The cell across `edge`, or an error if that leaves the grid.
    fn step_target(&self, cell: Cell, edge: Edge) -> Result<Cell> {
        cell.neighbor(edge, self.visits.cols(), self.visits.rows())
            .ok_or(ContourError::LeftDomain {
                x: cell.x,
                y: cell.y,
                edge,
            })
    }

    fn crosses(&self, cell: Cell, edge: Edge) -> bool {
        self.mask.crosses(cell, edge).unwrap_or(false)
    }

    fn crossing_point(&self, cell: Cell, edge: Edge) -> Result<Point> {
        interpolate_crossing(self.field, self.mask, cell, edge, self.level)
    }

    /// First crossing edge of `cell` no walk has emitted yet.
    fn first_unwalked(&self, cell: Cell) -> Option<Edge> {
        Edge::ALL
            .into_iter()
            .find(|&edge| self.crosses(cell, edge) && !self.visits.is_walked(cell, edge))
    }

    /// Take the segment of `cell` that starts at `entry` and return its
    /// other edge.
    fn traverse(&mut self, cell: Cell, entry: Edge) -> Result<Edge> {
        let exit = self
            .mask
            .partner(cell, entry)
            .ok_or(ContourError::DeadEnd {
                x: cell.x,
                y: cell.y,
                edge: entry,
            })?;
        self.visits
            .record(cell, [entry, exit], self.mask.is_saddle(cell));
        Ok(exit)
    }

    fn walk(&mut self, start: Cell, first: Edge) -> Result<Contour> {
        // Stepping from here across `first` would re-enter the start cell
        let closing = self.step_target(start, first)?;

        let mut contour = Contour::new();
        contour.push(self.crossing_point(start, first)?);

        let mut current = start;
        let mut exit = self.traverse(start, first)?;

        for _ in 0..self.max_steps {
            let next = self.step_target(current, exit)?;
            if current == closing && exit == first.opposite() {
                // A tie can land the last crossing on the first point
                contour.close();
                return Ok(contour);
            }

            let point = self.crossing_point(current, exit)?;
            if contour.last() != Some(&point) {
                contour.push(point);
            }

            exit = self.traverse(next, exit.opposite())?;
            current = next;
        }

        Err(ContourError::WalkDidNotClose {
            x: start.x,
            y: start.y,
            steps: self.max_steps,
        })
    }
}
