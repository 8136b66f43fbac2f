//! Two-phase query surface over traced contours.
//!
//! Hosts that cannot hold Rust containers trace once, then ask for counts
//! and lengths and copy data out into buffers they own. [`ContourStage`]
//! keeps the results of the most recent trace for those queries; each
//! stage is an ordinary value, so independent callers never share state.
//!
//! Every copy either writes the full request or fails and leaves the
//! destination untouched.

use tracing::warn;

use crate::area::FilteredIndexSet;
use crate::contour::{Contour, ContourSet, Point};
use crate::error::{ContourError, Result};
use crate::grid::ScalarField;
use crate::walker::trace;

/// Results of the latest trace plus the latest area selection.
#[derive(Debug, Clone, Default)]
pub struct ContourStage {
    contours: ContourSet,
    filtered: FilteredIndexSet,
}

impl ContourStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an already traced set, clearing any previous selection.
    pub fn from_contours(contours: ContourSet) -> Self {
        Self {
            contours,
            filtered: FilteredIndexSet::default(),
        }
    }

    /// Trace `field` at `threshold`, replacing everything staged before.
    ///
    /// On failure the stage is left empty. Returns the contour count.
    pub fn trace(&mut self, field: &ScalarField, threshold: f64) -> Result<usize> {
        self.contours = ContourSet::new();
        self.filtered = FilteredIndexSet::default();
        self.contours = trace(field, threshold)?;
        Ok(self.contours.len())
    }

    pub fn contours(&self) -> &ContourSet {
        &self.contours
    }

    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    fn contour(&self, index: usize) -> Result<&Contour> {
        self.contours
            .get(index)
            .ok_or_else(|| ContourError::invalid_index(index, self.contours.len()))
    }

    /// Number of points in contour `index`.
    ///
    /// The closing point is not repeated (see [`Contour`]), so a buffer of
    /// `2 * length` values holds the whole ring.
    pub fn contour_length(&self, index: usize) -> Result<usize> {
        self.contour(index).map(Contour::len)
    }

    /// Write the first `length` points of contour `index` into `dest` as
    /// interleaved `x, y` pairs.
    pub fn copy_contour(&self, index: usize, dest: &mut [f64], length: usize) -> Result<()> {
        let contour = self.checked_copy(index, dest.len(), length)?;
        write_interleaved(contour.points().iter().take(length), dest);
        Ok(())
    }

    /// Like [`copy_contour`](Self::copy_contour) but walking the contour
    /// backwards from its last point.
    pub fn copy_contour_reversed(&self, index: usize, dest: &mut [f64], length: usize) -> Result<()> {
        let contour = self.checked_copy(index, dest.len(), length)?;
        write_interleaved(contour.points().iter().rev().take(length), dest);
        Ok(())
    }

    fn checked_copy(&self, index: usize, available: usize, length: usize) -> Result<&Contour> {
        let contour = self.contour(index)?;
        if length > contour.len() {
            warn!(index, length, points = contour.len(), "Copy longer than contour");
            return Err(ContourError::LengthExceedsContour {
                requested: length,
                available: contour.len(),
            });
        }
        let required = length * 2;
        if available < required {
            return Err(ContourError::buffer_too_short(required, available));
        }
        Ok(contour)
    }

    /// Stage the indices of contours with `min < area < max`. Returns how
    /// many were selected.
    pub fn filter_by_area(&mut self, min: f64, max: f64) -> usize {
        self.filtered = self.contours.filter_by_area(min, max);
        self.filtered.len()
    }

    pub fn filtered(&self) -> &FilteredIndexSet {
        &self.filtered
    }

    /// Write the staged filtered indices into `dest`. Returns the number
    /// written.
    pub fn copy_filtered_indices(&self, dest: &mut [usize]) -> Result<usize> {
        let indices = self.filtered.indices();
        if dest.len() < indices.len() {
            return Err(ContourError::buffer_too_short(indices.len(), dest.len()));
        }
        dest[..indices.len()].copy_from_slice(indices);
        Ok(indices.len())
    }
}

fn write_interleaved<'a>(points: impl Iterator<Item = &'a Point>, dest: &mut [f64]) {
    for (pair, point) in dest.chunks_exact_mut(2).zip(points) {
        pair[0] = point.x;
        pair[1] = point.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged() -> ContourStage {
        ContourStage::from_contours(ContourSet::from(vec![
            Contour::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ]),
            Contour::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 4.0),
                Point::new(0.0, 4.0),
            ]),
        ]))
    }

    #[test]
    fn test_counts_and_lengths() {
        let stage = staged();
        assert_eq!(stage.contour_count(), 2);
        assert_eq!(stage.contour_length(0), Ok(3));
        assert_eq!(stage.contour_length(1), Ok(4));
        assert_eq!(stage.contour_length(2), Err(ContourError::invalid_index(2, 2)));
    }

    #[test]
    fn test_copy_prefix() {
        let stage = staged();
        let mut buf = [f64::NAN; 4];
        stage.copy_contour(1, &mut buf, 2).unwrap();
        assert_eq!(buf, [0.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn test_copy_reversed() {
        let stage = staged();
        let mut buf = [0.0; 6];
        stage.copy_contour_reversed(0, &mut buf, 3).unwrap();
        assert_eq!(buf, [1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_copy_too_short_buffer_untouched() {
        let stage = staged();
        let mut buf = [-7.0; 5];
        let err = stage.copy_contour(1, &mut buf, 3).unwrap_err();
        assert_eq!(err, ContourError::buffer_too_short(6, 5));
        assert!(buf.iter().all(|&v| v == -7.0));
    }

    #[test]
    fn test_filtered_indices() {
        let mut stage = staged();
        assert_eq!(stage.filter_by_area(1.0, 100.0), 1);
        let mut small: [usize; 0] = [];
        assert!(stage.copy_filtered_indices(&mut small).is_err());
        let mut dest = [usize::MAX; 3];
        assert_eq!(stage.copy_filtered_indices(&mut dest), Ok(1));
        assert_eq!(dest, [1, usize::MAX, usize::MAX]);
    }
}
