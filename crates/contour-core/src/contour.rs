//! Points, closed contours and the ordered set a trace produces.

use serde::{Deserialize, Serialize};

use crate::area::{polygon_area, signed_area};

/// A point in pixel-center sample space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A closed polygon in walk order.
///
/// The closing edge from the last point back to the first is implicit: the
/// walk stops before re-emitting the crossing it started on, so the first
/// point is never repeated at the end. A ring of `n` distinct crossings has
/// `len() == n`, one less than encodings that close rings explicitly
/// (GeoJSON, WKT); append [`Contour::points`]`[0]` when exporting to those.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Drop a last point that repeats the first.
    pub(crate) fn close(&mut self) {
        if self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
    }

    /// Enclosed area (shoelace, absolute value).
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    /// Signed shoelace area; the sign gives the winding direction.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Length of the boundary including the closing edge.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.points[i].distance_to(&self.points[(i + 1) % n]))
            .sum()
    }

    /// Axis-aligned `(min, max)` corners, `None` for an empty contour.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().skip(1).fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// The same polygon traversed in the opposite direction.
    pub fn reversed(&self) -> Contour {
        Contour {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Interleaved `[x0, y0, x1, y1, ..]` coordinates.
    pub fn to_interleaved(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

/// Contours in the order the grid scan discovered them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourSet {
    contours: Vec<Contour>,
}

impl ContourSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contour> {
        self.contours.get(index)
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    pub fn into_vec(self) -> Vec<Contour> {
        self.contours
    }

    /// Sum of point counts over all contours.
    pub fn total_points(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Append a finished contour. Empty contours are dropped so every
    /// stored contour has at least one point.
    pub(crate) fn finalize(&mut self, contour: Contour) {
        if !contour.is_empty() {
            self.contours.push(contour);
        }
    }
}

impl From<Vec<Contour>> for ContourSet {
    fn from(contours: Vec<Contour>) -> Self {
        Self {
            contours: contours.into_iter().filter(|c| !c.is_empty()).collect(),
        }
    }
}

impl IntoIterator for ContourSet {
    type Item = Contour;
    type IntoIter = std::vec::IntoIter<Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContourSet {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Contour {
        Contour::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_perimeter_includes_closing_edge() {
        assert!((unit_square().perimeter() - 4.0).abs() < 1e-12);
        assert_eq!(Contour::from_points(vec![Point::new(3.0, 3.0)]).perimeter(), 0.0);
    }

    #[test]
    fn test_bounds() {
        let (lo, hi) = unit_square().bounds().unwrap();
        assert_eq!(lo, Point::new(0.0, 0.0));
        assert_eq!(hi, Point::new(1.0, 1.0));
        assert!(Contour::new().bounds().is_none());
    }

    #[test]
    fn test_reversed_flips_winding() {
        let square = unit_square();
        let reversed = square.reversed();
        assert_eq!(reversed.points()[0], Point::new(0.0, 1.0));
        assert_eq!(square.signed_area(), -reversed.signed_area());
        assert_eq!(square.area(), reversed.area());
    }

    #[test]
    fn test_interleaved() {
        let c = Contour::from_points(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(c.to_interleaved(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_set_drops_empty_contours() {
        let mut set = ContourSet::new();
        set.finalize(Contour::new());
        set.finalize(unit_square());
        assert_eq!(set.len(), 1);
        assert_eq!(set.total_points(), 4);

        let from_vec = ContourSet::from(vec![Contour::new(), unit_square(), Contour::new()]);
        assert_eq!(from_vec.len(), 1);
    }
}
