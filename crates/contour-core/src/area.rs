//! Shoelace areas and area-window selection of contours.

use serde::{Deserialize, Serialize};

use crate::contour::{Contour, ContourSet, Point};

/// Enclosed area of a closed polygon.
///
/// `0.5 * |Σ (x_i + x_{i+1}) (y_i - y_{i+1})|` over consecutive pairs,
/// wrapping from the last point to the first.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += (points[i].x + points[j].x) * (points[i].y - points[j].y);
    }
    (sum * 0.5).abs()
}

/// Signed shoelace area.
///
/// Positive for counter-clockwise winding in a y-up frame, which is
/// clockwise on screen where rows grow downward.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Indices of contours whose area lies strictly inside an area window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredIndexSet {
    indices: Vec<usize>,
}

impl FilteredIndexSet {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}

/// Select the indices `i` with `min < area(contours[i]) < max`, in order.
pub fn filter_by_area(contours: &[Contour], min: f64, max: f64) -> FilteredIndexSet {
    let indices = contours
        .iter()
        .enumerate()
        .filter(|(_, contour)| {
            let area = contour.area();
            area > min && area < max
        })
        .map(|(i, _)| i)
        .collect();
    FilteredIndexSet { indices }
}

impl ContourSet {
    /// Indices of the contours whose area lies strictly between `min` and `max`.
    pub fn filter_by_area(&self, min: f64, max: f64) -> FilteredIndexSet {
        filter_by_area(self.contours(), min, max)
    }

    /// Clone out the contours named by `filtered`, skipping stale indices.
    pub fn select(&self, filtered: &FilteredIndexSet) -> Vec<Contour> {
        filtered
            .iter()
            .filter_map(|i| self.get(i).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Contour {
        Contour::from_points(vec![
            Point::new(x0, y0),
            Point::new(x0 + w, y0),
            Point::new(x0 + w, y0 + h),
            Point::new(x0, y0 + h),
        ])
    }

    #[test]
    fn test_polygon_area_rectangle() {
        assert!((polygon_area(rect(1.0, 1.0, 3.0, 2.0).points()) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[Point::new(2.0, 3.0)]), 0.0);
        assert_eq!(polygon_area(&[Point::new(0.0, 0.0), Point::new(4.0, 4.0)]), 0.0);
    }

    #[test]
    fn test_signed_area_sign() {
        // Counter-clockwise in a y-up frame
        let ccw = rect(0.0, 0.0, 2.0, 2.0);
        assert!((signed_area(ccw.points()) - 4.0).abs() < 1e-12);
        assert!((signed_area(ccw.reversed().points()) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_filter_bounds_are_strict() {
        let contours = vec![rect(0.0, 0.0, 1.0, 1.0), rect(0.0, 0.0, 2.0, 1.0), rect(0.0, 0.0, 3.0, 1.0)];
        assert_eq!(filter_by_area(&contours, 1.0, 3.0).indices(), &[1]);
        assert_eq!(filter_by_area(&contours, 0.5, 3.5).indices(), &[0, 1, 2]);
        assert!(filter_by_area(&contours, 2.0, 2.0).is_empty());
        assert!(filter_by_area(&[], 0.0, 10.0).is_empty());
    }

    #[test]
    fn test_select_follows_indices() {
        let set = ContourSet::from(vec![rect(0.0, 0.0, 1.0, 1.0), rect(5.0, 5.0, 2.0, 2.0)]);
        let filtered = set.filter_by_area(2.0, 10.0);
        let selected = set.select(&filtered);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0], rect(5.0, 5.0, 2.0, 2.0));
    }
}
