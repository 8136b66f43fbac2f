//! Tracing a field at several thresholds.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contour::ContourSet;
use crate::error::Result;
use crate::grid::ScalarField;
use crate::walker::trace;

/// Contours traced at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelContours {
    pub level: f64,
    pub contours: ContourSet,
}

/// Evenly spaced levels covering `[min_value, max_value]`.
///
/// Levels are the multiples of `interval` inside the range.
pub fn contour_levels(min_value: f64, max_value: f64, interval: f64) -> Vec<f64> {
    if !interval.is_finite() || interval <= 0.0 {
        return vec![];
    }
    if min_value.is_nan() || max_value.is_nan() || max_value <= min_value {
        return vec![];
    }

    let first = (min_value / interval).ceil();
    let last = (max_value / interval).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return vec![];
    }

    (0..=(last - first) as usize)
        .map(|i| (first + i as f64) * interval)
        .collect()
}

/// Trace every level independently, in parallel.
///
/// Each level runs its own single-threaded walk over a shared read-only
/// field. Results keep the order of `levels`; the first failure wins.
pub fn trace_levels(field: &ScalarField, levels: &[f64]) -> Result<Vec<LevelContours>> {
    let results = levels
        .par_iter()
        .map(|&level| {
            trace(field, level).map(|contours| LevelContours { level, contours })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        levels = levels.len(),
        contours = results.iter().map(|r| r.contours.len()).sum::<usize>(),
        "Traced levels"
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_contour_levels() {
        assert_eq!(contour_levels(0.0, 20.0, 5.0), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(contour_levels(2.0, 18.0, 5.0), vec![5.0, 10.0, 15.0]);
        assert_eq!(contour_levels(-7.0, 7.0, 5.0), vec![-5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_contour_levels_invalid() {
        assert!(contour_levels(0.0, 10.0, 0.0).is_empty());
        assert!(contour_levels(0.0, 10.0, -1.0).is_empty());
        assert!(contour_levels(10.0, 0.0, 1.0).is_empty());
        assert!(contour_levels(0.0, 10.0, f64::NAN).is_empty());
        assert!(contour_levels(1.0, 2.0, 5.0).is_empty());
    }

    #[test]
    fn test_trace_levels_keeps_order() {
        #[rustfmt::skip]
        let field = Grid::from_vec(5, 5, vec![
            0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 5.0, 5.0, 5.0, 0.0,
            0.0, 5.0, 9.0, 5.0, 0.0,
            0.0, 5.0, 5.0, 5.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
        ]).unwrap();
        let results = trace_levels(&field, &[7.0, 2.0, 20.0]).unwrap();
        let levels: Vec<f64> = results.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![7.0, 2.0, 20.0]);
        assert_eq!(results[0].contours.len(), 1);
        assert_eq!(results[1].contours.len(), 1);
        assert_eq!(results[2].contours.len(), 0);
        // The inner ring encloses less than the outer one
        assert!(results[0].contours.get(0).unwrap().area() < results[1].contours.get(0).unwrap().area());
    }
}
