//! Tests for the trace-then-copy staging surface.

use contour_core::{ContourError, ContourStage, Grid, ScalarField};
use test_utils::fixtures::{expected, fields, FieldFixture};
use test_utils::{assert_approx_eq, create_island_grid};

fn field(fixture: &FieldFixture) -> ScalarField {
    Grid::from_vec(fixture.width, fixture.height, fixture.values.to_vec()).unwrap()
}

fn staged(fixture: &FieldFixture) -> ContourStage {
    let mut stage = ContourStage::new();
    stage.trace(&field(fixture), fixture.threshold).unwrap();
    stage
}

// ============================================================================
// Counts and lengths
// ============================================================================

#[test]
fn test_trace_reports_count() {
    let mut stage = ContourStage::new();
    assert_eq!(stage.trace(&field(&fields::TWO_BLOCKS), 5.0), Ok(2));
    assert_eq!(stage.contour_count(), 2);
    assert_eq!(stage.contour_length(0), Ok(8));
    assert_eq!(stage.contour_length(1), Ok(8));
}

#[test]
fn test_length_counts_closing_point_once() {
    // Four crossings around one hot sample, no repeated first point
    let stage = staged(&fields::SINGLE_PEAK);
    assert_eq!(stage.contour_length(0), Ok(expected::SINGLE_PEAK.len()));

    let mut buf = [f64::NAN; 8];
    stage.copy_contour(0, &mut buf, 4).unwrap();
    assert_ne!(buf[0..2], buf[6..8]);
    assert_eq!((buf[0], buf[1]), expected::SINGLE_PEAK[0]);
}

#[test]
fn test_length_out_of_range() {
    let stage = staged(&fields::SINGLE_PEAK);
    assert_eq!(
        stage.contour_length(1),
        Err(ContourError::InvalidIndex { index: 1, count: 1 })
    );
}

#[test]
fn test_retrace_replaces_previous_results() {
    let mut stage = staged(&fields::TWO_BLOCKS);
    stage.filter_by_area(1.0, 10.0);
    assert_eq!(stage.filtered().len(), 2);

    assert_eq!(stage.trace(&field(&fields::SINGLE_PEAK), 5.0), Ok(1));
    assert_eq!(stage.contour_count(), 1);
    assert!(stage.filtered().is_empty());
}

#[test]
fn test_failed_trace_leaves_stage_empty() {
    let mut stage = staged(&fields::CENTER_BLOCK);
    let border = Grid::from_vec(2, 2, vec![10.0, 0.0, 0.0, 0.0]).unwrap();
    assert!(matches!(
        stage.trace(&border, 5.0),
        Err(ContourError::LeftDomain { .. })
    ));
    assert_eq!(stage.contour_count(), 0);
}

#[test]
fn test_independent_stages() {
    let a = staged(&fields::SINGLE_PEAK);
    let b = staged(&fields::TWO_BLOCKS);
    assert_eq!(a.contour_count(), 1);
    assert_eq!(b.contour_count(), 2);
}

// ============================================================================
// Copy-out
// ============================================================================

#[test]
fn test_copy_full_contour() {
    let stage = staged(&fields::SINGLE_PEAK);
    let mut buf = vec![0.0; 8];
    stage.copy_contour(0, &mut buf, 4).unwrap();
    let want: Vec<f64> = expected::SINGLE_PEAK
        .iter()
        .flat_map(|&(x, y)| [x, y])
        .collect();
    assert_eq!(buf, want);
}

#[test]
fn test_copy_prefix_leaves_tail() {
    let stage = staged(&fields::CENTER_BLOCK);
    let mut buf = vec![-1.0; 10];
    stage.copy_contour(0, &mut buf, 3).unwrap();
    assert_eq!(&buf[..6], &[0.5, 0.0, 0.0, 0.5, 0.0, 1.5]);
    assert!(buf[6..].iter().all(|&v| v == -1.0));
}

#[test]
fn test_copy_reversed_matches_reversed_points() {
    let stage = staged(&fields::CENTER_BLOCK);
    let contour = stage.contours().get(0).unwrap();
    let n = contour.len();
    let mut buf = vec![0.0; n * 2];
    stage.copy_contour_reversed(0, &mut buf, n).unwrap();
    assert_eq!(buf, contour.reversed().to_interleaved());
}

#[test]
fn test_copy_zero_length() {
    let stage = staged(&fields::SINGLE_PEAK);
    let mut buf: Vec<f64> = Vec::new();
    assert!(stage.copy_contour(0, &mut buf, 0).is_ok());
}

#[test]
fn test_copy_errors_leave_buffer_untouched() {
    let stage = staged(&fields::SINGLE_PEAK);
    let sentinel = 123.25;

    let mut buf = vec![sentinel; 16];
    assert_eq!(
        stage.copy_contour(0, &mut buf, 5),
        Err(ContourError::LengthExceedsContour {
            requested: 5,
            available: 4
        })
    );
    assert!(buf.iter().all(|&v| v == sentinel));

    let mut short = vec![sentinel; 7];
    assert_eq!(
        stage.copy_contour_reversed(0, &mut short, 4),
        Err(ContourError::BufferTooShort {
            required: 8,
            available: 7
        })
    );
    assert!(short.iter().all(|&v| v == sentinel));

    assert_eq!(
        stage.copy_contour(3, &mut buf, 1),
        Err(ContourError::InvalidIndex { index: 3, count: 1 })
    );
    assert!(buf.iter().all(|&v| v == sentinel));
}

// ============================================================================
// Area selection
// ============================================================================

#[test]
fn test_filter_and_copy_indices() {
    let fixture = fields::RING;
    let mut stage = staged(&fixture);
    assert_eq!(stage.contour_count(), 2);

    assert_eq!(stage.filter_by_area(1.0, 100.0), 1);
    let mut dest = [usize::MAX; 2];
    assert_eq!(stage.copy_filtered_indices(&mut dest), Ok(1));
    let selected = stage.contours().get(dest[0]).unwrap();
    assert_approx_eq!(selected.area(), expected::RING_OUTER_AREA, 1e-12);
    assert_eq!(dest[1], usize::MAX);

    assert_eq!(stage.filter_by_area(0.0, 100.0), 2);
    assert_eq!(stage.filtered().indices(), &[0, 1]);
}

#[test]
fn test_filter_replaces_previous_selection() {
    let values = create_island_grid(11, 11, 4.0, 10.0);
    let mut stage = ContourStage::new();
    stage
        .trace(&Grid::from_vec(11, 11, values).unwrap(), 5.5)
        .unwrap();
    assert_eq!(stage.filter_by_area(0.0, 1000.0), 1);
    assert_eq!(stage.filter_by_area(1000.0, 2000.0), 0);
    let mut dest: [usize; 0] = [];
    assert_eq!(stage.copy_filtered_indices(&mut dest), Ok(0));
}
