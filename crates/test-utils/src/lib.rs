//! Shared test utilities for the isocontour workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic scalar field generators
//! - Small named fixtures with known contours
//! - Polygon checks on plain coordinate tuples
//! - Approximate float assertion macros
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, create_block_grid};
//! ```

pub mod fixtures;
pub mod generators;
pub mod polygon;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use polygon::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f64, 1.0_f64, 0.001_f64);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of coordinate pairs.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Macro comparing two coordinate rings point by point.
///
/// Both sides must yield `(f64, f64)` pairs in the same order.
#[macro_export]
macro_rules! assert_ring_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: Vec<(f64, f64)> = $left.into_iter().collect();
        let right: Vec<(f64, f64)> = $right.into_iter().collect();
        assert_eq!(
            left.len(),
            right.len(),
            "ring lengths differ:\n  left: {:?}\n right: {:?}",
            left,
            right
        );
        for (l, r) in left.iter().zip(right.iter()) {
            $crate::assert_coords_approx_eq!((l.0, l.1), (r.0, r.1), $epsilon);
        }
    }};
}
