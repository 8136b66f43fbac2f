//! Synthetic scalar field generators.
//!
//! Every generator returns a row-major `Vec<f64>` (row 0 first, then row 1,
//! etc.) so tests can hand it straight to a tracer.

/// An axis-aligned rectangle of samples: `(col, row, width, height)`.
pub type Block = (usize, usize, usize, usize);

/// Creates a grid filled with a constant value.
///
/// A uniform field has no crossings at any threshold.
pub fn create_uniform_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a grid of `background` with rectangular blocks set to `value`.
///
/// Blocks are clipped to the grid.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `blocks` - Rectangles as `(col, row, width, height)`
/// * `background` - Value outside every block
/// * `value` - Value inside the blocks
///
/// # Example
///
/// ```
/// use test_utils::create_block_grid;
///
/// let grid = create_block_grid(4, 4, &[(1, 1, 2, 2)], 0.0, 10.0);
/// assert_eq!(grid[5], 10.0); // col=1, row=1
/// assert_eq!(grid[0], 0.0);
/// assert_eq!(grid.iter().filter(|&&v| v == 10.0).count(), 4);
/// ```
pub fn create_block_grid(
    width: usize,
    height: usize,
    blocks: &[Block],
    background: f64,
    value: f64,
) -> Vec<f64> {
    let mut data = vec![background; width * height];
    for &(col, row, w, h) in blocks {
        for y in row..(row + h).min(height) {
            for x in col..(col + w).min(width) {
                data[y * width + x] = value;
            }
        }
    }
    data
}

/// Creates a cone peaking at the grid center.
///
/// Values fall linearly from `peak` at the center to zero at `radius`
/// samples away and stay zero beyond it, so any threshold in `(0, peak)`
/// yields one island as long as `radius` fits inside the grid.
pub fn create_island_grid(width: usize, height: usize, radius: f64, peak: f64) -> Vec<f64> {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            data.push((peak * (1.0 - dist / radius)).max(0.0));
        }
    }
    data
}

/// Creates a 4x4 field whose center cell is a saddle.
///
/// With `main_diagonal` the samples at `(1, 1)` and `(2, 2)` are hot,
/// otherwise the samples at `(2, 1)` and `(1, 2)`. Everything else is 0
/// and the hot samples are 10.
///
/// # Returns
///
/// `(values, width, height)`
pub fn create_saddle_grid(main_diagonal: bool) -> (Vec<f64>, usize, usize) {
    let hot: [(usize, usize); 2] = if main_diagonal {
        [(1, 1), (2, 2)]
    } else {
        [(2, 1), (1, 2)]
    };
    let mut data = vec![0.0; 16];
    for (col, row) in hot {
        data[row * 4 + col] = 10.0;
    }
    (data, 4, 4)
}

/// Creates a field whose value increases with the column index.
///
/// Each cell value is `col * step`. Useful for interpolation checks since
/// every crossing lies on a known vertical line.
pub fn create_ramp_grid(width: usize, height: usize, step: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(col as f64 * step);
        }
    }
    data
}

/// Creates a smooth field with several hills and valleys.
///
/// Values range roughly over `[-2, 2]`. This is the typical load for
/// benchmarks: many nested and disjoint contours at most thresholds.
pub fn create_wave_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x = col as f64 / width.max(1) as f64 * std::f64::consts::TAU * 2.0;
            let y = row as f64 / height.max(1) as f64 * std::f64::consts::TAU * 2.0;
            data.push(x.sin() + y.cos());
        }
    }
    data
}

/// Creates deterministic noise in `[0, 1)`.
///
/// Uses a simple hash-based approach for reproducibility, which produces
/// the worst case for tracing: many tiny contours and frequent saddles.
pub fn create_noise_grid(width: usize, height: usize, seed: u32) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let hash = simple_hash(col as u32, row as u32, seed);
            data.push((hash % 10_000) as f64 / 10_000.0);
        }
    }
    data
}

/// Surrounds a row-major grid with a one-sample ring of `value`.
///
/// Returns the padded values with `width + 2` columns and `height + 2`
/// rows.
pub fn pad_grid(values: &[f64], width: usize, height: usize, value: f64) -> Vec<f64> {
    let padded_width = width + 2;
    let mut data = vec![value; padded_width * (height + 2)];
    for row in 0..height {
        let src = &values[row * width..(row + 1) * width];
        let start = (row + 1) * padded_width + 1;
        data[start..start + width].copy_from_slice(src);
    }
    data
}

/// Counts sample-to-sample grid edges whose endpoints fall on different
/// sides of `threshold` (samples equal to it count as above).
///
/// Without ties every such edge carries exactly one traced point.
pub fn count_crossing_edges(values: &[f64], width: usize, height: usize, threshold: f64) -> usize {
    let above = |col: usize, row: usize| values[row * width + col] >= threshold;
    let mut count = 0;
    for row in 0..height {
        for col in 0..width {
            if col + 1 < width && above(col, row) != above(col + 1, row) {
                count += 1;
            }
            if row + 1 < height && above(col, row) != above(col, row + 1) {
                count += 1;
            }
        }
    }
    count
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
