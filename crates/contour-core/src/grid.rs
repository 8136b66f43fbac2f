//! Bounds-checked 2D sample grids.
//!
//! Everything the walker touches goes through [`Grid::get`], so an
//! off-domain lookup surfaces as `None` instead of reading a neighbouring
//! row.

use serde::{Deserialize, Serialize};

use crate::error::{ContourError, Result};

/// A row-major `width × height` grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// The scalar samples a trace runs over.
pub type ScalarField = Grid<f64>;

impl<T: Copy> Grid<T> {
    /// Wrap a row-major buffer, checking it matches the dimensions.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or(ContourError::DimensionMismatch {
                width,
                height,
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(ContourError::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A grid with every entry set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat index of `(x, y)`, or `None` outside the grid.
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Entry at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.offset(x, y).map(|i| self.data[i])
    }

    /// Overwrite the entry at `(x, y)`. Returns `false` outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Grid<f64> {
    /// Classify every sample against `level` (`>=` counts as above).
    pub fn threshold(&self, level: f64) -> Mask {
        Mask {
            grid: Grid {
                width: self.width,
                height: self.height,
                data: self.data.iter().map(|&v| v >= level).collect(),
            },
        }
    }

    /// Surround the field with a one-sample ring of `pad_value`.
    ///
    /// A uniform ring never produces a crossing on the outermost cell
    /// edges, so every contour of the padded field closes inside it.
    pub fn padded(&self, pad_value: f64) -> Self {
        let width = self.width + 2;
        let height = self.height + 2;
        let mut data = vec![pad_value; width * height];
        for (row, src) in self.data.chunks(self.width.max(1)).enumerate() {
            let start = (row + 1) * width + 1;
            data[start..start + src.len()].copy_from_slice(src);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Minimum and maximum of the finite samples.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Above/below classification of every sample for one threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    grid: Grid<bool>,
}

impl Mask {
    /// Whether sample `(x, y)` is at or above the threshold.
    pub fn is_above(&self, x: usize, y: usize) -> Option<bool> {
        self.grid.get(x, y)
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// Number of samples classified above.
    pub fn count_above(&self) -> usize {
        self.grid.data.iter().filter(|&&b| b).count()
    }
}
