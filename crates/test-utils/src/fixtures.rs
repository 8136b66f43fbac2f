//! Common test fixtures for contour tracing tests.
//!
//! Small hand-checked fields together with the contours a tracer must
//! produce for them, in pixel-center coordinates of the unpadded grid.

/// A small field and the threshold it is meant to be traced at.
#[derive(Debug, Clone, Copy)]
pub struct FieldFixture {
    pub width: usize,
    pub height: usize,
    pub values: &'static [f64],
    pub threshold: f64,
}

impl FieldFixture {
    /// Returns the total number of samples.
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Returns the number of samples at or above the threshold.
    pub fn count_above(&self) -> usize {
        self.values.iter().filter(|&&v| v >= self.threshold).count()
    }
}

/// Named fields with known contours.
pub mod fields {
    use super::FieldFixture;

    /// One hot sample in the middle of a 3x3 field.
    #[rustfmt::skip]
    pub const SINGLE_PEAK: FieldFixture = FieldFixture {
        width: 3,
        height: 3,
        values: &[
            0.0,  0.0, 0.0,
            0.0, 10.0, 0.0,
            0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };

    /// A 2x2 hot block inside a 4x4 field.
    #[rustfmt::skip]
    pub const CENTER_BLOCK: FieldFixture = FieldFixture {
        width: 4,
        height: 4,
        values: &[
            0.0,  0.0,  0.0, 0.0,
            0.0, 10.0, 10.0, 0.0,
            0.0, 10.0, 10.0, 0.0,
            0.0,  0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };

    /// Two 2x2 hot blocks separated by a cold column.
    #[rustfmt::skip]
    pub const TWO_BLOCKS: FieldFixture = FieldFixture {
        width: 7,
        height: 4,
        values: &[
            0.0,  0.0,  0.0, 0.0,  0.0,  0.0, 0.0,
            0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0,
            0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0,
            0.0,  0.0,  0.0, 0.0,  0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };

    /// Hot samples on the main diagonal of the center cell.
    #[rustfmt::skip]
    pub const MAIN_DIAGONAL_SADDLE: FieldFixture = FieldFixture {
        width: 4,
        height: 4,
        values: &[
            0.0,  0.0,  0.0, 0.0,
            0.0, 10.0,  0.0, 0.0,
            0.0,  0.0, 10.0, 0.0,
            0.0,  0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };

    /// Hot samples on the anti-diagonal of the center cell.
    #[rustfmt::skip]
    pub const ANTI_DIAGONAL_SADDLE: FieldFixture = FieldFixture {
        width: 4,
        height: 4,
        values: &[
            0.0,  0.0,  0.0, 0.0,
            0.0,  0.0, 10.0, 0.0,
            0.0, 10.0,  0.0, 0.0,
            0.0,  0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };

    /// Five isolated hot samples in an X. Every cell around the centre
    /// sample is a saddle shared with a corner sample.
    #[rustfmt::skip]
    pub const CHECKERBOARD_X: FieldFixture = FieldFixture {
        width: 5,
        height: 5,
        values: &[
            0.0,  0.0,  0.0,  0.0, 0.0,
            0.0, 10.0,  0.0, 10.0, 0.0,
            0.0,  0.0, 10.0,  0.0, 0.0,
            0.0, 10.0,  0.0, 10.0, 0.0,
            0.0,  0.0,  0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };

    /// A 4x4 checkerboard of eight hot samples inside a cold border.
    #[rustfmt::skip]
    pub const CHECKERBOARD: FieldFixture = FieldFixture {
        width: 6,
        height: 6,
        values: &[
            0.0,  0.0,  0.0,  0.0,  0.0, 0.0,
            0.0, 10.0,  0.0, 10.0,  0.0, 0.0,
            0.0,  0.0, 10.0,  0.0, 10.0, 0.0,
            0.0, 10.0,  0.0, 10.0,  0.0, 0.0,
            0.0,  0.0, 10.0,  0.0, 10.0, 0.0,
            0.0,  0.0,  0.0,  0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };

    /// A cold hole inside a hot ring.
    #[rustfmt::skip]
    pub const RING: FieldFixture = FieldFixture {
        width: 5,
        height: 5,
        values: &[
            0.0,  0.0,  0.0,  0.0, 0.0,
            0.0, 10.0, 10.0, 10.0, 0.0,
            0.0, 10.0,  0.0, 10.0, 0.0,
            0.0, 10.0, 10.0, 10.0, 0.0,
            0.0,  0.0,  0.0,  0.0, 0.0,
        ],
        threshold: 5.0,
    };
}

/// Contours expected from the named fields.
pub mod expected {
    /// [`super::fields::SINGLE_PEAK`]
    pub const SINGLE_PEAK: &[(f64, f64)] = &[(0.5, 0.0), (0.0, 0.5), (0.5, 1.0), (1.0, 0.5)];

    /// Area of [`SINGLE_PEAK`].
    pub const SINGLE_PEAK_AREA: f64 = 0.5;

    /// [`super::fields::CENTER_BLOCK`]
    pub const CENTER_BLOCK: &[(f64, f64)] = &[
        (0.5, 0.0),
        (0.0, 0.5),
        (0.0, 1.5),
        (0.5, 2.0),
        (1.5, 2.0),
        (2.0, 1.5),
        (2.0, 0.5),
        (1.5, 0.0),
    ];

    /// Area of [`CENTER_BLOCK`].
    pub const CENTER_BLOCK_AREA: f64 = 3.5;

    /// Area of the outer contour of [`super::fields::RING`].
    pub const RING_OUTER_AREA: f64 = 8.5;

    /// Area of the hole contour of [`super::fields::RING`].
    pub const RING_HOLE_AREA: f64 = 0.5;

    /// [`super::fields::MAIN_DIAGONAL_SADDLE`], in trace order.
    pub const MAIN_DIAGONAL_SADDLE: [&[(f64, f64)]; 2] = [
        &[(0.5, 0.0), (0.0, 0.5), (0.5, 1.0), (1.0, 0.5)],
        &[(1.5, 1.0), (1.0, 1.5), (1.5, 2.0), (2.0, 1.5)],
    ];

    /// [`super::fields::ANTI_DIAGONAL_SADDLE`], in trace order.
    pub const ANTI_DIAGONAL_SADDLE: [&[(f64, f64)]; 2] = [
        &[(1.5, 0.0), (1.0, 0.5), (1.5, 1.0), (2.0, 0.5)],
        &[(0.5, 1.0), (0.0, 1.5), (0.5, 2.0), (1.0, 1.5)],
    ];

    /// Contour count of [`super::fields::CHECKERBOARD_X`]: one diamond per
    /// hot sample.
    pub const CHECKERBOARD_X_CONTOURS: usize = 5;

    /// Total points of [`super::fields::CHECKERBOARD_X`]: four crossings
    /// around each hot sample.
    pub const CHECKERBOARD_X_POINTS: usize = 20;

    /// The diamond around the centre sample of
    /// [`super::fields::CHECKERBOARD_X`], up to starting vertex.
    pub const CHECKERBOARD_X_CENTER: &[(f64, f64)] =
        &[(1.5, 1.0), (1.0, 1.5), (1.5, 2.0), (2.0, 1.5)];

    /// Contour count of [`super::fields::CHECKERBOARD`].
    pub const CHECKERBOARD_CONTOURS: usize = 8;

    /// Total points of [`super::fields::CHECKERBOARD`].
    pub const CHECKERBOARD_POINTS: usize = 32;

    /// Area of every diamond around an isolated hot sample.
    pub const DIAMOND_AREA: f64 = 0.5;
}

/// Grid sizes used by benchmarks.
pub mod sizes {
    /// Small grid, a few hundred samples.
    pub const SMALL: (usize, usize) = (32, 32);

    /// Medium grid, comparable to a map tile.
    pub const MEDIUM: (usize, usize) = (256, 256);

    /// Large grid.
    pub const LARGE: (usize, usize) = (1024, 1024);
}
