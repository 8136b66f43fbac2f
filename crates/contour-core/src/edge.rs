//! Cell edges, neighbour geometry and the edge-crossing oracle.

use serde::{Deserialize, Serialize};

use crate::grid::Mask;

/// One side of a grid cell, numbered clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Position in clockwise order, `Top` = 0.
    pub fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }

    /// Edge for any index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Next edge clockwise.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next edge counter-clockwise.
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The same physical edge seen from the neighbouring cell.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Corner offsets `(dx, dy)` of the two endpoints, clockwise.
    pub fn endpoints(self) -> [(usize, usize); 2] {
        match self {
            Edge::Top => [(0, 0), (1, 0)],
            Edge::Right => [(1, 0), (1, 1)],
            Edge::Bottom => [(1, 1), (0, 1)],
            Edge::Left => [(0, 1), (0, 0)],
        }
    }

    /// Offset `(dx, dy)` of the cell across this edge.
    pub fn neighbor_offset(self) -> (isize, isize) {
        match self {
            Edge::Top => (0, -1),
            Edge::Right => (1, 0),
            Edge::Bottom => (0, 1),
            Edge::Left => (-1, 0),
        }
    }
}

/// A grid cell, addressed by its top-left sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Sample coordinates of the two endpoints of `edge`.
    pub fn edge_samples(self, edge: Edge) -> [(usize, usize); 2] {
        edge.endpoints()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The cell across `edge`, if it lies inside a `cols × rows` cell grid.
    pub fn neighbor(self, edge: Edge, cols: usize, rows: usize) -> Option<Cell> {
        let (dx, dy) = edge.neighbor_offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < cols && y < rows).then_some(Cell { x, y })
    }
}

impl Mask {
    /// Whether the threshold separates the endpoints of `edge`.
    ///
    /// `None` when an endpoint falls outside the mask.
    pub fn crosses(&self, cell: Cell, edge: Edge) -> Option<bool> {
        let [(x0, y0), (x1, y1)] = cell.edge_samples(edge);
        Some(self.is_above(x0, y0)? ^ self.is_above(x1, y1)?)
    }

    /// A cell whose four edges all cross: diagonal corners agree and the
    /// two diagonals disagree.
    pub fn is_saddle(&self, cell: Cell) -> bool {
        Edge::ALL
            .iter()
            .all(|&edge| self.crosses(cell, edge) == Some(true))
    }

    /// Number of crossing edges of `cell` (0, 2 or 4 inside the mask).
    pub fn crossing_count(&self, cell: Cell) -> usize {
        Edge::ALL
            .iter()
            .filter(|&&edge| self.crosses(cell, edge) == Some(true))
            .count()
    }

    /// The edge joined to the crossing on `edge` by a segment inside `cell`.
    ///
    /// An ordinary cell has exactly two crossing edges. In a saddle the two
    /// edges meeting at an above-threshold corner are joined, so the segment
    /// cuts that corner off and above-threshold corners stay apart.
    pub fn partner(&self, cell: Cell, edge: Edge) -> Option<Edge> {
        if !self.crosses(cell, edge)? {
            return None;
        }
        if self.is_saddle(cell) {
            let [(x, y), _] = cell.edge_samples(edge);
            return Some(if self.is_above(x, y)? {
                edge.prev()
            } else {
                edge.next()
            });
        }
        [edge.next(), edge.opposite(), edge.prev()]
            .into_iter()
            .find(|&other| self.crosses(cell, other) == Some(true))
    }
}
