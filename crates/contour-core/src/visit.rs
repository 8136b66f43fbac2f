//! Per-cell visitation state for the contour walk.
//!
//! A cell is crossed by one contour segment, or by two when it is a saddle.
//! The state records which segments a walk has already traversed so each
//! crossing edge ends up in exactly one contour.

use crate::edge::{Cell, Edge};
use crate::grid::Grid;

/// How often, and how, a walk has passed through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    /// The only segment through an ordinary cell has been walked.
    Visited,
    /// One of the two segments through a saddle has been walked, joining
    /// these two edges.
    SaddleFirstPass([Edge; 2]),
    /// Both segments through a saddle have been walked.
    SaddleSecondPass,
}

impl VisitState {
    /// Whether a walk has already emitted the crossing on `edge`.
    pub fn is_walked(self, edge: Edge) -> bool {
        match self {
            VisitState::Unvisited => false,
            VisitState::Visited | VisitState::SaddleSecondPass => true,
            VisitState::SaddleFirstPass(segment) => segment.contains(&edge),
        }
    }

    /// State after a walk traverses `segment`.
    fn walked(self, segment: [Edge; 2], saddle: bool) -> Self {
        match self {
            _ if !saddle => VisitState::Visited,
            VisitState::Unvisited => VisitState::SaddleFirstPass(segment),
            VisitState::SaddleFirstPass(done) if done.contains(&segment[0]) => self,
            _ => VisitState::SaddleSecondPass,
        }
    }
}

/// Visitation states for a `cols × rows` cell grid.
#[derive(Debug, Clone)]
pub struct VisitMap {
    states: Grid<VisitState>,
}

impl VisitMap {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            states: Grid::filled(cols, rows, VisitState::Unvisited),
        }
    }

    pub fn cols(&self) -> usize {
        self.states.width()
    }

    pub fn rows(&self) -> usize {
        self.states.height()
    }

    /// State of `cell`; cells outside the map read as fully visited.
    pub fn state(&self, cell: Cell) -> VisitState {
        self.states
            .get(cell.x, cell.y)
            .unwrap_or(VisitState::Visited)
    }

    pub fn is_walked(&self, cell: Cell, edge: Edge) -> bool {
        self.state(cell).is_walked(edge)
    }

    /// Record a walk through `cell` between the two edges of `segment`.
    pub fn record(&mut self, cell: Cell, segment: [Edge; 2], saddle: bool) {
        let next = self.state(cell).walked(segment, saddle);
        self.states.set(cell.x, cell.y, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_cell_takes_one_walk() {
        let mut map = VisitMap::new(2, 2);
        let cell = Cell::new(1, 1);
        assert!(!map.is_walked(cell, Edge::Top));
        map.record(cell, [Edge::Top, Edge::Right], false);
        assert_eq!(map.state(cell), VisitState::Visited);
        assert!(map.is_walked(cell, Edge::Top));
        assert!(map.is_walked(cell, Edge::Bottom));
    }

    #[test]
    fn test_saddle_keeps_second_segment_open() {
        let mut map = VisitMap::new(3, 3);
        let cell = Cell::new(1, 1);
        map.record(cell, [Edge::Left, Edge::Top], true);
        assert_eq!(
            map.state(cell),
            VisitState::SaddleFirstPass([Edge::Left, Edge::Top])
        );
        assert!(map.is_walked(cell, Edge::Top));
        assert!(map.is_walked(cell, Edge::Left));
        assert!(!map.is_walked(cell, Edge::Right));
        assert!(!map.is_walked(cell, Edge::Bottom));

        map.record(cell, [Edge::Right, Edge::Bottom], true);
        assert_eq!(map.state(cell), VisitState::SaddleSecondPass);
        assert!(map.is_walked(cell, Edge::Bottom));
    }

    #[test]
    fn test_same_saddle_segment_twice_is_one_pass() {
        let mut map = VisitMap::new(3, 3);
        let cell = Cell::new(0, 2);
        map.record(cell, [Edge::Top, Edge::Right], true);
        map.record(cell, [Edge::Right, Edge::Top], true);
        assert_eq!(
            map.state(cell),
            VisitState::SaddleFirstPass([Edge::Top, Edge::Right])
        );
    }

    #[test]
    fn test_outside_reads_as_visited() {
        let map = VisitMap::new(2, 2);
        assert_eq!(map.state(Cell::new(2, 0)), VisitState::Visited);
        assert!(map.is_walked(Cell::new(0, 5), Edge::Left));
    }
}
