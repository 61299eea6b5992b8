//! The pen robot: a position plus the grid it draws on.

use crate::log::debug;
use crate::render::Grid;
use crate::types::Point;

/// Pen holder bound to one grid for its whole lifetime.
///
/// The position is unbounded; only marking is clipped to the grid.
#[derive(Debug)]
pub struct Robot<'g> {
    position: Point,
    grid: &'g mut Grid,
}

impl<'g> Robot<'g> {
    /// A robot at the origin.
    pub fn new(grid: &'g mut Grid) -> Self {
        Self::at(grid, Point::ZERO)
    }

    pub fn at(grid: &'g mut Grid, position: Point) -> Self {
        Self { position, grid }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn move_to(&mut self, target: Point) {
        debug!(from = ?self.position, to = ?target, "move");
        self.position = target;
    }

    /// Draw from the current position to `target`, then move there.
    pub fn line_to(&mut self, target: Point) {
        debug!(from = ?self.position, to = ?target, "line");
        self.grid.draw_line(self.position, target);
        self.position = target;
    }
}
