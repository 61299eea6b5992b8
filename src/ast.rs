//! Parsed form of a plotter script.

use crate::robot::Robot;
use crate::types::{Dimension, Point};

/// A pen command. Consumed once by [`Command::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Lift the pen and move to a point: `MOVE_TO x y`
    MoveTo(Point),
    /// Draw from the current position to a point: `LINE_TO x y`
    LineTo(Point),
}

impl Command {
    pub fn apply(self, robot: &mut Robot<'_>) {
        match self {
            Command::MoveTo(p) => robot.move_to(p),
            Command::LineTo(p) => robot.line_to(p),
        }
    }
}

/// A complete script: an optional grid size and the commands in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    /// Size from the last valid `DIMENSION` directive.
    pub dimension: Option<Dimension>,
    pub commands: Vec<Command>,
}
