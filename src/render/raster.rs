//! Bresenham line rasterization over integer points.
//!
//! The stepping order matters for exact output: both axis decisions are taken
//! from the same `e2` snapshot, so a single step may move diagonally.

use std::iter::FusedIterator;

use crate::types::Point;

/// Iterator over every point on the integer path from `from` to `to`,
/// both endpoints included.
#[derive(Debug, Clone)]
pub struct Line {
    x: i64,
    y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        let (x1, y1) = (from.x as i64, from.y as i64);
        let (x2, y2) = (to.x as i64, to.y as i64);
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        Self {
            x: x1,
            y: y1,
            end_x: x2,
            end_y: y2,
            dx,
            dy,
            sx: if x1 < x2 { 1 } else { -1 },
            sy: if y1 < y2 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        // x and y never leave the span between the two i32 endpoints
        let point = Point::new(self.x as i32, self.y as i32);
        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

impl FusedIterator for Line {}
