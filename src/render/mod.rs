//! Character grid rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default grid size and glyphs
//! - `raster`: Bresenham line iterator

pub mod defaults;
pub mod raster;

use std::fmt::{self, Write};

use crate::types::{Dimension, Point};
use raster::Line;

/// Characters used when turning a grid into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub mark: char,
    pub blank: char,
    pub separator: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        defaults::GLYPHS
    }
}

/// Square canvas of marked/unmarked cells.
///
/// Cells are stored row-major (`y * side + x`). Marking outside the canvas is
/// silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: Dimension,
    cells: Vec<bool>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Dimension::DEFAULT)
    }
}

impl Grid {
    pub fn new(size: Dimension) -> Self {
        Self {
            size,
            cells: vec![false; size.get() * size.get()],
        }
    }

    pub fn size(&self) -> Dimension {
        self.size
    }

    /// Change the side length in place, discarding every mark.
    pub fn resize(&mut self, size: Dimension) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size.get() * size.get(), false);
    }

    #[inline(always)]
    fn index(&self, point: Point) -> Option<usize> {
        if !self.size.contains(point) {
            return None;
        }
        Some(point.y as usize * self.size.get() + point.x as usize)
    }

    /// Mark one cell. Out-of-bounds points are a no-op.
    pub fn mark(&mut self, point: Point) {
        if let Some(idx) = self.index(point) {
            self.cells[idx] = true;
        }
    }

    pub fn is_marked(&self, point: Point) -> bool {
        self.index(point).is_some_and(|idx| self.cells[idx])
    }

    /// Marked cells in row-major order.
    pub fn marked(&self) -> impl Iterator<Item = Point> + '_ {
        let side = self.size.get();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, marked)| **marked)
            .map(move |(idx, _)| Point::new((idx % side) as i32, (idx / side) as i32))
    }

    /// Mark every cell on the Bresenham path from `from` to `to`, endpoints included.
    pub fn draw_line(&mut self, from: Point, to: Point) {
        for point in Line::new(from, to) {
            self.mark(point);
        }
    }

    /// Render with the default glyphs.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render one text line per row, `y = 0` first, each cell followed by the separator.
    pub fn render_with(&self, glyphs: &Glyphs) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2 + self.size.get());
        // Writing to a String cannot fail
        let _ = self.write_cells(&mut out, glyphs);
        out
    }

    fn write_cells(&self, out: &mut impl Write, glyphs: &Glyphs) -> fmt::Result {
        for row in self.cells.chunks(self.size.get()) {
            for &marked in row {
                out.write_char(if marked { glyphs.mark } else { glyphs.blank })?;
                out.write_char(glyphs.separator)?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_cells(f, &defaults::GLYPHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(side: i64) -> Grid {
        Grid::new(Dimension::try_new(side).unwrap())
    }

    const DOTS: Glyphs = Glyphs {
        mark: '#',
        blank: '.',
        separator: ' ',
    };

    #[test]
    fn new_grid_is_blank() {
        let g = grid(3);
        assert_eq!(g.marked().count(), 0);
        assert_eq!(g.render(), "      \n      \n      \n");
    }

    #[test]
    fn default_grid_uses_default_size() {
        let g = Grid::default();
        assert_eq!(g.size().get(), defaults::GRID_SIZE);
        assert_eq!(g.render().lines().count(), defaults::GRID_SIZE);
    }

    #[test]
    fn mark_in_bounds() {
        let mut g = grid(3);
        g.mark(Point::new(2, 1));
        assert!(g.is_marked(Point::new(2, 1)));
        assert!(!g.is_marked(Point::new(1, 2)));
        assert_eq!(g.render_with(&DOTS), ". . . \n. . # \n. . . \n");
    }

    #[test]
    fn mark_out_of_bounds_is_ignored() {
        let mut g = grid(3);
        let before = g.clone();
        for p in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
            g.mark(Point::new(p.0, p.1));
        }
        assert_eq!(g, before);
        assert!(!g.is_marked(Point::new(-1, 0)));
    }

    #[test]
    fn render_keeps_trailing_separator() {
        let mut g = grid(2);
        g.mark(Point::new(1, 1));
        assert_eq!(g.render(), "    \n  + \n");
        assert_eq!(format!("{g}"), g.render());
    }

    #[test]
    fn marked_is_row_major() {
        let mut g = grid(4);
        g.mark(Point::new(3, 0));
        g.mark(Point::new(0, 2));
        g.mark(Point::new(1, 0));
        let marked: Vec<_> = g.marked().collect();
        assert_eq!(
            marked,
            vec![Point::new(1, 0), Point::new(3, 0), Point::new(0, 2)]
        );
    }

    #[test]
    fn draw_line_marks_path() {
        let mut g = grid(4);
        g.draw_line(Point::new(0, 0), Point::new(3, 3));
        assert_eq!(g.render_with(&DOTS), "# . . . \n. # . . \n. . # . \n. . . # \n");
    }

    #[test]
    fn draw_line_clips_to_grid() {
        let mut g = grid(3);
        g.draw_line(Point::new(-5, 1), Point::new(10, 1));
        assert_eq!(g.render_with(&DOTS), ". . . \n# # # \n. . . \n");
    }

    #[test]
    fn draw_line_fully_outside_marks_nothing() {
        let mut g = grid(3);
        g.draw_line(Point::new(-5, -5), Point::new(-1, -9));
        assert_eq!(g.marked().count(), 0);
    }

    #[test]
    fn resize_discards_marks() {
        let mut g = grid(3);
        g.mark(Point::new(1, 1));
        g.resize(Dimension::try_new(4).unwrap());
        assert_eq!(g.size().get(), 4);
        assert_eq!(g.marked().count(), 0);
        g.mark(Point::new(3, 3));
        assert!(g.is_marked(Point::new(3, 3)));
    }
}
