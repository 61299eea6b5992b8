//! Default grid size and glyphs used for text output

use super::Glyphs;

/// Side length of the grid before any `DIMENSION` directive.
pub const GRID_SIZE: usize = 5;

/// Largest side a `DIMENSION` directive may request (16M cells).
pub const MAX_GRID_SIZE: usize = 4096;

pub const MARK: char = '+';
pub const BLANK: char = ' ';
/// Written after every cell, the last one in a row included.
pub const SEPARATOR: char = ' ';

pub const GLYPHS: Glyphs = Glyphs {
    mark: MARK,
    blank: BLANK,
    separator: SEPARATOR,
};
