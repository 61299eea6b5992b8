//! Strongly-typed primitives for grid coordinates and sizes.

use thiserror::Error;

use crate::render::defaults;

/// An integer pen or cell coordinate. May lie anywhere, including outside the grid.
pub type Point = glam::IVec2;

/// Error for an invalid grid side length
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("grid side must be positive, got {0}")]
    NotPositive(i64),
    #[error("grid side {0} exceeds the maximum of {max}", max = defaults::MAX_GRID_SIZE)]
    TooLarge(i64),
}

/// Side length of a square grid. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension(usize);

const _: () = assert!(defaults::GRID_SIZE > 0 && defaults::GRID_SIZE <= defaults::MAX_GRID_SIZE);

impl Dimension {
    /// Grid size used before any `DIMENSION` directive is seen.
    pub const DEFAULT: Dimension = Dimension(defaults::GRID_SIZE);

    /// Create a Dimension with validation: the side must lie in `1..=MAX_GRID_SIZE`.
    pub fn try_new(side: i64) -> Result<Dimension, DimensionError> {
        if side <= 0 {
            return Err(DimensionError::NotPositive(side));
        }
        usize::try_from(side)
            .ok()
            .filter(|&n| n <= defaults::MAX_GRID_SIZE)
            .map(Dimension)
            .ok_or(DimensionError::TooLarge(side))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether a coordinate pair lies inside `[0, side)` on both axes.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        let side = self.0 as i64;
        (0..side).contains(&(point.x as i64)) && (0..side).contains(&(point.y as i64))
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Dimension {
    type Error = DimensionError;

    fn try_from(side: i64) -> Result<Self, Self::Error> {
        Dimension::try_new(side)
    }
}
