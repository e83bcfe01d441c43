//! Board position (row, column) coordinate type.

use std::fmt::{self, Display};

/// A cell coordinate on the 9x9 board.
///
/// Both coordinates are guaranteed to be in 0-8; construction asserts the
/// range once so downstream indexing never needs bounds checks.
///
/// # Examples
///
/// ```
/// use ninedig_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.mirrored(), Position::new(4, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the flat row-major cell index (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the 180-degree rotation partner of this cell.
    ///
    /// The board center `r4c4` is its own partner.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self::new(8 - self.row, 8 - self.col)
    }

    /// Iterates over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
