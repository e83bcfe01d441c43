//! The 9x9 sudoku board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, masks::ConstraintMasks, position::Position};

/// A 9x9 sudoku board with optionally-filled cells.
///
/// Cells are stored row-major; `None` is a blank. The board itself carries no
/// constraint bookkeeping, so cloning it is a flat 81-slot copy. Search
/// components pair a board with [`ConstraintMasks`] and keep the two in
/// lock-step.
///
/// # Text form
///
/// `Display` renders the canonical 81-character line with `.` for blanks, and
/// `FromStr` parses it back (also accepting `0` or `_` as blanks and skipping
/// whitespace, so grids can be laid out over multiple lines):
///
/// ```
/// use ninedig_core::Board;
///
/// let board: Board = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///     .parse()?;
/// assert_eq!(board.blank_count(), 51);
/// # Ok::<(), ninedig_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an all-blank board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is blank.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Writes `digit` at `pos`, overwriting any previous value.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.cell_index()] = Some(digit);
    }

    /// Blanks the cell at `pos`.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.cell_index()] = None;
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of blank cells (0-81).
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the row-major mask of filled cells.
    ///
    /// For a puzzle this is the "givens" mask that presentation layers use to
    /// distinguish clues from player-filled digits.
    #[must_use]
    pub fn given_mask(&self) -> [bool; 81] {
        let mut mask = [false; 81];
        for (slot, cell) in mask.iter_mut().zip(&self.cells) {
            *slot = cell.is_some();
        }
        mask
    }

    /// Returns `true` if the board is completely filled and every row,
    /// column, and box contains each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_full() && ConstraintMasks::from_board(self).is_ok()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its 81-character text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    WrongLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// A character was neither a digit, a blank marker, nor whitespace.
    #[display("unexpected character {found:?} at byte {index}")]
    UnexpectedChar {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let mut board = Self::new();
        let mut filled = 0usize;
        for (index, ch) in s.char_indices() {
            match ch {
                ch if ch.is_whitespace() => {}
                '.' | '0' | '_' => filled += 1,
                '1'..='9' => {
                    if filled < 81 {
                        let digit = Digit::new(ch as u8 - b'0').unwrap();
                        let pos = Position::new((filled / 9) as u8, (filled % 9) as u8);
                        board.set(pos, digit);
                    }
                    filled += 1;
                }
                found => return Err(ParseBoardError::UnexpectedChar { index, found }),
            }
        }
        if filled != 81 {
            return Err(ParseBoardError::WrongLength { len: filled });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    #[test]
    fn set_get_clear() {
        let mut board = Board::new();
        let pos = Position::new(3, 6);
        assert_eq!(board.get(pos), None);

        board.set(pos, Digit::D8);
        assert_eq!(board.get(pos), Some(Digit::D8));
        assert_eq!(board.blank_count(), 80);

        board.clear(pos);
        assert_eq!(board.get(pos), None);
        assert_eq!(board.blank_count(), 81);
    }

    #[test]
    fn display_parse_round_trip() {
        let board: Board = SOLVED.parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.to_string(), SOLVED);
        assert_eq!(SOLVED.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn parse_accepts_blank_markers_and_whitespace() {
        let text = "1........\n.2_______\n..3000000\n.........\n.........\n\
                    .........\n.........\n.........\n.........";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(board.get(Position::new(1, 1)), Some(Digit::D2));
        assert_eq!(board.get(Position::new(2, 2)), Some(Digit::D3));
        assert_eq!(board.blank_count(), 78);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(ParseBoardError::WrongLength { len: 3 })
        );
        let too_long = ".".repeat(82);
        assert_eq!(
            too_long.parse::<Board>(),
            Err(ParseBoardError::WrongLength { len: 82 })
        );
    }

    #[test]
    fn parse_rejects_unexpected_characters() {
        assert_eq!(
            "x".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar {
                index: 0,
                found: 'x'
            })
        );
    }

    #[test]
    fn given_mask_tracks_filled_cells() {
        let mut board = Board::new();
        assert_eq!(board.given_mask(), [false; 81]);

        board.set(Position::new(0, 0), Digit::D1);
        board.set(Position::new(8, 8), Digit::D9);
        let mask = board.given_mask();
        assert!(mask[0]);
        assert!(mask[80]);
        assert_eq!(mask.iter().filter(|given| **given).count(), 2);
    }

    #[test]
    fn is_solved_requires_full_and_duplicate_free() {
        let solved: Board = SOLVED.parse().unwrap();
        assert!(solved.is_solved());

        let mut missing = solved.clone();
        missing.clear(Position::new(0, 0));
        assert!(!missing.is_solved());

        let mut duplicated = solved;
        duplicated.set(Position::new(0, 0), Digit::D2);
        assert!(!duplicated.is_solved());
    }
}
