//! Row/column/box occupancy masks for constraint propagation.

use crate::{board::Board, digit::Digit, digit_set::DigitSet, position::Position};

/// Digits already placed in each row, column, and 3x3 box.
///
/// This is the search engine's working state: one [`DigitSet`] per unit,
/// updated in lock-step with the [`Board`] as digits are placed and removed.
/// Deriving the legal candidates for a cell is three mask lookups and a
/// complement, independent of how many cells are filled.
///
/// Invariant: a digit's bit is set in a unit mask exactly when one cell of
/// that unit holds the digit. [`ConstraintMasks::from_board`] refuses boards
/// that would break this (a duplicate digit in some unit), so search always
/// starts from a legal position.
///
/// # Examples
///
/// ```
/// use ninedig_core::{Board, ConstraintMasks, Digit, DigitSet, Position};
///
/// let mut board = Board::new();
/// board.set(Position::new(0, 0), Digit::D1);
/// board.set(Position::new(1, 1), Digit::D2);
///
/// let masks = ConstraintMasks::from_board(&board)?;
/// let candidates = masks.candidates(Position::new(0, 1));
/// // 1 is taken in the row, 2 in the column's box.
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D1));
/// assert!(!candidates.contains(Digit::D2));
/// # Ok::<(), ninedig_core::DuplicateDigit>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintMasks {
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

/// A digit occurs more than once in a row, column, or box.
///
/// Reported by [`ConstraintMasks::from_board`] for malformed input; the
/// position identifies the second occurrence encountered in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} occurs twice in a unit containing {position}")]
pub struct DuplicateDigit {
    /// The duplicated digit.
    pub digit: Digit,
    /// The cell holding the second occurrence.
    pub position: Position,
}

impl ConstraintMasks {
    /// Builds the masks from a board in a single 81-cell scan.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateDigit`] if any row, column, or box already contains
    /// a digit twice.
    pub fn from_board(board: &Board) -> Result<Self, DuplicateDigit> {
        let mut masks = Self {
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
        };
        for position in Position::all() {
            if let Some(digit) = board.get(position) {
                if !masks.candidates(position).contains(digit) {
                    return Err(DuplicateDigit { digit, position });
                }
                masks.place(position, digit);
            }
        }
        Ok(masks)
    }

    /// Returns the digits legal at `pos`: those absent from its row, column,
    /// and box.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        let used = self.rows[pos.row() as usize]
            | self.cols[pos.col() as usize]
            | self.boxes[pos.box_index() as usize];
        !used
    }

    /// Marks `digit` as occupied in the three units covering `pos`.
    ///
    /// The caller writes the board cell as part of the same step; no
    /// intermediate state is observable between the two updates.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.rows[pos.row() as usize].insert(digit);
        self.cols[pos.col() as usize].insert(digit);
        self.boxes[pos.box_index() as usize].insert(digit);
    }

    /// Reverses a [`place`](Self::place) for the same cell and digit.
    pub fn unplace(&mut self, pos: Position, digit: Digit) {
        self.rows[pos.row() as usize].remove(digit);
        self.cols[pos.col() as usize].remove(digit);
        self.boxes[pos.box_index() as usize].remove(digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_allows_everything() {
        let masks = ConstraintMasks::from_board(&Board::new()).unwrap();
        for pos in Position::all() {
            assert_eq!(masks.candidates(pos), DigitSet::ALL);
        }
    }

    #[test]
    fn placed_digit_blocks_row_col_and_box() {
        let mut board = Board::new();
        board.set(Position::new(4, 4), Digit::D5);
        let masks = ConstraintMasks::from_board(&board).unwrap();

        assert!(!masks.candidates(Position::new(4, 0)).contains(Digit::D5));
        assert!(!masks.candidates(Position::new(0, 4)).contains(Digit::D5));
        assert!(!masks.candidates(Position::new(3, 3)).contains(Digit::D5));
        // Unrelated cell is unaffected.
        assert_eq!(masks.candidates(Position::new(0, 0)), DigitSet::ALL);
    }

    #[test]
    fn rejects_duplicate_in_row() {
        let mut board = Board::new();
        board.set(Position::new(2, 0), Digit::D7);
        board.set(Position::new(2, 8), Digit::D7);
        assert_eq!(
            ConstraintMasks::from_board(&board),
            Err(DuplicateDigit {
                digit: Digit::D7,
                position: Position::new(2, 8),
            })
        );
    }

    #[test]
    fn rejects_duplicate_in_column_and_box() {
        let mut board = Board::new();
        board.set(Position::new(0, 3), Digit::D1);
        board.set(Position::new(8, 3), Digit::D1);
        assert!(ConstraintMasks::from_board(&board).is_err());

        let mut board = Board::new();
        board.set(Position::new(0, 0), Digit::D9);
        board.set(Position::new(2, 2), Digit::D9);
        assert!(ConstraintMasks::from_board(&board).is_err());
    }

    #[test]
    fn place_then_unplace_is_bit_for_bit_identical() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Digit::D1);
        board.set(Position::new(5, 7), Digit::D4);
        let mut masks = ConstraintMasks::from_board(&board).unwrap();
        let before = masks.clone();

        for pos in Position::all() {
            if board.get(pos).is_some() {
                continue;
            }
            for digit in masks.candidates(pos) {
                masks.place(pos, digit);
                masks.unplace(pos, digit);
                assert_eq!(masks, before, "masks diverged at {pos} digit {digit}");
            }
        }
    }

    #[test]
    fn duplicate_error_displays_the_offending_unit_member() {
        let err = DuplicateDigit {
            digit: Digit::D7,
            position: Position::new(2, 8),
        };
        assert_eq!(
            err.to_string(),
            "digit 7 occurs twice in a unit containing r2c8"
        );
    }
}
