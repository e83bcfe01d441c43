//! The recursive search skeleton shared by both query modes.

use ninedig_core::{Board, ConstraintMasks, Digit, DigitSet, DuplicateDigit, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Fills `board` in place with one complete solution.
///
/// Candidate digits are shuffled with `rng` before each branch, so calling
/// this repeatedly on the same partial board yields different completions.
/// Returns `false` only when the (valid) input admits no solution at all; the
/// board is then left partially mutated. An initially empty board always
/// succeeds.
///
/// # Errors
///
/// Returns [`DuplicateDigit`] if the input already violates a sudoku
/// constraint; the search never starts from an illegal position.
pub fn solve_one<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<bool, DuplicateDigit> {
    let masks = ConstraintMasks::from_board(board)?;
    let mut search = Search { board, masks };
    Ok(search.find_one(rng))
}

/// Counts the solutions of `board`, stopping early once `cap` is reached.
///
/// The result is in `[0, cap]`; a return of `cap` means "at least `cap`".
/// With `cap = 2` this is the uniqueness oracle: `1` means exactly one
/// solution. The search walks a working copy, so `board` is untouched. Work
/// is bounded by the cap rather than by the total solution count, which for
/// a near-empty board is astronomically large.
///
/// # Errors
///
/// Returns [`DuplicateDigit`] if the input already violates a sudoku
/// constraint.
pub fn count_solutions(board: &Board, cap: usize) -> Result<usize, DuplicateDigit> {
    let masks = ConstraintMasks::from_board(board)?;
    if cap == 0 {
        return Ok(0);
    }
    let mut scratch = board.clone();
    let mut search = Search {
        board: &mut scratch,
        masks,
    };
    Ok(search.count_up_to(cap))
}

/// A board paired with its constraint masks, mutated and restored in place
/// during recursion. The two are kept in lock-step: every placement updates
/// both, every undo reverses both.
struct Search<'a> {
    board: &'a mut Board,
    masks: ConstraintMasks,
}

impl Search<'_> {
    /// Minimum-remaining-values cell selection.
    ///
    /// Scans every blank cell and returns the one with the fewest legal
    /// candidates, or `None` when the board is full. Cells with zero or one
    /// candidate short-circuit the scan: a zero-candidate cell is a
    /// guaranteed dead end and a one-candidate cell cannot be beaten. The
    /// heuristic is required for performance; plain left-to-right selection
    /// makes counting on a near-empty board combinatorially infeasible.
    fn select_cell(&self) -> Option<(Position, DigitSet)> {
        let mut best: Option<(Position, DigitSet)> = None;
        let mut best_len = u32::MAX;
        for pos in Position::all() {
            if self.board.get(pos).is_some() {
                continue;
            }
            let candidates = self.masks.candidates(pos);
            let len = candidates.len();
            if len <= 1 {
                return Some((pos, candidates));
            }
            if len < best_len {
                best_len = len;
                best = Some((pos, candidates));
            }
        }
        best
    }

    /// Places `digit` at `pos`, runs `nested`, then restores board and masks
    /// on every exit path.
    fn with_placed<T>(
        &mut self,
        pos: Position,
        digit: Digit,
        nested: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.board.set(pos, digit);
        self.masks.place(pos, digit);
        let result = nested(self);
        self.masks.unplace(pos, digit);
        self.board.clear(pos);
        result
    }

    /// "Find one" mode: randomized candidate order, first success wins.
    ///
    /// A successful branch keeps its placement so the solved board survives
    /// the unwind; only failed branches are undone.
    fn find_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some((pos, candidates)) = self.select_cell() else {
            return true;
        };
        let mut digits: Vec<Digit> = candidates.iter().collect();
        digits.shuffle(rng);
        for digit in digits {
            self.board.set(pos, digit);
            self.masks.place(pos, digit);
            if self.find_one(rng) {
                return true;
            }
            self.masks.unplace(pos, digit);
            self.board.clear(pos);
        }
        false
    }

    /// "Count" mode: ascending candidate order, early exit at `cap`.
    ///
    /// Each branch is budgeted with the remaining cap so no subtree does
    /// more work than the caller can observe.
    fn count_up_to(&mut self, cap: usize) -> usize {
        let Some((pos, candidates)) = self.select_cell() else {
            return 1;
        };
        let mut total = 0;
        for digit in candidates {
            total += self.with_placed(pos, digit, |search| search.count_up_to(cap - total));
            if total >= cap {
                break;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    fn rng(seed: u64) -> Pcg64 {
        Pcg64::seed_from_u64(seed)
    }

    #[test]
    fn solve_one_fills_an_empty_board() {
        let mut board = Board::new();
        assert!(solve_one(&mut board, &mut rng(0)).unwrap());
        assert!(board.is_solved());
    }

    #[test]
    fn solve_one_is_deterministic_for_a_fixed_rng_seed() {
        let mut a = Board::new();
        let mut b = Board::new();
        assert!(solve_one(&mut a, &mut rng(42)).unwrap());
        assert!(solve_one(&mut b, &mut rng(42)).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn solve_one_respects_existing_clues() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Digit::D5);
        board.set(Position::new(8, 8), Digit::D5);
        assert!(solve_one(&mut board, &mut rng(1)).unwrap());
        assert!(board.is_solved());
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(board.get(Position::new(8, 8)), Some(Digit::D5));
    }

    #[test]
    fn solve_one_rejects_duplicate_input() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Digit::D5);
        board.set(Position::new(0, 8), Digit::D5);
        assert!(solve_one(&mut board, &mut rng(0)).is_err());
    }

    #[test]
    fn solve_one_reports_contradiction_without_duplicates() {
        // Row 0 holds 1-8; the 9 for its last cell is blocked by the column.
        let mut board = Board::new();
        for (col, digit) in Digit::ALL[..8].iter().enumerate() {
            board.set(Position::new(0, col as u8), *digit);
        }
        board.set(Position::new(3, 8), Digit::D9);
        assert!(!solve_one(&mut board, &mut rng(0)).unwrap());
    }

    #[test]
    fn count_solutions_on_a_complete_board_is_one() {
        let board: Board = SOLVED.parse().unwrap();
        assert_eq!(count_solutions(&board, 2).unwrap(), 1);
    }

    #[test]
    fn count_solutions_hits_the_cap_on_an_empty_board() {
        let board = Board::new();
        assert_eq!(count_solutions(&board, 2).unwrap(), 2);
        assert_eq!(count_solutions(&board, 5).unwrap(), 5);
    }

    #[test]
    fn count_solutions_cap_zero_is_zero() {
        let board = Board::new();
        assert_eq!(count_solutions(&board, 0).unwrap(), 0);
    }

    #[test]
    fn count_solutions_leaves_the_input_untouched() {
        let mut board: Board = SOLVED.parse().unwrap();
        board.clear(Position::new(0, 0));
        board.clear(Position::new(4, 4));
        let before = board.clone();
        assert_eq!(count_solutions(&board, 2).unwrap(), 1);
        assert_eq!(board, before);
    }

    #[test]
    fn count_solutions_finds_zero_for_a_contradiction() {
        let mut board = Board::new();
        for (col, digit) in Digit::ALL[..8].iter().enumerate() {
            board.set(Position::new(0, col as u8), *digit);
        }
        board.set(Position::new(3, 8), Digit::D9);
        assert_eq!(count_solutions(&board, 2).unwrap(), 0);
    }

    #[test]
    fn count_solutions_detects_a_non_unique_board() {
        // Clearing every 1 and 2 leaves at least two completions: the
        // original grid and the grid with the labels 1 and 2 swapped.
        let mut board: Board = SOLVED.parse().unwrap();
        for pos in Position::all() {
            if matches!(board.get(pos), Some(Digit::D1 | Digit::D2)) {
                board.clear(pos);
            }
        }
        assert_eq!(count_solutions(&board, 2).unwrap(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn solve_one_from_empty_always_yields_a_unique_complete_grid(seed in any::<u64>()) {
            let mut board = Board::new();
            prop_assert!(solve_one(&mut board, &mut rng(seed)).unwrap());
            prop_assert!(board.is_solved());
            prop_assert_eq!(count_solutions(&board, 2).unwrap(), 1);
        }
    }
}
