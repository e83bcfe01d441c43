//! Full-grid generation, blank digging, and orchestration.

use log::{debug, info, trace};
use ninedig_core::{Board, Digit, Position};
use ninedig_solver::{count_solutions, solve_one};
use rand::{Rng, seq::SliceRandom as _};

use crate::seed::PuzzleSeed;

/// Generates a complete, valid solution grid.
///
/// Runs the randomized "find one" search on an empty board. Every sudoku
/// constraint graph is satisfiable from empty, so this cannot fail for
/// correct constraint arithmetic.
///
/// # Panics
///
/// Panics if the search reports failure; that signals a bug in the mask
/// bookkeeping, not a recoverable runtime condition.
pub fn generate_full<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::new();
    let solved = solve_one(&mut board, rng).expect("an empty board has no duplicate digits");
    assert!(solved, "search failed to fill an empty board");
    board
}

/// Digs blanks into a complete solution while preserving uniqueness.
///
/// Visits all 81 cells in an order shuffled by `rng`. Each visit targets the
/// cell alone, or together with its 180-degree partner when `symmetric` is
/// set (the center cell is its own partner and stays a singleton removal).
/// The targets are cleared and the removal kept only if the solution counter,
/// capped at 2, still reports exactly one solution; otherwise the recorded
/// digits are put back and digging moves on.
///
/// The single greedy pass does not maximize the number of blanks, but every
/// board it returns is guaranteed to have exactly one solution.
pub fn dig<R: Rng + ?Sized>(solution: &Board, rng: &mut R, symmetric: bool) -> Board {
    let mut puzzle = solution.clone();
    let mut order: Vec<Position> = Position::all().collect();
    order.shuffle(rng);

    for pos in order {
        let pair = [pos, pos.mirrored()];
        let targets: &[Position] = if symmetric && pair[0] != pair[1] {
            &pair
        } else {
            &pair[..1]
        };

        let removed: Vec<(Position, Digit)> = targets
            .iter()
            .filter_map(|&target| puzzle.get(target).map(|digit| (target, digit)))
            .collect();
        if removed.is_empty() {
            continue;
        }
        for &(target, _) in &removed {
            puzzle.clear(target);
        }

        let count = count_solutions(&puzzle, 2).expect("digging only removes digits");
        if count == 1 {
            trace!("removed {} cell(s) at {pos}", removed.len());
        } else {
            for &(target, digit) in &removed {
                puzzle.set(target, digit);
            }
        }
    }

    debug!("dug {} blanks (symmetric: {symmetric})", puzzle.blank_count());
    puzzle
}

/// A generated puzzle together with its unique solution and the seed that
/// reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle board; blanks are the cells to solve.
    pub problem: Board,
    /// The complete solution the puzzle was dug from.
    pub solution: Board,
    /// The seed that regenerates this exact puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the number of blank cells in the problem.
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.problem.blank_count()
    }

    /// Returns the row-major mask of given (clue) cells, for presentation
    /// layers that render clues differently from player digits.
    #[must_use]
    pub fn given_mask(&self) -> [bool; 81] {
        self.problem.given_mask()
    }
}

/// Puzzle generation pipeline: solution grid, digging, best-of-N attempts.
///
/// Each attempt derives its own random stream from the run seed, generates a
/// fresh solution, digs it, and the attempt with the most blanks wins. The
/// result is a pure function of `(seed, attempts, symmetric)`.
///
/// # Examples
///
/// ```
/// use ninedig_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new().attempts(2).symmetric(false);
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let puzzle = generator.generate_with_seed(seed);
/// assert_eq!(puzzle, generator.generate_with_seed(seed));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    attempts: u32,
    symmetric: bool,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self {
            attempts: 5,
            symmetric: true,
        }
    }
}

impl PuzzleGenerator {
    /// Creates a generator with the default settings: five attempts,
    /// symmetric digging.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of independent generation attempts.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is zero.
    #[must_use]
    pub fn attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "at least one attempt is required");
        self.attempts = attempts;
        self
    }

    /// Enables or disables 180-degree-symmetric digging.
    ///
    /// Symmetric removal trades a few blanks for visual symmetry.
    #[must_use]
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut best: Option<GeneratedPuzzle> = None;
        for attempt in 0..self.attempts {
            let mut rng = seed.attempt_seed(attempt).rng();
            let solution = generate_full(&mut rng);
            let problem = dig(&solution, &mut rng, self.symmetric);
            debug!("attempt {attempt}: {} blanks", problem.blank_count());

            if best
                .as_ref()
                .is_none_or(|best| problem.blank_count() > best.blanks())
            {
                best = Some(GeneratedPuzzle {
                    problem,
                    solution,
                    seed,
                });
            }
        }

        let puzzle = best.expect("attempts is at least one");
        info!(
            "generated puzzle with {} blanks from seed {}",
            puzzle.blanks(),
            puzzle.seed
        );
        puzzle
    }
}
