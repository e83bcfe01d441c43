//! Sudoku puzzle generation with a guaranteed unique solution.
//!
//! Generation is a two-stage pipeline:
//!
//! 1. [`generate_full`] fills an empty board with a random complete solution
//!    using the randomized backtracking search from `ninedig-solver`.
//! 2. [`dig`] empties cells from that solution in a shuffled order, keeping a
//!    removal only if the bounded solution counter still reports exactly one
//!    solution. Optionally removals happen in 180-degree-symmetric pairs.
//!
//! [`PuzzleGenerator`] orchestrates the pipeline: it runs several independent
//! attempts from a [`PuzzleSeed`] and keeps the attempt with the most blanks.
//! All randomness flows from the seed, so a (seed, attempts, symmetric)
//! triple always reproduces the same puzzle.
//!
//! # Examples
//!
//! ```no_run
//! use ninedig_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().attempts(3).generate();
//! println!("{} blanks, seed {}", puzzle.blanks(), puzzle.seed);
//! assert!(puzzle.solution.is_solved());
//! ```

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator, dig, generate_full},
    seed::{ParseSeedError, PuzzleSeed},
};

mod generator;
mod seed;
