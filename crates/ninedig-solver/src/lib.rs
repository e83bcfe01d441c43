//! Backtracking search over sudoku boards.
//!
//! This crate implements the one algorithmically interesting piece of
//! ninedig: a recursive backtracking search with minimum-remaining-values
//! cell selection, exposed in two query modes that share the same
//! mutate-and-restore skeleton:
//!
//! - [`solve_one`] fills a board with the first solution found, exploring
//!   candidate digits in an order shuffled by an injected [`rand::Rng`] so
//!   repeated runs produce varied completions.
//! - [`count_solutions`] counts solutions exhaustively but stops the moment
//!   a caller-supplied cap is reached, which is what makes it usable as a
//!   uniqueness oracle (cap 2) inside a puzzle digger's inner loop.
//!
//! # Examples
//!
//! ```
//! use ninedig_core::Board;
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//!
//! let mut board = Board::new();
//! let mut rng = Pcg64::seed_from_u64(7);
//! assert!(ninedig_solver::solve_one(&mut board, &mut rng)?);
//! assert!(board.is_solved());
//! assert_eq!(ninedig_solver::count_solutions(&board, 2)?, 1);
//! # Ok::<(), ninedig_core::DuplicateDigit>(())
//! ```

pub use self::search::{count_solutions, solve_one};

mod search;
