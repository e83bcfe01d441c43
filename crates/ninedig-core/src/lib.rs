//! Core data model for the ninedig puzzle engine.
//!
//! This crate provides the fixed-size, copy-friendly types that every search
//! and generation component operates on:
//!
//! - [`digit`]: type-safe representation of the digits 1-9
//! - [`position`]: a (row, column) cell coordinate on the 9x9 board
//! - [`digit_set`]: a 9-bit set of digits packed into a `u16`
//! - [`board`]: the 9x9 board itself, with parsing and rendering
//! - [`masks`]: per-row/column/box occupancy masks used to derive legal
//!   candidates in O(1) during backtracking search
//!
//! # Examples
//!
//! ```
//! use ninedig_core::{Board, ConstraintMasks, Digit, Position};
//!
//! let mut board = Board::new();
//! board.set(Position::new(4, 4), Digit::D5);
//!
//! let masks = ConstraintMasks::from_board(&board)?;
//! // 5 is no longer a candidate anywhere in row 4.
//! assert!(!masks.candidates(Position::new(4, 7)).contains(Digit::D5));
//! # Ok::<(), ninedig_core::DuplicateDigit>(())
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod masks;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    masks::{ConstraintMasks, DuplicateDigit},
    position::Position,
};
