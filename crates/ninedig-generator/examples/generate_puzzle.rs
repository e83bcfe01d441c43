//! Example demonstrating puzzle generation on the command line.
//!
//! Generates one or more puzzles and renders them as ASCII grids, with the
//! clue count and the seed that reproduces each puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Trade symmetry for more blanks, and show the solution:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --asymmetric --attempts 8 --solution
//! ```
//!
//! Generate a batch in parallel:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 4
//! ```

use std::process;

use clap::Parser;
use ninedig_core::{Board, Position};
use ninedig_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed (64 hex characters) for reproducible output.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Independent digging attempts per puzzle; the blankest result wins.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    attempts: u32,

    /// Disable 180-degree-symmetric digging.
    #[arg(long)]
    asymmetric: bool,

    /// Number of puzzles to generate (parallel when greater than one).
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Also print the solution grid.
    #[arg(long)]
    solution: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }
    if args.seed.is_some() && args.count > 1 {
        eprintln!("--seed reproduces a single puzzle; drop it or use --count 1.");
        process::exit(2);
    }

    let generator = PuzzleGenerator::new()
        .attempts(args.attempts)
        .symmetric(!args.asymmetric);

    let puzzles: Vec<GeneratedPuzzle> = match args.seed {
        Some(seed) => vec![generator.generate_with_seed(seed)],
        None => (0..args.count)
            .into_par_iter()
            .map(|_| generator.generate())
            .collect(),
    };

    for (i, puzzle) in puzzles.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_puzzle(puzzle, args.solution);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, show_solution: bool) {
    println!("Seed:   {}", puzzle.seed);
    println!(
        "Clues:  {} ({} blanks)",
        81 - puzzle.blanks(),
        puzzle.blanks()
    );
    println!();
    print_grid(&puzzle.problem);

    if show_solution {
        println!();
        println!("Solution:");
        print_grid(&puzzle.solution);
    }
}

fn print_grid(board: &Board) {
    for row in 0..9 {
        if row % 3 == 0 && row != 0 {
            println!("------+-------+------");
        }
        let mut line = String::new();
        for col in 0..9 {
            if col % 3 == 0 && col != 0 {
                line.push_str("| ");
            }
            match board.get(Position::new(row, col)) {
                Some(digit) => line.push_str(&digit.to_string()),
                None => line.push('.'),
            }
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}
