//! Command-line argument definitions for the cubik CLI.
//!
//! Defines the clap parser types shared between the binary entry point and
//! the [`crate::run`] dispatch function.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cubik", version, about = "Rubik's cube state and move engine")]
pub struct CubikCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a scramble sequence and print the resulting cube state
    Scramble {
        /// Number of moves (default: configured scramble_length)
        #[arg(long)]
        length: Option<usize>,
        /// RNG seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
        /// Probability of a double turn per move, within 0..=1
        #[arg(long)]
        double_chance: Option<f64>,
    },
    /// Apply a move sequence to a cube state
    Apply {
        /// Whitespace-separated move tokens, e.g. "R U R' U' F2"
        #[arg(long)]
        moves: String,
        /// Starting state as a 54-character facelet string (default: solved)
        #[arg(long)]
        state: Option<String>,
    },
    /// Check whether a cube state is solved
    Check {
        /// Cube state as a 54-character facelet string
        #[arg(long)]
        state: String,
    },
    /// Solve a cube state with the external solver
    Solve {
        /// Cube state as a 54-character facelet string
        #[arg(long)]
        state: String,
        /// Solver command line (default: configured solver)
        #[arg(long)]
        solver: Option<String>,
    },
    /// Display current configuration settings
    Cfg,
}
