//! Command-line interface for strictly_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Grid - N×N tic-tac-toe with a scripted outcome harness
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "N×N grid game with win/draw verification", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal, entering moves as `row column`
    Play {
        /// Board size (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to a game config TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play both sides automatically to force an outcome and check it
    Synth {
        /// Path to a harness settings TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board size
        #[arg(short, long)]
        size: Option<usize>,

        /// Player expected to win (1 or 2)
        #[arg(short, long)]
        winner: Option<u8>,

        /// Force a draw
        #[arg(long)]
        draw: bool,

        /// Force a win on this row (0-based)
        #[arg(long)]
        row: Option<usize>,

        /// Force a win on this column (0-based)
        #[arg(long)]
        column: Option<usize>,

        /// Force a win on the top-left to bottom-right diagonal
        #[arg(long)]
        left_diagonal: bool,

        /// Force a win on the top-right to bottom-left diagonal
        #[arg(long)]
        right_diagonal: bool,

        /// Milliseconds between moves
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Print the move history as JSON when done
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Whether any target flag was given on the command line.
    pub fn has_target_flags(&self) -> bool {
        match self {
            Command::Synth {
                draw,
                row,
                column,
                left_diagonal,
                right_diagonal,
                ..
            } => *draw || row.is_some() || column.is_some() || *left_diagonal || *right_diagonal,
            Command::Play { .. } => false,
        }
    }
}
