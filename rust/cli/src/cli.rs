//! Command-line argument definitions for the `focus` binary.

use clap::{Parser, Subcommand};

/// Top-level parser for `focus`.
#[derive(Parser, Debug)]
#[command(
    name = "focus",
    version,
    about = "Focus/Domination rules engine CLI",
    long_about = "Drive a two-player game of Focus from the terminal: print the board, \
                  apply move scripts and inspect configuration."
)]
pub struct FocusCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the starting board for the configured players
    Board,
    /// Apply move commands read from a script file or stdin
    Play {
        /// Script file with one command per line (defaults to stdin)
        #[arg(long)]
        script: Option<String>,
        /// Also print every applied move as a JSON line
        #[arg(long)]
        jsonl: bool,
    },
    /// Show the resolved configuration and the source of each value
    Cfg,
}
