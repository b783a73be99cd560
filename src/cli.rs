//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - terminal tic-tac-toe with sound cues and running scores
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with sound cues and running scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the settings file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "noughts.toml")]
        config: std::path::PathBuf,

        /// Delay before a finished round resets itself, in milliseconds
        #[arg(long)]
        auto_reset_ms: Option<u64>,

        /// Start with sound cues off
        #[arg(long)]
        mute: bool,

        /// Start with music off
        #[arg(long)]
        no_music: bool,
    },

    /// Replay a list of board indices (0-8) and print the result as JSON
    Replay {
        /// Board indices in play order
        #[arg(required = true, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// Start a new round whenever one finishes, carrying scores forward
        #[arg(long)]
        continuous: bool,
    },
}
