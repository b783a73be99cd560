//! Noughts - unified CLI.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::Settings;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            auto_reset_ms,
            mute,
            no_music,
        } => run_play(config, auto_reset_ms, mute, no_music).await,
        Command::Replay { moves, continuous } => run_replay(moves, continuous),
    }
}

/// Run the interactive terminal game.
async fn run_play(
    config: PathBuf,
    auto_reset_ms: Option<u64>,
    mute: bool,
    no_music: bool,
) -> Result<()> {
    let mut settings = Settings::load_or_default(&config)
        .with_context(|| format!("Failed to load settings from {}", config.display()))?;
    if let Some(ms) = auto_reset_ms {
        settings = settings.with_auto_reset_ms(ms);
    }
    if mute {
        settings = settings.with_sound(false);
    }
    if no_music {
        settings = settings.with_music(false);
    }

    tui::run_tui(settings).await
}

/// Replay moves headlessly and print the report.
#[instrument]
fn run_replay(moves: Vec<usize>, continuous: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let report = noughts::replay(&moves, continuous);

    for step in &report.steps {
        println!("{} -> {}", step.index, step.outcome);
    }
    println!("{}", report.snapshot.board.display());
    println!(
        "{}",
        report.to_json().context("Failed to serialize replay report")?
    );
    Ok(())
}
