//! Gobang - two-player gomoku in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gobang::{
    init_file_logging, init_stderr_logging, parse_steps, run_script, run_tui, Cli, Command,
    GameConfig,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let config = cli
        .apply(config)
        .context("Invalid command-line override")?
        .validate()
        .context("Invalid settings")?;

    match cli.command.clone().unwrap_or_default() {
        Command::Play { .. } => run_play(&config),
        Command::Script { steps } => run_headless(&config, &steps),
    }
}

/// Run the terminal UI
fn run_play(config: &GameConfig) -> Result<()> {
    init_file_logging(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    run_tui(config)
}

/// Run a scripted game and print the result
fn run_headless(config: &GameConfig, steps: &[String]) -> Result<()> {
    init_stderr_logging();
    let steps = parse_steps(steps)?;
    info!(count = steps.len(), size = %config.board_size(), "Running script");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_script(*config.board_size(), &steps, &mut out).context("Failed to write output")?;
    Ok(())
}
