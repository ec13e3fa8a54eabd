//! Noughts - console noughts and crosses.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{
    DEFAULT_CONFIG_PATH, GameConfig, HeuristicPlayer, HumanPlayer, Orchestrator, Player, Seat,
    Side,
};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    initialize_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        human: None,
        config: None,
    }) {
        Command::Play { human, config } => run_play(human, config),
        Command::Watch => run_game(&GameConfig::default().with_human(Seat::None)),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration, apply overrides and play.
#[instrument]
fn run_play(human: Option<Seat>, config: Option<PathBuf>) -> Result<()> {
    let mut settings = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };
    if let Some(seat) = human {
        info!(%seat, "Overriding human seat");
        settings = settings.with_human(seat);
    }
    run_game(&settings)
}

#[instrument(skip(config), fields(human = %config.human()))]
fn run_game(config: &GameConfig) -> Result<()> {
    let human_side = config.human().side();
    let seat = |side: Side| -> Box<dyn Player> {
        if human_side == Some(side) {
            Box::new(HumanPlayer::console("you"))
        } else {
            Box::new(HeuristicPlayer::new(format!("computer ({})", side)))
        }
    };

    let mut orchestrator = Orchestrator::new(seat(Side::Cross), seat(Side::Nought), std::io::stdout())
        .echo_ai_moves(*config.echo_ai_moves());
    orchestrator.run()?;
    Ok(())
}
