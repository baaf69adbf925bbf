//! Play command - one game in a fixed mode

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::config::PlayConfig,
    session::{ConsoleObserver, GameMode, Session},
    tictactoe::Game,
};

#[derive(Parser, Debug)]
#[command(about = "Play a single game")]
pub struct PlayArgs {
    /// Pairing of players (player 1 plays X and moves first)
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<GameMode>,

    /// Random seed for computer (random) players
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs, config: &PlayConfig) -> Result<()> {
    let mode = args.mode.unwrap_or(config.mode);
    let seed = args.seed.or(config.seed);
    play_game(mode, seed)?;
    Ok(())
}

/// Play one game of `mode` with the console renderer attached
pub fn play_game(mode: GameMode, seed: Option<u64>) -> Result<Game> {
    let mut session = Session::from_mode(mode, seed)
        .with_context(|| format!("failed to set up '{}'", mode.label()))?
        .with_observer(Box::new(ConsoleObserver::new()));

    let game = session
        .run()
        .with_context(|| format!("game '{}' aborted", mode.label()))?;
    Ok(game)
}
