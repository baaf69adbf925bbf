//! Tic Tac Toe on the console
//!
//! Without a subcommand the interactive menu runs until "Exit Program" is
//! chosen.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tictactoe::cli::{self, commands, config::PlayConfig};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic Tac Toe against humans or the computer", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// JSON file with defaults for mode, seed and games
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a game mode from a menu, repeatedly (default)
    Menu,

    /// Play a single game
    Play(commands::play::PlayArgs),

    /// Score every free cell of a position
    Hint(commands::hint::HintArgs),

    /// Play computer-only games and report the outcomes
    Simulate(commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => PlayConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PlayConfig::default(),
    };

    match args.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::execute(config.seed),
        Commands::Play(play) => commands::play::execute(play, &config),
        Commands::Hint(hint) => commands::hint::execute(hint),
        Commands::Simulate(simulate) => commands::simulate::execute(simulate, &config),
    }
}
