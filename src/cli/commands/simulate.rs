//! Simulate command - many computer-only games and an outcome tally

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::PlayConfig,
        output::{format_percent, print_section, print_stats_table},
    },
    session::{self, GameMode, Tally},
};

#[derive(Parser, Debug)]
#[command(about = "Play computer-only games and report the outcomes")]
pub struct SimulateArgs {
    /// Computer-only pairing (player 1 plays X and moves first)
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<GameMode>,

    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the tally as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SimulateArgs, config: &PlayConfig) -> Result<()> {
    let mode = args.mode.unwrap_or(config.mode);
    let games = args.games.unwrap_or(config.games);
    let seed = args.seed.or(config.seed);

    let tally = session::simulate(mode, games, seed)?;
    print_tally(mode, &tally);

    if let Some(path) = args.export {
        tally
            .save(&path)
            .with_context(|| format!("failed to export tally to {}", path.display()))?;
        println!("\nTally exported to: {}", path.display());
    }

    Ok(())
}

fn print_tally(mode: GameMode, tally: &Tally) {
    print_section(mode.label());

    let games = tally.games.to_string();
    let x_wins = format!("{} ({})", tally.x_wins, format_percent(tally.x_win_rate()));
    let o_wins = format!("{} ({})", tally.o_wins, format_percent(tally.o_win_rate()));
    let draws = format!("{} ({})", tally.draws, format_percent(tally.draw_rate()));

    print_stats_table(&[
        ("Games", games.as_str()),
        ("Player 1 (X) wins", x_wins.as_str()),
        ("Player 2 (O) wins", o_wins.as_str()),
        ("Draws", draws.as_str()),
    ]);
}
