//! Menu command - the interactive game-mode loop

use anyhow::Result;
use dialoguer::Select;

use crate::{cli::commands::play::play_game, session::GameMode};

const EXIT_LABEL: &str = "Exit Program";

/// Show the mode menu, play the chosen game and repeat until exit
pub fn execute(seed: Option<u64>) -> Result<()> {
    let mut items: Vec<&str> = GameMode::MENU.iter().map(|mode| mode.label()).collect();
    items.push(EXIT_LABEL);

    loop {
        let choice = Select::new()
            .with_prompt("Choose your game mode.")
            .items(&items)
            .default(0)
            .interact()?;

        let Some(&mode) = GameMode::MENU.get(choice) else {
            return Ok(());
        };

        if let Err(e) = play_game(mode, seed) {
            eprintln!("Error: {e:#}");
        }
    }
}
