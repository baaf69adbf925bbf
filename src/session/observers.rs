//! Observer implementations: console rendering and outcome tallies

use std::{
    io::{self, Stdout, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Move, Side},
};

/// Prints the board and turn messages the way the console game shows them
pub struct ConsoleObserver<W = Stdout> {
    out: W,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn on_game_start(&mut self, _game_num: usize, board: &Board) -> Result<()> {
        write!(self.out, "{board}")?;
        writeln!(self.out, "Player 1: X")?;
        writeln!(self.out, "Player 2: O")?;
        Ok(())
    }

    fn on_turn(&mut self, side: Side) -> Result<()> {
        writeln!(self.out, "Player {}'s turn", side.player_number())?;
        Ok(())
    }

    fn on_move(&mut self, side: Side, mv: Move, board: &Board) -> Result<()> {
        writeln!(self.out, "Player {}: {mv}", side.player_number())?;
        write!(self.out, "{board}")?;
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> Result<()> {
        writeln!(self.out, "{outcome}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Outcome counts over a series of games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Side::X) => self.x_wins += 1,
            GameOutcome::Win(Side::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games > 0 {
            count as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Save tally to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load tally from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let tally = serde_json::from_reader(file)?;
        Ok(tally)
    }
}
