//! Moves, outcomes and game records

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{DIMENSION, Side, Status};

/// A move as seen at the console: 1-based row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    /// Create a move from 1-based coordinates
    pub fn new(row: usize, column: usize) -> Self {
        Move { row, column }
    }

    /// Create a move from 0-based board indices
    pub fn from_index(row: usize, column: usize) -> Self {
        Move {
            row: row + 1,
            column: column + 1,
        }
    }

    /// 0-based board indices, `None` if the move lies outside the board
    pub fn to_index(self) -> Option<(usize, usize)> {
        let row = self.row.checked_sub(1)?;
        let column = self.column.checked_sub(1)?;
        (row < DIMENSION && column < DIMENSION).then_some((row, column))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.row, self.column)
    }
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Side),
    Draw,
}

impl GameOutcome {
    /// Outcome for a terminal status, `None` while the game is running
    pub fn from_status(status: Status) -> Option<Self> {
        match status {
            Status::XWon => Some(GameOutcome::Win(Side::X)),
            Status::OWon => Some(GameOutcome::Win(Side::O)),
            Status::Draw => Some(GameOutcome::Draw),
            Status::Running => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(side) => {
                write!(f, "Winner is: Player {} ({side})", side.player_number())
            }
            GameOutcome::Draw => write!(f, "A draw!"),
        }
    }
}

/// A move together with the side that made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub side: Side,
    pub mv: Move,
}

/// A finished game with its history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<PlayedMove>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move
    pub fn record(&mut self, side: Side, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }
        self.moves.push(PlayedMove { side, mv });
        Ok(())
    }

    /// Number of moves played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
