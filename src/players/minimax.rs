//! Unbeatable computer player

use crate::{
    Result,
    ports::Player,
    search,
    tictactoe::{Board, Move, Side},
};

/// Plays [`search::best_move`] every turn
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
    side: Side,
}

impl MinimaxPlayer {
    pub fn new(side: Side) -> Self {
        Self {
            name: format!("Computer (Minimax) {side}"),
            side,
        }
    }
}

impl Player for MinimaxPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, board: &mut Board) -> Result<Move> {
        search::best_move(board, self.side)
    }
}
