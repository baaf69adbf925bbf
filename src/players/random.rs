//! Random computer player (baseline)

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Player,
    tictactoe::{Board, Move, Side},
};

/// Draws a row and a column uniformly and retries until the cell is free
pub struct RandomPlayer {
    name: String,
    side: Side,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player
    pub fn new(side: Side) -> Self {
        Self::with_seed(side, random())
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            name: format!("Computer (Random) {side}"),
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn play(&mut self, board: &mut Board) -> Result<Move> {
        if board.status().is_terminal() {
            return Err(Error::GameOver);
        }

        let dimension = board.dimension();
        loop {
            let mv = Move::new(
                self.rng.random_range(1..=dimension),
                self.rng.random_range(1..=dimension),
            );
            if board.place_at(self.side, mv) {
                return Ok(mv);
            }
        }
    }
}
