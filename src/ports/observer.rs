//! Observer port - watching games without coupling the loop to output

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Move, Side},
};

/// Observer trait for monitoring games
///
/// # Event Sequence
///
/// 1. `on_game_start(game_num, board)` - once, with the empty board
/// 2. For each turn:
///    - `on_turn(side)` - before the player is asked for a move
///    - `on_move(side, mv, board)` - after the move was placed
/// 3. `on_game_end(game_num, outcome)` - once the board is decided
///
/// All methods default to doing nothing.
pub trait Observer {
    fn on_game_start(&mut self, _game_num: usize, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn on_turn(&mut self, _side: Side) -> Result<()> {
        Ok(())
    }

    /// Called after a move was placed. `board` already contains it.
    fn on_move(&mut self, _side: Side, _mv: Move, _board: &Board) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }
}
