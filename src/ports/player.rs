//! Player port - the single capability shared by every kind of player

use crate::{
    Result,
    tictactoe::{Board, Move, Side},
};

/// Player trait - produce a move for the current board
///
/// Human, random and minimax players all implement this port. A player
/// owns exactly one side for the whole game.
///
/// # Examples
///
/// ```
/// use tictactoe::{
///     Result,
///     ports::Player,
///     tictactoe::{Board, Move, Side},
/// };
///
/// struct FirstFree(Side);
///
/// impl Player for FirstFree {
///     fn side(&self) -> Side {
///         self.0
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
///
///     fn play(&mut self, board: &mut Board) -> Result<Move> {
///         let (row, column) = board.empty_cells()[0];
///         board.place(self.0, row, column);
///         Ok(Move::from_index(row, column))
///     }
/// }
///
/// let mut board = Board::new();
/// let mv = FirstFree(Side::X).play(&mut board).unwrap();
/// assert_eq!(mv, Move::new(1, 1));
/// ```
pub trait Player {
    /// The side this player places
    fn side(&self) -> Side;

    /// Get the player's name.
    ///
    /// Used in logs and simulation summaries.
    fn name(&self) -> &str;

    /// Place this player's mark on the board.
    ///
    /// Implementations must occupy exactly one previously empty cell and
    /// return its 1-based coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (decided or full board,
    /// failed console prompt).
    fn play(&mut self, board: &mut Board) -> Result<Move>;
}
