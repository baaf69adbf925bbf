//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, DIMENSION, Side, Status};
pub use game::{Game, GameOutcome, Move, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
