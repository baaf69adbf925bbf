//! Console Tic Tac Toe with human, random and minimax players
//!
//! This crate provides:
//! - The 3x3 board with win/draw evaluation and place/remove primitives
//! - Exhaustive minimax search (no pruning, row-major tie-break)
//! - Player implementations behind a single `Player` port
//! - A turn-taking session loop with observers
//! - The CLI behind the `tictactoe` binary

pub mod cli;
pub mod error;
pub mod players;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::best_move;
pub use tictactoe::{Board, Cell, Move, Side, Status};
