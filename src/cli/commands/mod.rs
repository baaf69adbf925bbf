//! Subcommands of the `tictactoe` binary

pub mod hint;
pub mod menu;
pub mod play;
pub mod simulate;
