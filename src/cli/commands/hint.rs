//! Hint command - minimax scores for every free cell of a position

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    search,
    tictactoe::{Board, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Score every free cell of a position with minimax")]
pub struct HintArgs {
    /// Board as 9 cells in row-major order (X, O, '.' for empty),
    /// e.g. "XX.|.O.|..."
    #[arg(long, short = 'b')]
    pub board: String,

    /// Side to move (`x` or `o`)
    #[arg(long, short = 's', default_value = "x")]
    pub side: String,
}

pub fn execute(args: HintArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board).context("invalid --board")?;
    let side = Side::parse(&args.side).context("invalid --side")?;

    let status = board.status();
    if status.is_terminal() {
        bail!("position is already decided ({status:?})");
    }

    print_section(&format!("Minimax scores for {side} to move"));
    println!("{board}");

    for (mv, score) in search::evaluate_moves(&mut board, side) {
        print_kv(&format!("row {} column {}", mv.row, mv.column), &score.to_string());
    }

    let best = search::best_move(&mut board, side)?;
    println!("\nBest move: {best}");
    Ok(())
}
