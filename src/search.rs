//! Exhaustive minimax search over a shared, in-place mutated board.
//!
//! Every candidate is placed, scored recursively and removed again, so a
//! search leaves the board exactly as it found it (apart from the move
//! [`best_move`] finally plays). There is no pruning and no cache: the whole
//! game tree below the current position is walked on every call.

use crate::{
    Error, Result,
    tictactoe::{Board, DIMENSION, Move, Side, Status},
};

/// Score of a position won by the root side
pub const WIN_SCORE: i32 = 10;
/// Score of a position won by the root side's opponent
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// Choose and play the best move for `side`.
///
/// Candidates are tried in row-major order and a later candidate only
/// replaces the current best when it scores strictly higher, so among equally
/// good moves the earliest one wins. The chosen mark stays on the board and
/// the move is returned with 1-based coordinates.
///
/// # Errors
///
/// Returns [`Error::GameOver`] if the board is already decided.
pub fn best_move(board: &mut Board, side: Side) -> Result<Move> {
    if board.status().is_terminal() {
        return Err(Error::GameOver);
    }

    let mut best_score = i32::MIN;
    let mut best = None;

    for row in 0..DIMENSION {
        for column in 0..DIMENSION {
            if !board.place(side, row, column) {
                continue;
            }
            let value = score(board, side, false);
            board.remove(row, column);

            if value > best_score {
                best_score = value;
                best = Some((row, column));
            }
        }
    }

    let (row, column) = best.ok_or(Error::NoValidMoves)?;
    board.place(side, row, column);

    let mv = Move::from_index(row, column);
    log::debug!("minimax picks {mv} for {side} (score {best_score})");
    Ok(mv)
}

/// Score every empty cell for `side` to move, in row-major order.
///
/// The board is restored before returning.
pub fn evaluate_moves(board: &mut Board, side: Side) -> Vec<(Move, i32)> {
    let mut moves = Vec::with_capacity(DIMENSION * DIMENSION);

    for row in 0..DIMENSION {
        for column in 0..DIMENSION {
            if !board.place(side, row, column) {
                continue;
            }
            let value = score(board, side, false);
            board.remove(row, column);
            moves.push((Move::from_index(row, column), value));
        }
    }

    moves
}

/// Minimax value of the current position from `root`'s point of view.
///
/// `maximizing` is true when `root` is to move. Terminal positions score
/// [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`] regardless of depth.
pub fn score(board: &mut Board, root: Side, maximizing: bool) -> i32 {
    match board.status() {
        Status::Running => {}
        Status::Draw => return DRAW_SCORE,
        decided => {
            return if decided.winner() == Some(root) {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
        }
    }

    let mover = if maximizing { root } else { root.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for row in 0..DIMENSION {
        for column in 0..DIMENSION {
            // occupied
            if !board.place(mover, row, column) {
                continue;
            }
            let value = score(board, root, !maximizing);
            board.remove(row, column);

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn completes_winning_line() {
        let mut board = Board::from_string("XX. ... ...").unwrap();

        let mv = best_move(&mut board, Side::X).unwrap();

        assert_eq!(mv, Move::new(1, 3));
        assert_eq!(board.status(), Status::XWon);
    }

    #[test]
    fn blocks_opponent_line() {
        let mut board = Board::from_string("OO. ... ...").unwrap();

        let mv = best_move(&mut board, Side::X).unwrap();

        assert_eq!(mv, Move::new(1, 3));
        assert_eq!(board.cell(0, 2), Some(Cell::X));
    }

    #[test]
    fn blocks_when_block_is_last_in_scan_order() {
        // X . .
        // . . X
        // O O .
        let mut board = Board::from_string("X.. ..X OO.").unwrap();

        let mv = best_move(&mut board, Side::X).unwrap();

        assert_eq!(mv, Move::new(3, 3));
    }

    #[test]
    fn equal_wins_keep_earliest_move() {
        // . . .
        // X X .
        // O O .
        // Both (2,3) and (3,3) win for X; no depth decay makes them equal.
        let mut board = Board::from_string("... XX. OO.").unwrap();

        let scores = evaluate_moves(&mut board, Side::X);
        assert!(scores.contains(&(Move::new(2, 3), WIN_SCORE)));
        assert!(scores.contains(&(Move::new(3, 3), WIN_SCORE)));

        let mv = best_move(&mut board, Side::X).unwrap();
        assert_eq!(mv, Move::new(2, 3));
    }

    #[test]
    fn opening_move_is_top_left() {
        let mut board = Board::new();

        let scores = evaluate_moves(&mut board, Side::X);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, value)| value == DRAW_SCORE));
        assert_eq!(board, Board::new());

        assert_eq!(best_move(&mut board, Side::X).unwrap(), Move::new(1, 1));
    }

    #[test]
    fn best_move_changes_exactly_one_cell() {
        let start = Board::from_string("X.. .O. ..X").unwrap();
        let mut board = start;

        let mv = best_move(&mut board, Side::O).unwrap();
        let (row, column) = mv.to_index().unwrap();

        assert_eq!(start.cell(row, column), Some(Cell::Empty));
        assert_eq!(board.cell(row, column), Some(Cell::O));
        assert_eq!(board.occupied_count(), start.occupied_count() + 1);
        for r in 0..DIMENSION {
            for c in 0..DIMENSION {
                if (r, c) != (row, column) {
                    assert_eq!(board.cell(r, c), start.cell(r, c));
                }
            }
        }
    }

    #[test]
    fn score_restores_board() {
        let start = Board::from_string("X.O ... ...").unwrap();
        let mut board = start;

        score(&mut board, Side::X, true);
        score(&mut board, Side::O, false);

        assert_eq!(board, start);
    }

    #[test]
    fn terminal_scores_ignore_depth() {
        let mut won = Board::from_string("OOO XX. X..").unwrap();
        assert_eq!(score(&mut won, Side::O, true), WIN_SCORE);
        assert_eq!(score(&mut won, Side::X, false), LOSS_SCORE);

        let mut drawn = Board::from_string("XOX XOO OXX").unwrap();
        assert_eq!(score(&mut drawn, Side::X, true), DRAW_SCORE);
    }

    #[test]
    fn deterministic_choice() {
        let start = Board::from_string("... .X. ...").unwrap();

        let mut first = start;
        let mut second = start;
        assert_eq!(
            best_move(&mut first, Side::O).unwrap(),
            best_move(&mut second, Side::O).unwrap()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn decided_board_is_rejected() {
        let mut board = Board::from_string("XXX OO. ...").unwrap();
        let before = board;

        assert!(matches!(
            best_move(&mut board, Side::O),
            Err(Error::GameOver)
        ));
        assert_eq!(board, before);
    }
}
