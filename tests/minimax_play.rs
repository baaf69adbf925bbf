//! Minimax behavior over whole games

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe::{
    players::{MinimaxPlayer, RandomPlayer},
    ports::Player,
    search,
    session::{GameMode, Session, Tally, simulate},
    tictactoe::{Board, Cell, GameOutcome, Move, Side, Status},
};

/// Play `plies` random legal moves from the empty board, stopping early
/// if the game is decided
fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Side) {
    let mut board = Board::new();
    let mut side = Side::X;
    for _ in 0..plies {
        if board.status().is_terminal() {
            break;
        }
        let empty = board.empty_cells();
        let (row, column) = empty[rng.random_range(0..empty.len())];
        board.place(side, row, column);
        side = side.opponent();
    }
    (board, side)
}

#[test]
fn best_move_occupies_exactly_one_empty_cell() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..60 {
        let plies = rng.random_range(2..8);
        let (start, side) = random_position(&mut rng, plies);
        if start.status().is_terminal() {
            continue;
        }

        let mut board = start;
        let mv = search::best_move(&mut board, side).unwrap();
        let (row, column) = mv.to_index().unwrap();

        assert_eq!(start.cell(row, column), Some(Cell::Empty));
        assert_eq!(board.cell(row, column), Some(side.to_cell()));

        let mut expected = start;
        assert!(expected.place(side, row, column));
        assert_eq!(board, expected);
    }
}

#[test]
fn best_move_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..20 {
        let (start, side) = random_position(&mut rng, 3);
        if start.status().is_terminal() {
            continue;
        }

        let mut first = start;
        let mut second = start;
        assert_eq!(
            search::best_move(&mut first, side).unwrap(),
            search::best_move(&mut second, side).unwrap()
        );
    }
}

#[test]
fn minimax_self_play_draws() {
    let tally = simulate(GameMode::MinimaxVsMinimax, 2, None).unwrap();
    assert_eq!(
        tally,
        Tally {
            games: 2,
            x_wins: 0,
            o_wins: 0,
            draws: 2,
        }
    );
}

#[test]
fn minimax_as_o_never_loses_to_random() {
    let tally = simulate(GameMode::RandomVsMinimax, 30, Some(1234)).unwrap();
    assert_eq!(tally.x_wins, 0);
    assert_eq!(tally.games, 30);
}

#[test]
fn minimax_as_x_never_loses_to_random() {
    for seed in 0..3 {
        let mut session = Session::new(
            Box::new(MinimaxPlayer::new(Side::X)),
            Box::new(RandomPlayer::with_seed(Side::O, seed)),
        )
        .unwrap();

        let game = session.run().unwrap();
        assert_ne!(game.outcome, Some(GameOutcome::Win(Side::O)));
    }
}

#[test]
fn minimax_punishes_a_missed_block() {
    // X took a corner, O answered on an edge; X can force a win.
    // X O .
    // . . .
    // . . .
    let mut board = Board::from_string("XO. ... ...").unwrap();
    let mut x = MinimaxPlayer::new(Side::X);
    let mut o = MinimaxPlayer::new(Side::O);

    while board.status() == Status::Running {
        let side = if board.occupied_count() % 2 == 0 {
            Side::X
        } else {
            Side::O
        };
        let player: &mut dyn Player = match side {
            Side::X => &mut x,
            Side::O => &mut o,
        };
        player.play(&mut board).unwrap();
    }

    assert_eq!(board.status(), Status::XWon);
}

#[test]
fn completes_and_blocks_top_row() {
    let mut win = Board::from_string("XX. ... ...").unwrap();
    assert_eq!(search::best_move(&mut win, Side::X).unwrap(), Move::new(1, 3));
    assert_eq!(win.status(), Status::XWon);

    let mut block = Board::from_string("OO. ... ...").unwrap();
    assert_eq!(
        search::best_move(&mut block, Side::X).unwrap(),
        Move::new(1, 3)
    );
}
