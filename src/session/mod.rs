//! Turn-taking game loop
//!
//! A [`Session`] owns one player per side and a list of observers. Each call
//! to [`Session::run`] plays one game on a fresh board, X first.

pub mod observers;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use observers::{ConsoleObserver, Tally};

use crate::{
    Error, Result,
    players::PlayerKind,
    ports::{Observer, Player},
    tictactoe::{Board, Cell, Game, GameOutcome, Move, Side},
};

/// Pairing of player kinds, player 1 (X) first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    HumanVsMinimax,
    HumanVsRandom,
    MinimaxVsMinimax,
    RandomVsMinimax,
    RandomVsRandom,
}

impl GameMode {
    /// Modes offered by the interactive menu, in menu order
    pub const MENU: [GameMode; 4] = [
        GameMode::HumanVsHuman,
        GameMode::HumanVsMinimax,
        GameMode::HumanVsRandom,
        GameMode::MinimaxVsMinimax,
    ];

    /// Player kinds for X and O
    pub fn kinds(self) -> (PlayerKind, PlayerKind) {
        match self {
            GameMode::HumanVsHuman => (PlayerKind::Human, PlayerKind::Human),
            GameMode::HumanVsMinimax => (PlayerKind::Human, PlayerKind::Minimax),
            GameMode::HumanVsRandom => (PlayerKind::Human, PlayerKind::Random),
            GameMode::MinimaxVsMinimax => (PlayerKind::Minimax, PlayerKind::Minimax),
            GameMode::RandomVsMinimax => (PlayerKind::Random, PlayerKind::Minimax),
            GameMode::RandomVsRandom => (PlayerKind::Random, PlayerKind::Random),
        }
    }

    /// True when no human is involved
    pub fn is_computer_only(self) -> bool {
        let (x, o) = self.kinds();
        x.is_computer() && o.is_computer()
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs. Human",
            GameMode::HumanVsMinimax => "Human vs. Computer (Minimax)",
            GameMode::HumanVsRandom => "Human vs. Computer (Random)",
            GameMode::MinimaxVsMinimax => "Computer (Minimax) vs. Computer (Minimax)",
            GameMode::RandomVsMinimax => "Computer (Random) vs. Computer (Minimax)",
            GameMode::RandomVsRandom => "Computer (Random) vs. Computer (Random)",
        }
    }
}

/// One pairing of players, able to play any number of games
pub struct Session {
    player1: Box<dyn Player>,
    player2: Box<dyn Player>,
    observers: Vec<Box<dyn Observer>>,
    games_played: usize,
}

impl Session {
    /// Create a session; `player1` must play X and `player2` O.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the sides are not X then O.
    pub fn new(player1: Box<dyn Player>, player2: Box<dyn Player>) -> Result<Self> {
        if player1.side() != Side::X || player2.side() != Side::O {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "player 1 must play X and player 2 must play O (got {} and {})",
                    player1.side(),
                    player2.side()
                ),
            });
        }

        Ok(Self {
            player1,
            player2,
            observers: Vec::new(),
            games_played: 0,
        })
    }

    /// Build both players of a mode
    pub fn from_mode(mode: GameMode, seed: Option<u64>) -> Result<Self> {
        let (x, o) = mode.kinds();
        Self::new(x.build(Side::X, seed), o.build(Side::O, seed))
    }

    /// Add an observer
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Number of games finished by this session
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Play one game to completion on a fresh board.
    ///
    /// # Errors
    ///
    /// Propagates player and observer errors. A player that does not occupy
    /// exactly the cell it reports yields [`Error::IllegalMove`].
    pub fn run(&mut self) -> Result<Game> {
        let game_num = self.games_played;
        let mut board = Board::new();
        let mut game = Game::new();

        log::info!(
            "game {game_num}: {} vs {}",
            self.player1.name(),
            self.player2.name()
        );
        for observer in &mut self.observers {
            observer.on_game_start(game_num, &board)?;
        }

        let mut side = Side::X;
        let outcome = loop {
            if let Some(outcome) = GameOutcome::from_status(board.status()) {
                break outcome;
            }

            for observer in &mut self.observers {
                observer.on_turn(side)?;
            }

            let before = board;
            let player = match side {
                Side::X => &mut self.player1,
                Side::O => &mut self.player2,
            };
            let mv = player.play(&mut board)?;
            verify_move(&before, &board, side, mv)?;

            log::debug!("player {} ({side}) played {mv}", side.player_number());
            game.record(side, mv)?;
            for observer in &mut self.observers {
                observer.on_move(side, mv, &board)?;
            }

            side = side.opponent();
        };

        game.outcome = Some(outcome);
        self.games_played += 1;

        log::info!("game {game_num} finished after {} moves: {outcome}", game.len());
        for observer in &mut self.observers {
            observer.on_game_end(game_num, outcome)?;
        }

        Ok(game)
    }
}

/// Check that exactly the reported, previously empty cell changed to `side`
fn verify_move(before: &Board, after: &Board, side: Side, mv: Move) -> Result<()> {
    let illegal = || Error::IllegalMove {
        row: mv.row,
        column: mv.column,
    };
    let (row, column) = mv.to_index().ok_or_else(illegal)?;

    let placed = before.cell(row, column) == Some(Cell::Empty)
        && after.cell(row, column) == Some(side.to_cell());
    let mut expected = *before;
    expected.place(side, row, column);

    if placed && expected == *after {
        Ok(())
    } else {
        Err(illegal())
    }
}

/// Play `games` computer-only games and count the outcomes.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] for modes involving a human.
pub fn simulate(mode: GameMode, games: usize, seed: Option<u64>) -> Result<Tally> {
    if !mode.is_computer_only() {
        return Err(Error::InvalidConfiguration {
            message: format!("cannot simulate '{}': it needs a human", mode.label()),
        });
    }

    let mut session = Session::from_mode(mode, seed)?;
    let mut tally = Tally::default();
    for _ in 0..games {
        let game = session.run()?;
        if let Some(outcome) = game.outcome {
            tally.record(outcome);
        }
    }

    log::info!(
        "simulated {} games of {}: {} X wins, {} O wins, {} draws",
        tally.games,
        mode.label(),
        tally.x_wins,
        tally.o_wins,
        tally.draws
    );
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::players::{MinimaxPlayer, RandomPlayer};

    /// Records every event as a short string
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Observer for Recorder {
        fn on_game_start(&mut self, game_num: usize, board: &Board) -> Result<()> {
            self.0
                .borrow_mut()
                .push(format!("start {game_num} {}", board.encode()));
            Ok(())
        }

        fn on_move(&mut self, side: Side, mv: Move, _board: &Board) -> Result<()> {
            self.0.borrow_mut().push(format!("{side} {mv}"));
            Ok(())
        }

        fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
            self.0.borrow_mut().push(format!("end {game_num} {outcome}"));
            Ok(())
        }
    }

    /// Claims a move but writes somewhere else
    struct Cheater;

    impl Player for Cheater {
        fn side(&self) -> Side {
            Side::X
        }

        fn name(&self) -> &str {
            "cheater"
        }

        fn play(&mut self, board: &mut Board) -> Result<Move> {
            board.place(Side::X, 0, 0);
            Ok(Move::new(3, 3))
        }
    }

    #[test]
    fn minimax_self_play_is_a_draw() {
        let mut session = Session::from_mode(GameMode::MinimaxVsMinimax, None).unwrap();

        let game = session.run().unwrap();

        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(game.len(), 9);
        assert_eq!(game.moves[0].mv, Move::new(1, 1));
        assert_eq!(session.games_played(), 1);
    }

    #[test]
    fn sides_alternate_starting_with_x() {
        let mut session = Session::new(
            Box::new(RandomPlayer::with_seed(Side::X, 11)),
            Box::new(RandomPlayer::with_seed(Side::O, 12)),
        )
        .unwrap();

        let game = session.run().unwrap();

        for (i, played) in game.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Side::X } else { Side::O };
            assert_eq!(played.side, expected);
        }
    }

    #[test]
    fn observers_see_every_event() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::new(
            Box::new(MinimaxPlayer::new(Side::X)),
            Box::new(MinimaxPlayer::new(Side::O)),
        )
        .unwrap()
        .with_observer(Box::new(Recorder(Rc::clone(&log))));

        session.run().unwrap();

        let events = log.borrow();
        assert_eq!(events.len(), 11);
        assert_eq!(events[0], "start 0 .........");
        assert_eq!(events[1], "X 1|1");
        assert_eq!(events[10], "end 0 A draw!");
    }

    #[test]
    fn wrong_sides_are_rejected() {
        let result = Session::new(
            Box::new(MinimaxPlayer::new(Side::O)),
            Box::new(MinimaxPlayer::new(Side::X)),
        );
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn misreported_move_is_illegal() {
        let mut session =
            Session::new(Box::new(Cheater), Box::new(MinimaxPlayer::new(Side::O))).unwrap();

        assert!(matches!(
            session.run(),
            Err(Error::IllegalMove { row: 3, column: 3 })
        ));
    }

    #[test]
    fn simulate_rejects_human_modes() {
        assert!(simulate(GameMode::HumanVsRandom, 1, Some(1)).is_err());
    }

    #[test]
    fn simulate_random_games_counts_every_game() {
        let tally = simulate(GameMode::RandomVsRandom, 25, Some(5)).unwrap();

        assert_eq!(tally.games, 25);
        assert_eq!(tally.x_wins + tally.o_wins + tally.draws, 25);
        assert_eq!(tally, simulate(GameMode::RandomVsRandom, 25, Some(5)).unwrap());
    }
}
