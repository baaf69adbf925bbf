//! Player implementations (adapters for the [`Player`] port)
//!
//! - [`HumanPlayer`] reads coordinates from the console
//! - [`RandomPlayer`] picks uniformly among free cells
//! - [`MinimaxPlayer`] plays the exhaustive minimax move

pub mod human;
pub mod minimax;
pub mod random;

use serde::{Deserialize, Serialize};

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use crate::{ports::Player, tictactoe::Side};

/// Kind of player controlling one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    /// Coordinates typed at the console
    Human,
    /// Uniformly random free cell
    Random,
    /// Exhaustive minimax search
    Minimax,
}

impl PlayerKind {
    /// Computer players need no console input
    pub fn is_computer(self) -> bool {
        !matches!(self, PlayerKind::Human)
    }

    /// Build a player of this kind for `side`.
    ///
    /// `seed` only affects random players; each side derives its own stream
    /// so two seeded random players do not mirror each other.
    pub fn build(self, side: Side, seed: Option<u64>) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::new(side)),
            PlayerKind::Random => match seed {
                Some(seed) => Box::new(RandomPlayer::with_seed(
                    side,
                    seed.wrapping_add(side.player_number() as u64),
                )),
                None => Box::new(RandomPlayer::new(side)),
            },
            PlayerKind::Minimax => Box::new(MinimaxPlayer::new(side)),
        }
    }
}
