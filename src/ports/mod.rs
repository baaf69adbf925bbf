//! Ports (trait boundaries) between the game core and the outside world.
//!
//! Players decide moves, observers watch games. Both are owned by the
//! session and implemented by adapters.

pub mod observer;
pub mod player;

pub use observer::Observer;
pub use player::Player;
