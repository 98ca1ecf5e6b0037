//! Domain layer: pure registry and game logic.

pub mod game;
pub mod player;
pub mod roster;

#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_roster;

// Re-exports for ergonomics
pub use game::{Delivery, Game, GameStatus, ListenOutcome, RelayOutcome};
pub use player::{Player, PlayerRole};
pub use roster::Roster;
