use parking_lot::RwLock;

use crate::domain::game::Game;
use crate::domain::roster::Roster;

/// Application state containing shared resources.
///
/// Both halves sit behind their own lock: relays take the game write lock
/// for the whole authorize → check → record → advance sequence, listens take
/// read locks, registration takes the roster write lock. Lock order is
/// roster before game everywhere.
#[derive(Debug)]
pub struct AppState {
    /// Participant registry, admin included
    pub roster: RwLock<Roster>,
    /// The single whisper round for this process
    pub game: RwLock<Game>,
}

impl AppState {
    /// Create a new AppState over a seeded roster and a fresh round
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: RwLock::new(roster),
            game: RwLock::new(Game::new()),
        }
    }
}
