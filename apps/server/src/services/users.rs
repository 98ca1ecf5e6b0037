use tracing::{debug, info};

use crate::domain::player::{validate_username, Player};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Registers a new participant and returns the full record, api key
/// included. Registration is the only place the key is ever disclosed.
pub fn register_user(state: &AppState, username: &str) -> Result<Player, AppError> {
    validate_username(username)?;

    let mut roster = state.roster.write();
    let player = roster.register(username)?.clone();

    info!(
        player_id = player.id,
        username = %player.username,
        "User registered"
    );
    Ok(player)
}

/// Looks up a participant by name. The caller must not expose the api key.
pub fn get_user(state: &AppState, username: &str) -> Result<Player, AppError> {
    debug!(username = %username, "User lookup");

    let roster = state.roster.read();
    Ok(roster.get(username)?.clone())
}
