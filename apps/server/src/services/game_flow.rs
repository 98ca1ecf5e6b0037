use tracing::{debug, info};

use crate::domain::game::{ListenOutcome, RelayOutcome};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

/// Relays one whisper. The game write lock is held across the whole
/// authorize → check → record → advance sequence so the relay is atomic.
pub fn whisper(
    state: &AppState,
    from_username: &str,
    api_key: &str,
    to_username: &str,
    message: String,
) -> Result<RelayOutcome, AppError> {
    debug!(
        from_username = %from_username,
        to_username = %to_username,
        api_key = %Redacted(api_key),
        "Relaying whisper"
    );

    // Lock order: roster before game, everywhere.
    let roster = state.roster.read();
    let mut game = state.game.write();
    let outcome = game.relay(&roster, from_username, api_key, to_username, message)?;

    info!(
        from_username = %from_username,
        to_username = %to_username,
        game_status = %outcome.status,
        "Whisper relayed"
    );
    Ok(outcome)
}

/// Reads the round from the caller's point of view. Shared locks only, so
/// concurrent listens observe a consistent snapshot.
pub fn listen(state: &AppState, username: &str, api_key: &str) -> Result<ListenOutcome, AppError> {
    debug!(
        username = %username,
        api_key = %Redacted(api_key),
        "Listening for a whisper"
    );

    let roster = state.roster.read();
    let game = state.game.read();
    Ok(game.listen(&roster, username, api_key)?)
}
