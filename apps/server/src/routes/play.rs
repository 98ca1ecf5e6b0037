//! Whisper-round HTTP routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{Delivery, GameStatus, ListenOutcome};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::game_flow;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct WhisperRequest {
    pub from_username: String,
    pub api_key: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct WhisperResponse {
    info: String,
    game_status: GameStatus,
}

#[derive(Debug, Deserialize)]
pub struct ListenQuery {
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListenResponse {
    info: String,
    message: Delivery,
    game_status: GameStatus,
    current_player: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_player: Option<String>,
}

/// Body for a listen that lands while someone else holds the turn.
/// Informational, deliberately not a problem document.
#[derive(Debug, Serialize)]
struct NotYourTurnResponse {
    info: String,
    game_status: GameStatus,
    current_player: String,
}

/// POST /play/whisper/{to_username}
///
/// Relays one whisper from the authenticated sender to the participant
/// named in the path.
async fn whisper(
    path: web::Path<String>,
    state: web::Data<AppState>,
    body: ValidatedJson<WhisperRequest>,
) -> Result<HttpResponse, AppError> {
    let to_username = path.into_inner();
    let payload = body.into_inner();

    let outcome = game_flow::whisper(
        &state,
        &payload.from_username,
        &payload.api_key,
        &to_username,
        payload.message,
    )?;

    Ok(HttpResponse::Ok().json(WhisperResponse {
        info: outcome.info,
        game_status: outcome.status,
    }))
}

/// GET /play/listen/{username}?api_key=…
///
/// Fetches the whisper held for the path username. A missing api_key is
/// treated as an empty one and fails authorization.
async fn listen(
    path: web::Path<String>,
    query: web::Query<ListenQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let api_key = query.into_inner().api_key.unwrap_or_default();

    match game_flow::listen(&state, &username, &api_key)? {
        ListenOutcome::YourTurn {
            delivery,
            status,
            next_player,
        } => {
            let info = match &next_player {
                Some(next) => format!("Hey {username}, it's your turn to whisper to {next}"),
                None => format!("Hey {username}, the round is over"),
            };

            Ok(HttpResponse::Ok().json(ListenResponse {
                info,
                message: delivery,
                game_status: status,
                current_player: username,
                next_player,
            }))
        }
        ListenOutcome::NotYourTurn {
            current_player,
            status,
        } => Ok(HttpResponse::NotFound().json(NotYourTurnResponse {
            info: "Sorry, it's not your turn.".to_string(),
            game_status: status,
            current_player,
        })),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/whisper/{to_username}").route(web::post().to(whisper)));
    cfg.service(web::resource("/listen/{username}").route(web::get().to(listen)));
}
