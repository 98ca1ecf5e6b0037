//! Registry HTTP routes.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::domain::{Player, PlayerRole};
use crate::error::AppError;
use crate::services::users;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: u32,
    pub user: String,
    #[serde(rename = "type")]
    pub type_: PlayerRole,
    pub created_on: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl UserResponse {
    /// Public view. Never carries the api key.
    pub fn public(player: &Player) -> Self {
        Self {
            id: player.id,
            user: player.username.clone(),
            type_: player.role,
            created_on: format_created_on(player.created_on),
            api_key: None,
        }
    }

    /// Registration view. The one payload that discloses the api key.
    pub fn with_api_key(player: &Player) -> Self {
        Self {
            api_key: Some(player.api_key.clone()),
            ..Self::public(player)
        }
    }
}

fn format_created_on(created_on: OffsetDateTime) -> String {
    let format = format_description!("[month]/[day]/[year] [hour]:[minute]:[second]");
    created_on
        .format(&format)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// PUT /users/{username}
///
/// Registers a participant under the path username and returns the full
/// record, freshly minted api key included.
async fn register(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let player = users::register_user(&state, &username)?;

    Ok(HttpResponse::Ok().json(UserResponse::with_api_key(&player)))
}

/// GET /users/{username}
///
/// Looks up a registered participant. The api key is never echoed here.
async fn lookup(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let player = users::get_user(&state, &username)?;

    Ok(HttpResponse::Ok().json(UserResponse::public(&player)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{username}")
            .route(web::put().to(register))
            .route(web::get().to(lookup)),
    );
}
