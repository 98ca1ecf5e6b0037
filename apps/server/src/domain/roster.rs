//! Identity registry: every participant, admin included, lives here.

use std::collections::HashMap;

use rand::distr::Alphanumeric;
use rand::Rng;
use time::OffsetDateTime;

use crate::domain::player::{Player, PlayerRole, ADMIN_USERNAME};
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, NotFoundKind, UnauthorizedKind,
};

/// Length of generated api keys.
pub const API_KEY_LEN: usize = 30;

/// The participant registry.
///
/// Players are stored densely by id (`players[id]`), so the vector index is
/// the id: the admin occupies slot 0 and ids are handed out by push order.
/// A failed registration never pushes, so ids are never burned or reused.
#[derive(Debug)]
pub struct Roster {
    players: Vec<Player>,
    by_name: HashMap<String, u32>,
}

impl Roster {
    /// Creates a registry holding only the built-in admin (id 0).
    pub fn new(admin_api_key: impl Into<String>) -> Self {
        let mut roster = Self {
            players: Vec::new(),
            by_name: HashMap::new(),
        };
        roster.push(ADMIN_USERNAME.to_string(), PlayerRole::Admin, admin_api_key.into());
        roster
    }

    /// Adds a pre-registered regular player with the next sequential id.
    ///
    /// Boot-time only: the roster file loader has already validated the
    /// username and api key, and feeds entries in id order.
    pub fn seed(&mut self, username: impl Into<String>, api_key: impl Into<String>) -> &Player {
        self.push(username.into(), PlayerRole::Regular, api_key.into())
    }

    /// Registers a new participant, minting a fresh api key.
    ///
    /// The reserved admin name is rejected unconditionally; an existing name
    /// conflicts. Neither failure mutates the registry.
    pub fn register(&mut self, username: &str) -> Result<&Player, DomainError> {
        if username == ADMIN_USERNAME {
            return Err(DomainError::forbidden(
                ForbiddenKind::ReservedUsername,
                format!("The username '{ADMIN_USERNAME}' is reserved"),
            ));
        }
        if self.by_name.contains_key(username) {
            return Err(DomainError::conflict(
                ConflictKind::UsernameTaken,
                format!("User {username} already exists"),
            ));
        }
        Ok(self.push(username.to_string(), PlayerRole::Regular, generate_api_key()))
    }

    pub fn find(&self, username: &str) -> Option<&Player> {
        self.by_name
            .get(username)
            .map(|&id| &self.players[id as usize])
    }

    pub fn get(&self, username: &str) -> Result<&Player, DomainError> {
        self.find(username).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::User,
                format!("User {username} does not exist. Register with PUT /users/{username}"),
            )
        })
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn get_by_id(&self, id: u32) -> Result<&Player, DomainError> {
        self.find_by_id(id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("No user with id {id}")))
    }

    /// Total participants, admin included.
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Resolves a participant and checks their api key.
    ///
    /// The supplied key is never echoed back in the error detail.
    pub fn authorize(&self, username: &str, api_key: &str) -> Result<&Player, DomainError> {
        let player = self.get(username)?;
        if player.api_key != api_key {
            return Err(DomainError::unauthorized(
                UnauthorizedKind::ApiKeyMismatch,
                format!("Invalid api key for user {username}"),
            ));
        }
        Ok(player)
    }

    fn push(&mut self, username: String, role: PlayerRole, api_key: String) -> &Player {
        let id = self.players.len() as u32;
        self.by_name.insert(username.clone(), id);
        self.players.push(Player {
            id,
            username,
            role,
            api_key,
            created_on: OffsetDateTime::now_utc(),
        });
        &self.players[id as usize]
    }
}

/// Mints a fresh 30-character alphanumeric api key.
fn generate_api_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(API_KEY_LEN)
        .map(char::from)
        .collect()
}
