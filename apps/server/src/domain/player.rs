//! Participant identity types and format rules.

use std::fmt;

use lazy_regex::regex_is_match;
use serde::Serialize;
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, ValidationKind};

/// Username reserved for the built-in administrator (always id 0).
pub const ADMIN_USERNAME: &str = "admin";

/// Shortest username the registry accepts.
pub const MIN_USERNAME_LEN: usize = 2;

/// Participant role. Exactly one `Admin` exists per process, seeded at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRole {
    Admin,
    Regular,
}

impl PlayerRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Regular => "REGULAR",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered participant.
///
/// Ids are dense: the admin holds 0 and every registration takes the next
/// integer. The id doubles as the player's position in the whisper chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub username: String,
    pub role: PlayerRole,
    pub api_key: String,
    pub created_on: OffsetDateTime,
}

impl Player {
    pub fn is_admin(&self) -> bool {
        self.role == PlayerRole::Admin
    }
}

/// Validate a username against the registration rules: at least two
/// characters, starting with a lowercase letter, alphanumeric throughout.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.len() < MIN_USERNAME_LEN || !regex_is_match!(r"^[a-z]+[a-zA-Z0-9]*$", username) {
        return Err(DomainError::validation(
            ValidationKind::Username,
            format!(
                "Invalid username '{username}': must be at least {MIN_USERNAME_LEN} characters, \
                 start with a lowercase letter, and contain only letters and digits"
            ),
        ));
    }
    Ok(())
}

/// Api keys are opaque alphanumeric strings, however they were minted.
pub fn is_well_formed_api_key(api_key: &str) -> bool {
    regex_is_match!(r"^[a-zA-Z0-9]+$", api_key)
}
