//! Roster file loading and validation.
//!
//! The roster is a JSON array of pre-registered regular players. Parsing is
//! lenient (every field optional in the DTO) so validation can name exactly
//! which field of which entry is wrong; the checks themselves are strict.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::player::{is_well_formed_api_key, validate_username, ADMIN_USERNAME};
use crate::errors::domain::{ConfigIssue, DomainError};

/// Fewest roster entries a playable deployment needs. Together with the
/// admin this reaches the in-game minimum of three participants.
pub const MIN_ROSTER_ENTRIES: usize = 2;

/// A validated roster entry. The role is always `REGULAR`; the admin is
/// seeded separately and never appears in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: u32,
    pub username: String,
    pub api_key: String,
}

/// Raw wire shape of one roster entry before validation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Load and validate the roster file. Returns entries sorted by id.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<RosterEntry>, DomainError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| {
        DomainError::invalid_config(
            ConfigIssue::Unreadable,
            format!("Cannot read roster file '{}': {e}", path.display()),
        )
    })?;
    parse_roster(&raw)
}

/// Validate roster JSON. Per-entry field checks first, then whole-file
/// uniqueness and contiguity checks.
pub fn parse_roster(raw: &str) -> Result<Vec<RosterEntry>, DomainError> {
    let raw_entries: Vec<RawEntry> = serde_json::from_str(raw).map_err(|e| {
        DomainError::invalid_config(
            ConfigIssue::Malformed,
            format!("Roster is not a valid JSON array of users: {e}"),
        )
    })?;

    if raw_entries.len() < MIN_ROSTER_ENTRIES {
        return Err(DomainError::invalid_config(
            ConfigIssue::TooFewPlayers,
            format!(
                "Not enough players to play a game: need at least {MIN_ROSTER_ENTRIES}, found {}",
                raw_entries.len()
            ),
        ));
    }

    let mut entries = Vec::with_capacity(raw_entries.len());
    for (index, raw_entry) in raw_entries.iter().enumerate() {
        entries.push(validate_entry(index, raw_entry)?);
    }

    let mut seen_names = HashSet::new();
    for entry in &entries {
        if !seen_names.insert(entry.username.as_str()) {
            return Err(DomainError::invalid_config(
                ConfigIssue::DuplicateUsername,
                format!("Username '{}' appears more than once", entry.username),
            ));
        }
    }

    let mut ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    if ids.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(DomainError::invalid_config(
            ConfigIssue::DuplicateId,
            "Roster ids must be unique".to_string(),
        ));
    }
    // Sorted and unique, so contiguity from 1 reduces to ids == 1..=n. Gaps
    // would strand the turn pointer on a nonexistent player.
    let expected: Vec<u32> = (1..=ids.len() as u32).collect();
    if ids != expected {
        return Err(DomainError::invalid_config(
            ConfigIssue::NonContiguousIds,
            format!("Roster ids must be exactly 1..={} with no gaps", ids.len()),
        ));
    }

    entries.sort_by_key(|e| e.id);
    Ok(entries)
}

fn validate_entry(index: usize, raw: &RawEntry) -> Result<RosterEntry, DomainError> {
    let id = raw.id.ok_or_else(|| missing(index, "id"))?;
    if id == 0 {
        return Err(DomainError::invalid_config(
            ConfigIssue::ReservedId,
            format!("Entry {index}: id 0 is reserved for the admin"),
        ));
    }
    let id = u32::try_from(id).map_err(|_| {
        DomainError::invalid_config(
            ConfigIssue::NonContiguousIds,
            format!("Entry {index}: id {id} must be a positive integer"),
        )
    })?;

    let username = raw
        .username
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| missing(index, "username"))?;
    if username == ADMIN_USERNAME {
        return Err(DomainError::invalid_config(
            ConfigIssue::ReservedUsername,
            format!("Entry {index}: the username '{ADMIN_USERNAME}' is reserved"),
        ));
    }
    validate_username(username).map_err(|_| {
        DomainError::invalid_config(
            ConfigIssue::BadUsername,
            format!("Entry {index}: invalid username '{username}'"),
        )
    })?;

    let api_key = raw
        .api_key
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| missing(index, "api_key"))?;
    if !is_well_formed_api_key(api_key) {
        return Err(DomainError::invalid_config(
            ConfigIssue::BadApiKey,
            format!("Entry {index}: api_key must be alphanumeric"),
        ));
    }

    let kind = raw
        .kind
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| missing(index, "type"))?;
    match kind {
        "REGULAR" => {}
        "ADMIN" => {
            return Err(DomainError::invalid_config(
                ConfigIssue::AdminEntry,
                format!("Entry {index}: the admin cannot be configured through the roster file"),
            ));
        }
        other => {
            return Err(DomainError::invalid_config(
                ConfigIssue::UnknownType,
                format!("Entry {index}: unknown type '{other}', expected REGULAR"),
            ));
        }
    }

    Ok(RosterEntry {
        id,
        username: username.to_string(),
        api_key: api_key.to_string(),
    })
}

fn missing(index: usize, field: &str) -> DomainError {
    DomainError::invalid_config(
        ConfigIssue::MissingField,
        format!("Entry {index}: missing required field '{field}'"),
    )
}
