use crate::config::admin_key::DEFAULT_ADMIN_API_KEY;
use crate::config::roster_file::RosterEntry;
use crate::domain::player::is_well_formed_api_key;
use crate::domain::roster::Roster;
use crate::error::AppError;
use crate::errors::domain::{ConfigIssue, DomainError};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    admin_api_key: String,
    entries: Vec<RosterEntry>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            admin_api_key: DEFAULT_ADMIN_API_KEY.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn with_admin_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.admin_api_key = api_key.into();
        self
    }

    /// Seed the roster from validated config entries.
    pub fn with_entries(mut self, entries: Vec<RosterEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Append one player with the next free id. Test convenience.
    pub fn with_player(mut self, username: impl Into<String>, api_key: impl Into<String>) -> Self {
        let id = self.entries.len() as u32 + 1;
        self.entries.push(RosterEntry {
            id,
            username: username.into(),
            api_key: api_key.into(),
        });
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        if !is_well_formed_api_key(&self.admin_api_key) {
            return Err(DomainError::invalid_config(
                ConfigIssue::BadApiKey,
                "Admin api key must be a non-empty alphanumeric string".to_string(),
            )
            .into());
        }

        let mut roster = Roster::new(self.admin_api_key);
        let mut entries = self.entries;
        entries.sort_by_key(|e| e.id);
        for entry in entries {
            // Config validation guarantees ids are contiguous from 1, so
            // push order reproduces them exactly.
            debug_assert_eq!(entry.id as usize, roster.count());
            roster.seed(entry.username, entry.api_key);
        }
        Ok(AppState::new(roster))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
