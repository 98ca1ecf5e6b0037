//! Turn-order game engine.
//!
//! One round per process: a chain of whispers walking the roster in
//! ascending id order. The engine owns the status machine and the delivered
//! messages; it reads the roster but never mutates it.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::domain::roster::Roster;
use crate::errors::domain::{DomainError, ForbiddenKind, NotFoundKind};

/// Minimum total participants (admin included) before any whisper may relay.
pub const MIN_PLAYERS: usize = 3;

/// Round status. Transitions are strictly forward:
/// `NotStarted → Started → AwaitingFinish → Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// No whisper relayed yet.
    NotStarted,
    /// At least one whisper relayed; chain still has distance to cover.
    Started,
    /// The second-to-last participant has received; one relay remains.
    AwaitingFinish,
    /// The last participant has received; the round is terminal.
    Finished,
}

impl GameStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::Started => "STARTED",
            Self::AwaitingFinish => "AWAITING_FINISH",
            Self::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A delivered whisper, keyed by recipient in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub from_user: String,
    pub message: String,
}

/// Result of a successful relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    pub info: String,
    pub status: GameStatus,
}

/// Result of a listen by an authorized participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenOutcome {
    /// The caller holds the turn: their message, plus who they whisper to
    /// next (`None` once the round has finished).
    YourTurn {
        delivery: Delivery,
        status: GameStatus,
        next_player: Option<String>,
    },
    /// Somebody else holds the turn. Informational, not an error.
    NotYourTurn {
        current_player: String,
        status: GameStatus,
    },
}

/// The whisper round.
///
/// `current_id`/`next_id` always satisfy `next_id == current_id + 1`; the
/// pair starts at (1, 2) and advances to the recipient on every relay.
#[derive(Debug)]
pub struct Game {
    status: GameStatus,
    current_id: u32,
    next_id: u32,
    deliveries: HashMap<String, Delivery>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            status: GameStatus::NotStarted,
            current_id: 1,
            next_id: 2,
            deliveries: HashMap::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_id(&self) -> u32 {
        self.current_id
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    /// Relays one whisper from the current actor to the next.
    ///
    /// Every guard runs before any state is written, so a failed relay
    /// leaves the round untouched.
    pub fn relay(
        &mut self,
        roster: &Roster,
        from_username: &str,
        api_key: &str,
        to_username: &str,
        message: impl Into<String>,
    ) -> Result<RelayOutcome, DomainError> {
        let sender = roster.authorize(from_username, api_key)?;

        if self.status == GameStatus::Finished {
            return Err(DomainError::forbidden(
                ForbiddenKind::GameFinished,
                "The game has finished".to_string(),
            ));
        }

        let count = roster.count();
        if count < MIN_PLAYERS {
            return Err(DomainError::forbidden(
                ForbiddenKind::TooFewPlayers,
                format!("Not enough players: need {MIN_PLAYERS}, have {count} registered"),
            ));
        }

        let recipient = roster.get(to_username)?;

        if sender.id != self.current_id {
            return Err(DomainError::forbidden(
                ForbiddenKind::OutOfTurn,
                format!("Sorry {from_username}, it is not your turn"),
            ));
        }
        if recipient.id != self.next_id {
            return Err(DomainError::forbidden(
                ForbiddenKind::NotNext,
                format!("Sorry, {to_username} is not next"),
            ));
        }
        if self.deliveries.contains_key(to_username) {
            return Err(DomainError::forbidden(
                ForbiddenKind::AlreadyDelivered,
                format!("User {to_username} has already received a whisper this round"),
            ));
        }

        // All guards passed; mutate in one go.
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Started;
        }
        self.deliveries.insert(
            to_username.to_string(),
            Delivery {
                from_user: from_username.to_string(),
                message: message.into(),
            },
        );
        self.current_id = recipient.id;
        self.next_id = recipient.id + 1;

        // The chain closes from the tail: the second-to-last recipient flips
        // the round to AwaitingFinish, the last one to Finished.
        let count = count as u32;
        if recipient.id == count - 2 {
            self.status = GameStatus::AwaitingFinish;
        } else if recipient.id == count - 1 {
            self.status = GameStatus::Finished;
        }

        Ok(RelayOutcome {
            info: format!("Sent message to {to_username}"),
            status: self.status,
        })
    }

    /// Reads the round from one participant's point of view. Pure read,
    /// idempotent across repeat calls.
    pub fn listen(
        &self,
        roster: &Roster,
        username: &str,
        api_key: &str,
    ) -> Result<ListenOutcome, DomainError> {
        let caller = roster.authorize(username, api_key)?;

        if self.status == GameStatus::NotStarted {
            return Err(DomainError::too_early("The game has not started yet"));
        }

        if caller.id == self.current_id {
            // The current actor always has a delivery; missing means the
            // round state was corrupted somewhere.
            let delivery = self.deliveries.get(username).ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Message,
                    format!("No message recorded for user {username}"),
                )
            })?;
            let next_player = roster.find_by_id(self.next_id).map(|p| p.username.clone());
            return Ok(ListenOutcome::YourTurn {
                delivery: delivery.clone(),
                status: self.status,
                next_player,
            });
        }

        let current = roster.get_by_id(self.current_id)?;
        Ok(ListenOutcome::NotYourTurn {
            current_player: current.username.clone(),
            status: self.status,
        })
    }
}
