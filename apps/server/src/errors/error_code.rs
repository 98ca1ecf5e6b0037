//! Error codes for the whisper chain API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the whisper chain API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Username does not satisfy the format rules
    InvalidUsername,
    /// Request body is not valid JSON
    InvalidJson,
    /// Request body could not be read
    MalformedBody,
    /// General validation error
    ValidationError,

    // Authorization
    /// Api key missing or does not match the addressed user
    InvalidApiKey,
    /// The admin username cannot be registered
    ReservedUsername,
    /// Access denied
    Forbidden,

    // Turn Order
    /// Sender does not hold the turn
    OutOfTurn,
    /// Recipient is not the player the turn passes to
    NotNext,
    /// Recipient already received a message this round
    AlreadyDelivered,
    /// The round has already finished
    GameFinished,
    /// The round has not started yet
    GameNotStarted,
    /// Fewer participants than a round requires
    TooFewPlayers,

    // Resource Not Found
    /// User not found in the registry
    UserNotFound,
    /// No message recorded for the addressed user
    MessageNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Username already registered
    UsernameTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidJson => "INVALID_JSON",
            Self::MalformedBody => "MALFORMED_BODY",
            Self::ValidationError => "VALIDATION_ERROR",

            // Authorization
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::ReservedUsername => "RESERVED_USERNAME",
            Self::Forbidden => "FORBIDDEN",

            // Turn Order
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::NotNext => "NOT_NEXT",
            Self::AlreadyDelivered => "ALREADY_DELIVERED",
            Self::GameFinished => "GAME_FINISHED",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::TooFewPlayers => "TOO_FEW_PLAYERS",

            // Resource Not Found
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::MessageNotFound => "MESSAGE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
