//! Domain-level error type used across the registry and the game engine.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    Username,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    User,
    Message,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    UsernameTaken,
    Other(String),
}

/// Credential failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnauthorizedKind {
    ApiKeyMismatch,
}

/// Turn-order and access rule violations
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ForbiddenKind {
    ReservedUsername,
    OutOfTurn,
    NotNext,
    GameFinished,
    TooFewPlayers,
    AlreadyDelivered,
    Other(String),
}

/// Roster configuration problems, one variant per rule in the
/// validation matrix so tests can assert the exact failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigIssue {
    Unreadable,
    Malformed,
    MissingField,
    TooFewPlayers,
    ReservedId,
    ReservedUsername,
    AdminEntry,
    UnknownType,
    BadUsername,
    BadApiKey,
    DuplicateUsername,
    DuplicateId,
    NonContiguousIds,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Credential mismatch for a known identity
    Unauthorized(UnauthorizedKind, String),
    /// Action understood but not allowed in the current state
    Forbidden(ForbiddenKind, String),
    /// Action attempted before the round started
    TooEarly(String),
    /// Boot-time configuration rejected
    InvalidConfig(ConfigIssue, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Unauthorized(kind, d) => write!(f, "unauthorized {kind:?}: {d}"),
            DomainError::Forbidden(kind, d) => write!(f, "forbidden {kind:?}: {d}"),
            DomainError::TooEarly(d) => write!(f, "too early: {d}"),
            DomainError::InvalidConfig(issue, d) => write!(f, "invalid config {issue:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn unauthorized(kind: UnauthorizedKind, detail: impl Into<String>) -> Self {
        Self::Unauthorized(kind, detail.into())
    }
    pub fn forbidden(kind: ForbiddenKind, detail: impl Into<String>) -> Self {
        Self::Forbidden(kind, detail.into())
    }
    pub fn too_early(detail: impl Into<String>) -> Self {
        Self::TooEarly(detail.into())
    }
    pub fn invalid_config(issue: ConfigIssue, detail: impl Into<String>) -> Self {
        Self::InvalidConfig(issue, detail.into())
    }
}
