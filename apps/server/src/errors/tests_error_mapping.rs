// Unit tests for error mapping - pure domain logic without HTTP dependencies
use crate::errors::domain::{
    ConfigIssue, ConflictKind, DomainError, ForbiddenKind, NotFoundKind, UnauthorizedKind,
    ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::Username, "bad username");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidUsername);
    assert_eq!(app.status().as_u16(), 400);

    // Generic validation fallback
    let other = DomainError::validation(ValidationKind::Other("field".into()), "bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts() {
    let taken = DomainError::conflict(ConflictKind::UsernameTaken, "name taken");
    let app: AppError = taken.into();
    assert_eq!(app.code().as_str(), "USERNAME_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    // Generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("some conflict".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let user = DomainError::not_found(NotFoundKind::User, "no user");
    let app: AppError = user.into();
    assert_eq!(app.code().as_str(), "USER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let message = DomainError::not_found(NotFoundKind::Message, "no message");
    let app: AppError = message.into();
    assert_eq!(app.code().as_str(), "MESSAGE_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let other = DomainError::not_found(NotFoundKind::Other("thing".into()), "no thing");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_api_key_mismatch_to_403() {
    let de = DomainError::unauthorized(UnauthorizedKind::ApiKeyMismatch, "wrong key");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidApiKey);
    assert_eq!(app.status().as_u16(), 403);
    assert!(matches!(app, AppError::InvalidApiKey { .. }));
}

#[test]
fn maps_forbidden_kinds() {
    let cases = vec![
        (ForbiddenKind::ReservedUsername, "RESERVED_USERNAME"),
        (ForbiddenKind::OutOfTurn, "OUT_OF_TURN"),
        (ForbiddenKind::NotNext, "NOT_NEXT"),
        (ForbiddenKind::GameFinished, "GAME_FINISHED"),
        (ForbiddenKind::TooFewPlayers, "TOO_FEW_PLAYERS"),
        (ForbiddenKind::AlreadyDelivered, "ALREADY_DELIVERED"),
        (ForbiddenKind::Other("misc".into()), "FORBIDDEN"),
    ];

    for (kind, expected_code) in cases {
        let app: AppError = DomainError::forbidden(kind, "denied").into();
        assert_eq!(app.code().as_str(), expected_code);
        assert_eq!(app.status().as_u16(), 403);
    }
}

#[test]
fn maps_too_early_to_425() {
    let de = DomainError::too_early("round not started");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::GameNotStarted);
    assert_eq!(app.status().as_u16(), 425);
    assert!(matches!(app, AppError::TooEarly { .. }));
}

#[test]
fn maps_config_to_500() {
    let de = DomainError::invalid_config(ConfigIssue::BadApiKey, "key rejected");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::Username, "invalid input");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::Username, _)
    ));

    let conflict = DomainError::conflict(ConflictKind::UsernameTaken, "name taken");
    assert!(matches!(
        conflict,
        DomainError::Conflict(ConflictKind::UsernameTaken, _)
    ));

    let not_found = DomainError::not_found(NotFoundKind::User, "user missing");
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::User, _)
    ));

    let forbidden = DomainError::forbidden(ForbiddenKind::OutOfTurn, "not your turn");
    assert!(matches!(
        forbidden,
        DomainError::Forbidden(ForbiddenKind::OutOfTurn, _)
    ));

    let config = DomainError::invalid_config(ConfigIssue::DuplicateId, "id reused");
    assert!(matches!(
        config,
        DomainError::InvalidConfig(ConfigIssue::DuplicateId, _)
    ));
}
