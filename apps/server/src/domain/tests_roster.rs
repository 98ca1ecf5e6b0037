use crate::domain::player::{is_well_formed_api_key, validate_username, PlayerRole};
use crate::domain::roster::{Roster, API_KEY_LEN};
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, NotFoundKind, UnauthorizedKind,
};

fn fresh_roster() -> Roster {
    Roster::new("adminsecret123")
}

#[test]
fn admin_seeded_at_id_zero() {
    let roster = fresh_roster();

    assert_eq!(roster.count(), 1);
    let admin = roster.get("admin").unwrap();
    assert_eq!(admin.id, 0);
    assert_eq!(admin.role, PlayerRole::Admin);
    assert!(admin.is_admin());
    assert_eq!(admin.api_key, "adminsecret123");
}

#[test]
fn register_assigns_sequential_ids() {
    let mut roster = fresh_roster();

    let alice_id = roster.register("alice").unwrap().id;
    let bob_id = roster.register("bob").unwrap().id;

    assert_eq!(alice_id, 1);
    assert_eq!(bob_id, 2);
    assert_eq!(roster.count(), 3);
    assert_eq!(roster.find_by_id(1).unwrap().username, "alice");
    assert_eq!(roster.find_by_id(2).unwrap().username, "bob");
}

#[test]
fn register_mints_distinct_well_formed_api_keys() {
    let mut roster = fresh_roster();

    let alice_key = roster.register("alice").unwrap().api_key.clone();
    let bob_key = roster.register("bob").unwrap().api_key.clone();

    assert_eq!(alice_key.len(), API_KEY_LEN);
    assert_eq!(bob_key.len(), API_KEY_LEN);
    assert!(is_well_formed_api_key(&alice_key));
    assert!(is_well_formed_api_key(&bob_key));
    assert_ne!(alice_key, bob_key);
}

#[test]
fn register_reserved_name_rejected_without_mutation() {
    let mut roster = fresh_roster();

    let err = roster.register("admin").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::ReservedUsername, _)
    ));
    assert_eq!(roster.count(), 1);
}

#[test]
fn register_duplicate_rejected_without_mutation() {
    let mut roster = fresh_roster();

    let original_key = roster.register("carol").unwrap().api_key.clone();
    let err = roster.register("carol").unwrap_err();

    match err {
        DomainError::Conflict(ConflictKind::UsernameTaken, msg) => {
            assert!(msg.contains("carol"), "unexpected error message: {msg}");
        }
        other => panic!("expected UsernameTaken conflict, got: {other:?}"),
    }
    assert_eq!(roster.count(), 2);
    // The stored record is untouched.
    assert_eq!(roster.get("carol").unwrap().api_key, original_key);
}

#[test]
fn failed_attempts_never_burn_ids() {
    let mut roster = fresh_roster();

    roster.register("dave").unwrap();
    roster.register("admin").unwrap_err();
    roster.register("dave").unwrap_err();

    // Next successful registration continues the sequence.
    assert_eq!(roster.register("erin").unwrap().id, 2);
}

#[test]
fn get_unknown_user_not_found() {
    let roster = fresh_roster();

    let err = roster.get("ghost").unwrap_err();
    match err {
        DomainError::NotFound(NotFoundKind::User, msg) => {
            assert!(
                msg.contains("Register with"),
                "expected a registration hint, got: {msg}"
            );
        }
        other => panic!("expected User not found, got: {other:?}"),
    }
    assert!(roster.find("ghost").is_none());
}

#[test]
fn get_by_id_unknown_not_found() {
    let roster = fresh_roster();

    assert!(roster.find_by_id(0).is_some());
    assert!(matches!(
        roster.get_by_id(7).unwrap_err(),
        DomainError::NotFound(NotFoundKind::User, _)
    ));
}

#[test]
fn authorize_accepts_matching_key() {
    let mut roster = fresh_roster();
    let key = roster.register("frank").unwrap().api_key.clone();

    let player = roster.authorize("frank", &key).unwrap();
    assert_eq!(player.username, "frank");
}

#[test]
fn authorize_rejects_wrong_key_without_echoing_it() {
    let mut roster = fresh_roster();
    roster.register("grace").unwrap();

    let supplied = "totallywrongkey42";
    let err = roster.authorize("grace", supplied).unwrap_err();
    match err {
        DomainError::Unauthorized(UnauthorizedKind::ApiKeyMismatch, msg) => {
            assert!(msg.contains("grace"));
            assert!(
                !msg.contains(supplied),
                "supplied api key must not be echoed: {msg}"
            );
        }
        other => panic!("expected ApiKeyMismatch, got: {other:?}"),
    }
}

#[test]
fn authorize_unknown_user_is_not_found() {
    let roster = fresh_roster();

    assert!(matches!(
        roster.authorize("nobody", "whatever").unwrap_err(),
        DomainError::NotFound(NotFoundKind::User, _)
    ));
}

#[test]
fn seed_takes_the_next_sequential_id() {
    let mut roster = fresh_roster();

    assert_eq!(roster.seed("user01", "key01").id, 1);
    assert_eq!(roster.seed("user02", "key02").id, 2);
    assert_eq!(roster.count(), 3);
    assert_eq!(roster.get("user02").unwrap().role, PlayerRole::Regular);
}

#[test]
fn username_format_rules() {
    for valid in ["ab", "user01", "aB2c", "admin", "zz9Z"] {
        assert!(validate_username(valid).is_ok(), "expected '{valid}' valid");
    }
    for invalid in ["", "a", "Abc", "1user", "user name", "user_name", "user!", "ADMIN"] {
        assert!(
            validate_username(invalid).is_err(),
            "expected '{invalid}' invalid"
        );
    }
}

#[test]
fn api_key_format_rules() {
    assert!(is_well_formed_api_key("GVTu6CaxvzHQWFAn6eMi8TfVVq2BcK"));
    assert!(is_well_formed_api_key("abc123"));
    assert!(!is_well_formed_api_key(""));
    assert!(!is_well_formed_api_key("####"));
    assert!(!is_well_formed_api_key("key with spaces"));
    assert!(!is_well_formed_api_key("key-with-dashes"));
}
