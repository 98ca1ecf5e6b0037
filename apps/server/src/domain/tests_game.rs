use crate::domain::game::{Game, GameStatus, ListenOutcome, MIN_PLAYERS};
use crate::domain::roster::Roster;
use crate::errors::domain::{DomainError, ForbiddenKind, NotFoundKind, UnauthorizedKind};

/// Roster with the admin plus `regulars` players named user01.., keyed key01..
fn roster_with(regulars: usize) -> Roster {
    let mut roster = Roster::new("adminsecret123");
    for i in 1..=regulars {
        roster.seed(format!("user{i:02}"), format!("key{i:02}"));
    }
    roster
}

#[test]
fn relay_happy_path_four_players() {
    let roster = roster_with(3);
    let mut game = Game::new();

    let outcome = game.relay(&roster, "user01", "key01", "user02", "hi").unwrap();

    assert_eq!(outcome.info, "Sent message to user02");
    // Recipient id 2 == count - 2 with four participants.
    assert_eq!(outcome.status, GameStatus::AwaitingFinish);
    assert_eq!(game.current_id(), 2);
    assert_eq!(game.next_id(), 3);
    assert_eq!(game.delivery_count(), 1);
}

#[test]
fn relay_rejects_too_few_players() {
    // Admin + one regular: two participants, below the minimum of three.
    let roster = roster_with(1);
    let mut game = Game::new();

    let err = game
        .relay(&roster, "user01", "key01", "admin", "hello")
        .unwrap_err();
    match err {
        DomainError::Forbidden(ForbiddenKind::TooFewPlayers, msg) => {
            assert!(msg.contains(&MIN_PLAYERS.to_string()));
        }
        other => panic!("expected TooFewPlayers, got: {other:?}"),
    }
    assert_eq!(game.status(), GameStatus::NotStarted);
}

#[test]
fn relay_rejects_out_of_turn_sender() {
    let roster = roster_with(3);
    let mut game = Game::new();

    let err = game
        .relay(&roster, "user02", "key02", "user03", "psst")
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::OutOfTurn, _)
    ));
    // No partial mutation.
    assert_eq!(game.status(), GameStatus::NotStarted);
    assert_eq!(game.current_id(), 1);
    assert_eq!(game.delivery_count(), 0);
}

#[test]
fn relay_rejects_recipient_who_is_not_next() {
    let roster = roster_with(3);
    let mut game = Game::new();

    let err = game
        .relay(&roster, "user01", "key01", "user03", "skip ahead")
        .unwrap_err();
    match err {
        DomainError::Forbidden(ForbiddenKind::NotNext, msg) => {
            assert!(msg.contains("user03"), "unexpected error message: {msg}");
        }
        other => panic!("expected NotNext, got: {other:?}"),
    }
    assert_eq!(game.delivery_count(), 0);
}

#[test]
fn relay_unknown_recipient_not_found() {
    let roster = roster_with(3);
    let mut game = Game::new();

    assert!(matches!(
        game.relay(&roster, "user01", "key01", "ghost", "boo").unwrap_err(),
        DomainError::NotFound(NotFoundKind::User, _)
    ));
}

#[test]
fn relay_propagates_auth_failures() {
    let roster = roster_with(3);
    let mut game = Game::new();

    assert!(matches!(
        game.relay(&roster, "user01", "wrongkey", "user02", "x").unwrap_err(),
        DomainError::Unauthorized(UnauthorizedKind::ApiKeyMismatch, _)
    ));
    assert!(matches!(
        game.relay(&roster, "nobody", "key01", "user02", "x").unwrap_err(),
        DomainError::NotFound(NotFoundKind::User, _)
    ));
    assert_eq!(game.status(), GameStatus::NotStarted);
}

#[test]
fn relay_after_finish_is_forbidden() {
    // Three participants total: the very first relay already reaches the
    // last recipient (id 2 == count - 1) and finishes the round.
    let roster = roster_with(2);
    let mut game = Game::new();

    let outcome = game.relay(&roster, "user01", "key01", "user02", "done").unwrap();
    assert_eq!(outcome.status, GameStatus::Finished);

    let err = game
        .relay(&roster, "user02", "key02", "user01", "again")
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::GameFinished, _)
    ));
}

#[test]
fn status_progresses_forward_through_the_chain() {
    let roster = roster_with(4);
    let mut game = Game::new();

    let s1 = game.relay(&roster, "user01", "key01", "user02", "a").unwrap();
    assert_eq!(s1.status, GameStatus::Started);
    assert_eq!((game.current_id(), game.next_id()), (2, 3));

    let s2 = game.relay(&roster, "user02", "key02", "user03", "b").unwrap();
    assert_eq!(s2.status, GameStatus::AwaitingFinish);
    assert_eq!((game.current_id(), game.next_id()), (3, 4));

    let s3 = game.relay(&roster, "user03", "key03", "user04", "c").unwrap();
    assert_eq!(s3.status, GameStatus::Finished);
    assert_eq!((game.current_id(), game.next_id()), (4, 5));
    assert_eq!(game.delivery_count(), 3);
}

#[test]
fn failed_relay_leaves_no_partial_state() {
    let roster = roster_with(4);
    let mut game = Game::new();
    game.relay(&roster, "user01", "key01", "user02", "a").unwrap();

    let before = (game.status(), game.current_id(), game.next_id(), game.delivery_count());
    game.relay(&roster, "user02", "key02", "user04", "skip").unwrap_err();
    let after = (game.status(), game.current_id(), game.next_id(), game.delivery_count());

    assert_eq!(before, after);
}

#[test]
fn listen_before_start_is_too_early() {
    let roster = roster_with(2);
    let game = Game::new();

    assert!(matches!(
        game.listen(&roster, "user01", "key01").unwrap_err(),
        DomainError::TooEarly(_)
    ));
}

#[test]
fn listen_by_current_actor_returns_message_idempotently() {
    let roster = roster_with(3);
    let mut game = Game::new();
    game.relay(&roster, "user01", "key01", "user02", "hi").unwrap();

    let first = game.listen(&roster, "user02", "key02").unwrap();
    let second = game.listen(&roster, "user02", "key02").unwrap();
    assert_eq!(first, second);

    match first {
        ListenOutcome::YourTurn {
            delivery,
            status,
            next_player,
        } => {
            assert_eq!(delivery.from_user, "user01");
            assert_eq!(delivery.message, "hi");
            assert_eq!(status, GameStatus::AwaitingFinish);
            assert_eq!(next_player.as_deref(), Some("user03"));
        }
        other => panic!("expected YourTurn, got: {other:?}"),
    }
}

#[test]
fn listen_by_other_player_names_current_actor() {
    let roster = roster_with(3);
    let mut game = Game::new();
    game.relay(&roster, "user01", "key01", "user02", "hi").unwrap();

    match game.listen(&roster, "user03", "key03").unwrap() {
        ListenOutcome::NotYourTurn {
            current_player,
            status,
        } => {
            assert_eq!(current_player, "user02");
            assert_eq!(status, GameStatus::AwaitingFinish);
        }
        other => panic!("expected NotYourTurn, got: {other:?}"),
    }

    // The admin is a participant too and gets the same answer.
    assert!(matches!(
        game.listen(&roster, "admin", "adminsecret123").unwrap(),
        ListenOutcome::NotYourTurn { .. }
    ));
}

#[test]
fn listen_after_finish_has_no_next_player() {
    let roster = roster_with(2);
    let mut game = Game::new();
    game.relay(&roster, "user01", "key01", "user02", "last").unwrap();

    match game.listen(&roster, "user02", "key02").unwrap() {
        ListenOutcome::YourTurn {
            status, next_player, ..
        } => {
            assert_eq!(status, GameStatus::Finished);
            assert_eq!(next_player, None);
        }
        other => panic!("expected YourTurn, got: {other:?}"),
    }
}

#[test]
fn listen_propagates_auth_failures() {
    let roster = roster_with(2);
    let game = Game::new();

    assert!(matches!(
        game.listen(&roster, "user01", "badkey").unwrap_err(),
        DomainError::Unauthorized(UnauthorizedKind::ApiKeyMismatch, _)
    ));
    assert!(matches!(
        game.listen(&roster, "ghost", "key01").unwrap_err(),
        DomainError::NotFound(NotFoundKind::User, _)
    ));
}
