//! End-to-end quarantine flows across the detail and quarantine screens.

mod support;

use dex_lock::LockStore;
use dex_views::detail::{DetailEntry, DetailView};
use dex_views::quarantine::QuarantineScreen;
use dex_views::{Confirmation, GuardState, Route, ViewError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use support::{FakeGateway, FakeSession, entry, session};

fn catalog() -> FakeSession {
    session(FakeGateway::with_entries(vec![
        entry("Bulbasaur", "Bulbizarre"),
        entry("Pikachu", "Pikachu"),
        entry("Eevee", "Évoli"),
    ]))
}

fn locked_on_pikachu() -> FakeSession {
    let session = catalog();
    session.locks.write("Pikachu").unwrap();
    session
}

#[rstest]
#[case("Pikachu")]
#[case("pikachu")]
#[case("PIKACHU")]
#[tokio::test]
async fn locked_entity_opens_in_any_case(#[case] requested: &str) {
    let session = locked_on_pikachu();
    let DetailEntry::Loaded(view) = DetailView::open(&session, requested).await.unwrap() else {
        panic!("expected {requested} to load");
    };
    assert_eq!(
        view.guard_state(),
        GuardState::LockedMatching {
            locked: "Pikachu".into()
        }
    );
}

#[tokio::test]
async fn other_entity_is_redirected_to_the_alert() {
    let session = locked_on_pikachu();
    let DetailEntry::Redirected(outcome) = DetailView::open(&session, "Bulbasaur").await.unwrap()
    else {
        panic!("expected a redirect");
    };

    assert!(outcome.state.is_blocked());
    assert_eq!(outcome.notices.len(), 1);
    let route = outcome.route.unwrap();
    assert_eq!(route, Route::quarantine("Pikachu"));
    assert_eq!(route.to_string(), "/integrity-alert?pokemon=Pikachu");
    // The blocked entity is never fetched.
    assert_eq!(session.gateway.count("get_by_name"), 0);
}

#[tokio::test]
async fn purge_from_blocked_clears_everything_once() {
    let session = locked_on_pikachu();
    let screen = QuarantineScreen::open(&session, Some("Bulbasaur"));
    assert!(screen.state().is_blocked());

    let Confirmation::Completed(outcome) = screen.purge(&true).await.unwrap() else {
        panic!("confirmed purge should complete");
    };

    assert_eq!(session.locks.read(), None);
    assert_eq!(outcome.state, GuardState::Clear);
    assert_eq!(outcome.route, Some(Route::Catalog));
    assert_eq!(session.gateway.count("purge"), 1);
    assert!(session.gateway.entries().is_empty());
}

#[tokio::test]
async fn restore_lands_on_the_locked_entity() {
    let session = locked_on_pikachu();
    let screen = QuarantineScreen::open(&session, Some("Bulbasaur"));

    let outcome = screen.restore().await.unwrap();

    assert_eq!(session.locks.read(), None);
    assert_eq!(outcome.route, Some(Route::detail("Pikachu")));
    assert_eq!(
        outcome.route.unwrap().to_string(),
        "/pokemonDetails/Pikachu"
    );
}

#[tokio::test]
async fn keep_returns_to_catalog_with_the_lock_intact() {
    let session = locked_on_pikachu();
    let screen = QuarantineScreen::open(&session, Some("Eevee"));

    let outcome = screen.keep().await.unwrap();

    assert_eq!(outcome.route, Some(Route::Catalog));
    assert_eq!(
        session.locks.read().map(|lock| lock.pokemon_name),
        Some("Pikachu".into())
    );
    // Detail navigation stays blocked afterwards.
    let reopened = DetailView::open(&session, "Eevee").await.unwrap();
    assert!(matches!(reopened, DetailEntry::Redirected(_)));
}

#[tokio::test]
async fn declined_purge_issues_no_request() {
    let session = locked_on_pikachu();
    let screen = QuarantineScreen::open(&session, None);

    let result = screen.purge(&false).await.unwrap();

    assert!(result.is_declined());
    assert!(session.gateway.calls().is_empty());
    assert!(session.locks.read().is_some());
}

#[tokio::test]
async fn failed_purge_keeps_the_lock() {
    let session = locked_on_pikachu();
    session.gateway.fail("purge");
    let screen = QuarantineScreen::open(&session, None);

    let err = screen.purge(&true).await.unwrap_err();

    assert!(matches!(err, ViewError::Gateway(_)));
    assert!(session.locks.read().is_some());
}

#[rstest]
#[case(Some("Mew"), "Mew")]
#[case(Some("  "), "Pikachu")]
#[case(None, "Pikachu")]
fn subject_falls_back_to_the_lock(#[case] requested: Option<&str>, #[case] expected: &str) {
    let session = locked_on_pikachu();
    let screen = QuarantineScreen::open(&session, requested);
    assert_eq!(screen.subject(), expected);
}

#[test]
fn subject_is_unknown_without_lock_or_parameter() {
    let session = catalog();
    let screen = QuarantineScreen::open(&session, None);
    assert_eq!(screen.subject(), "Unknown");
    assert_eq!(screen.state(), GuardState::Clear);
}

#[tokio::test]
async fn restore_without_a_lock_is_rejected() {
    let session = catalog();
    let screen = QuarantineScreen::open(&session, Some("Pikachu"));
    let err = screen.restore().await.unwrap_err();
    assert!(matches!(err, ViewError::Core(_)));
}

#[tokio::test]
async fn simulate_then_remove_corruption_round_trips_the_lock() {
    let session = catalog();
    let DetailEntry::Loaded(mut view) = DetailView::open(&session, "Eevee").await.unwrap() else {
        panic!("clear catalog should load");
    };

    let locked = view.toggle_simulated_corruption().await.unwrap();
    assert_eq!(locked.route, Some(Route::quarantine("Eevee")));
    assert_eq!(
        session.locks.read().map(|lock| lock.pokemon_name),
        Some("Eevee".into())
    );

    // Another entity is now blocked.
    let blocked = DetailView::open(&session, "Pikachu").await.unwrap();
    assert!(matches!(blocked, DetailEntry::Redirected(_)));

    let cleared = view.toggle_simulated_corruption().await.unwrap();
    assert_eq!(cleared.state, GuardState::Clear);
    assert_eq!(session.locks.read(), None);
}

#[tokio::test]
async fn simulating_while_another_entity_is_locked_is_rejected() {
    let session = catalog();
    let DetailEntry::Loaded(mut view) = DetailView::open(&session, "Eevee").await.unwrap() else {
        panic!("clear catalog should load");
    };
    session.locks.write("Pikachu").unwrap();

    let err = view.toggle_simulated_corruption().await.unwrap_err();

    assert!(matches!(err, ViewError::Core(_)));
    assert_eq!(
        session.locks.read().map(|lock| lock.pokemon_name),
        Some("Pikachu".into())
    );
}

#[tokio::test]
async fn corrupt_persisted_lock_reads_as_clear() {
    let session = dex_views::Session::new(
        FakeGateway::with_entries(vec![entry("Bulbasaur", "Bulbizarre")]),
        dex_lock::MemoryLockStore::with_raw("{not json"),
    );
    let opened = DetailView::open(&session, "Bulbasaur").await.unwrap();
    assert!(matches!(opened, DetailEntry::Loaded(_)));
}
