//! Catalog paging, search, debounce and superseded-result discard.

mod support;

use std::time::Duration;

use dex_core::{EntryName, NewEntry};
use dex_views::catalog::{CatalogMode, CatalogView, Refresh};
use dex_views::debounce::Debouncer;
use dex_views::{Route, ViewError};
use pretty_assertions::assert_eq;
use support::{FakeGateway, FakeSession, entry, session, stats};
use tokio::sync::mpsc;

fn dex() -> FakeSession {
    session(FakeGateway::with_entries(vec![
        entry("Bulbasaur", "Bulbizarre"),
        entry("Electrode", "Électrode"),
        entry("Pikachu", "Pikachu"),
        entry("Raichu", "Raichu"),
        entry("Eevee", "Évoli"),
    ]))
}

fn names(view: &CatalogView<'_, FakeGateway, dex_lock::MemoryLockStore>) -> Vec<String> {
    view.snapshot()
        .entries
        .iter()
        .map(|row| row.entry.canonical_name().to_string())
        .collect()
}

#[tokio::test]
async fn pagination_flags_follow_the_page() {
    let session = dex();
    let view = CatalogView::new(&session);

    view.show_page(0).await.unwrap();
    let first = view.snapshot();
    assert_eq!(first.mode, CatalogMode::Page);
    assert!(!first.has_previous);
    assert!(first.has_next);

    view.next_page().await.unwrap();
    let second = view.snapshot();
    assert_eq!(second.page, 1);
    assert!(second.has_previous);
    assert!(second.has_next);

    view.previous_page().await.unwrap();
    view.previous_page().await.unwrap();
    assert_eq!(view.snapshot().page, 0);
    assert_eq!(session.gateway.calls(), vec!["list_page 0", "list_page 1", "list_page 0"]);
}

#[tokio::test]
async fn search_filters_the_full_collection_client_side() {
    let session = dex();
    let view = CatalogView::new(&session);

    view.show_search("CHU").await.unwrap();

    assert_eq!(names(&view), vec!["Pikachu", "Raichu"]);
    assert_eq!(
        view.snapshot().mode,
        CatalogMode::Search {
            query: "CHU".into()
        }
    );
    assert_eq!(session.gateway.calls(), vec!["list_all"]);
}

#[tokio::test]
async fn accents_are_ignored_both_ways() {
    let session = dex();
    let view = CatalogView::new(&session);

    view.show_search("électrode").await.unwrap();
    assert_eq!(names(&view), vec!["Electrode"]);

    view.show_search("evoli").await.unwrap();
    assert_eq!(names(&view), vec!["Eevee"]);
}

#[tokio::test]
async fn blank_search_falls_back_to_the_listing() {
    let session = dex();
    let view = CatalogView::new(&session);

    view.show_search("   ").await.unwrap();

    assert_eq!(view.snapshot().mode, CatalogMode::Page);
    assert_eq!(session.gateway.calls(), vec!["list_page 0"]);
}

#[tokio::test]
async fn failure_keeps_prior_entries_and_sets_notice() {
    let session = dex();
    let view = CatalogView::new(&session);
    view.show_page(0).await.unwrap();

    session.gateway.fail("list_all");
    let err = view.show_search("pika").await.unwrap_err();

    assert!(matches!(err, ViewError::Gateway(_)));
    let snapshot = view.snapshot();
    assert_eq!(snapshot.entries.len(), 5);
    assert!(!snapshot.loading);
    assert_eq!(snapshot.notice.as_deref(), Some("request failed (500): list_all failed"));

    view.dismiss_notice();
    assert_eq!(view.snapshot().notice, None);
}

#[tokio::test(start_paused = true)]
async fn superseded_search_result_is_discarded() {
    let session = dex();
    session
        .gateway
        .delay_list_all([Duration::from_millis(500), Duration::from_millis(10)]);
    let view = CatalogView::new(&session);

    let (first, second) = tokio::join!(view.show_search("bulba"), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        view.show_search("rai").await
    });

    assert_eq!(second.unwrap(), Refresh::Applied);
    assert_eq!(first.unwrap(), Refresh::Stale);
    assert_eq!(names(&view), vec!["Raichu"]);
    assert_eq!(
        view.snapshot().mode,
        CatalogMode::Search {
            query: "rai".into()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn keystroke_burst_triggers_one_search() {
    let session = dex();
    let view = CatalogView::new(&session);
    let (tx, rx) = mpsc::channel(8);
    let mut debouncer = Debouncer::new(rx, session.settings.debounce);

    tokio::spawn(async move {
        for query in ["r", "ra", "rai", "raic", "raichu"] {
            tx.send(query.to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(40)).await;
        }
    });

    while let Some(query) = debouncer.next().await {
        view.show_search(&query).await.unwrap();
    }

    assert_eq!(session.gateway.count("list_all"), 1);
    assert_eq!(names(&view), vec!["Raichu"]);
}

#[tokio::test]
async fn create_validates_before_requesting() {
    let session = dex();
    let view = CatalogView::new(&session);
    let mut payload = NewEntry {
        name: EntryName {
            english: "Dahomon".into(),
            french: "Dahomon".into(),
        },
        types: vec!["Fire".into(), "Flying".into(), "Dragon".into()],
        base: stats(80),
        image: "https://img.example/new.png".into(),
        integrity_hash: None,
    };

    let err = view.create(payload.clone()).await.unwrap_err();
    assert!(matches!(err, ViewError::Core(_)));
    assert_eq!(session.gateway.count("create"), 0);

    payload.types.truncate(2);
    let created = view.create(payload).await.unwrap();
    assert_eq!(created.route, Route::detail("Dahomon"));
    assert_eq!(session.gateway.count("create"), 1);
}
